pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Config(#[from] mixtape_config::Error),
	#[error(transparent)]
	Engine(#[from] mixtape_engine::Error),
	#[error(transparent)]
	Storage(#[from] mixtape_storage::Error),
	#[error("Worker task failed: {0}")]
	Join(String),
}
