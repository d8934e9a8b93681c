mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Corpus, Job, Ranking, Runtime};

use std::{fs, path::Path, thread};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.corpus.shard_dir.as_os_str().is_empty() {
		return Err(Error::Validation { message: "corpus.shard_dir must be non-empty.".to_string() });
	}
	if cfg.job.query_file.as_os_str().is_empty() {
		return Err(Error::Validation { message: "job.query_file must be non-empty.".to_string() });
	}
	if cfg.job.output_file.as_os_str().is_empty() {
		return Err(Error::Validation { message: "job.output_file must be non-empty.".to_string() });
	}
	if cfg.job.checkpoint_dir.as_os_str().is_empty() {
		return Err(Error::Validation {
			message: "job.checkpoint_dir must be non-empty.".to_string(),
		});
	}
	if cfg.ranking.top_k == 0 {
		return Err(Error::Validation {
			message: "ranking.top_k must be greater than zero.".to_string(),
		});
	}
	if cfg.ranking.recommendations == 0 {
		return Err(Error::Validation {
			message: "ranking.recommendations must be greater than zero.".to_string(),
		});
	}
	if cfg.runtime.workers == 0 {
		return Err(Error::Validation {
			message: "runtime.workers must be greater than zero.".to_string(),
		});
	}
	if cfg.runtime.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "runtime.log_level must be non-empty.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	if cfg.runtime.workers == 0 {
		cfg.runtime.workers =
			thread::available_parallelism().map(|parallelism| parallelism.get()).unwrap_or(1);
	}
}
