pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to list corpus shards under {path:?}.")]
	ListShards { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to read shard file at {path:?}.")]
	ReadShard { path: std::path::PathBuf, source: std::io::Error },
	#[error("Malformed shard document at {path:?}: {source}")]
	MalformedShard { path: std::path::PathBuf, source: serde_json::Error },
	#[error("Failed to read checkpoint at {path:?}.")]
	ReadCheckpoint { path: std::path::PathBuf, source: std::io::Error },
	#[error("Corrupt checkpoint at {path:?}: {source}")]
	CorruptCheckpoint { path: std::path::PathBuf, source: serde_json::Error },
	#[error("Failed to encode checkpoint for query {query_id}.")]
	EncodeCheckpoint { query_id: u64, source: serde_json::Error },
	#[error("Failed to write checkpoint at {path:?}.")]
	WriteCheckpoint { path: std::path::PathBuf, source: std::io::Error },
	#[error("Failed to write report at {path:?}.")]
	WriteReport { path: std::path::PathBuf, source: std::io::Error },
}
