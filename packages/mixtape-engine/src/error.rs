pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Checkpoint for query {query_id} is unreadable: {message}")]
	CheckpointCorrupt { query_id: u64, message: String },
	#[error("Checkpoint store failed for query {query_id}: {message}")]
	Checkpoint { query_id: u64, message: String },
	#[error("Failed to enumerate corpus shards: {message}")]
	ShardEnumeration { message: String },
	#[error("Failed to load shard {shard_id}: {message}")]
	Shard { shard_id: String, message: String },
}
