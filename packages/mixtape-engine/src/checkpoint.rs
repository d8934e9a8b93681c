use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Result, topk::TopK};

/// Durable progress record for one query: which shards have been folded
/// into the running top-K, and the top-K itself.
///
/// This is the only cross-run state in the system. A shard id present in
/// `processed_shards` is never re-scanned for this query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckpointState {
	pub query_id: u64,
	pub processed_shards: BTreeSet<String>,
	pub top_k: TopK,
}

impl CheckpointState {
	/// Fresh first-run state: nothing processed, empty top-K.
	pub fn empty(query_id: u64, capacity: usize) -> Self {
		Self { query_id, processed_shards: BTreeSet::new(), top_k: TopK::new(capacity) }
	}
}

/// Keyed checkpoint persistence, injected into the orchestrator.
///
/// Contract: `put` must stage the whole state before making it visible, so
/// a crash mid-write never exposes a partial state; a state observed as
/// written must survive process death. `get` treats absence as the normal
/// first-run condition, but an unreadable persisted state must surface
/// [`Error::CheckpointCorrupt`](crate::Error::CheckpointCorrupt) rather
/// than silently discarding progress.
pub trait CheckpointStore: Send + Sync {
	fn get(&self, query_id: u64, capacity: usize) -> Result<CheckpointState>;

	fn put(&self, state: &CheckpointState) -> Result<()>;
}
