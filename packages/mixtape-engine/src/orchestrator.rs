use ahash::AHashSet;

use crate::{
	Result,
	checkpoint::CheckpointStore,
	topk::{ScoredCandidate, TopK},
};
use mixtape_domain::{PlaylistRecord, scoring};

/// Everything the scan needs for one query, fixed at orchestration start.
#[derive(Clone, Debug)]
pub struct QueryContext {
	pub query: PlaylistRecord,
	pub seed_tracks: AHashSet<String>,
	pub target_count: usize,
}

impl QueryContext {
	pub fn new(query: PlaylistRecord, target_count: usize) -> Self {
		let seed_tracks = query.track_uris.iter().cloned().collect();

		Self { query, seed_tracks, target_count }
	}
}

/// Corpus access, supplied by the caller: a shard id enumeration plus a
/// per-shard record loader.
pub trait ShardSource: Send + Sync {
	fn shard_ids(&self) -> Result<Vec<String>>;

	fn load(&self, shard_id: &str) -> Result<Vec<PlaylistRecord>>;
}

/// Drives one query across every unprocessed shard of the corpus and
/// returns its final top-K.
///
/// Per shard: load, score every record, merge into the running top-K, mark
/// the shard processed, persist the checkpoint. Merge-then-persist is the
/// atomic unit of progress; dying before the persist leaves that shard
/// entirely unapplied, so a rerun picks it up again without double
/// counting. A shard that fails to load is surfaced without being marked
/// processed. Shard order does not affect the result.
pub fn orchestrate(
	ctx: &QueryContext,
	source: &dyn ShardSource,
	store: &dyn CheckpointStore,
	capacity: usize,
) -> Result<TopK> {
	let query_id = ctx.query.id;
	let mut state = store.get(query_id, capacity)?;

	if !state.processed_shards.is_empty() {
		tracing::info!(
			query_id,
			processed = state.processed_shards.len(),
			"Resuming from checkpoint."
		);
	}

	for shard_id in source.shard_ids()? {
		if state.processed_shards.contains(&shard_id) {
			continue;
		}

		let records = source.load(&shard_id)?;
		let candidates = records.into_iter().map(|record| {
			let score = scoring::score(&record, &ctx.query);

			ScoredCandidate { record, score }
		});

		state.top_k = state.top_k.merge(candidates);
		state.processed_shards.insert(shard_id.clone());
		store.put(&state)?;

		tracing::debug!(query_id, %shard_id, "Folded shard into checkpoint.");
	}

	Ok(state.top_k)
}
