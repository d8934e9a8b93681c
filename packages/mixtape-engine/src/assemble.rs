use ahash::AHashSet;

use crate::topk::TopK;

/// Flattens a final top-K into at most `target_count` recommended track
/// ids.
///
/// Entries are consumed in rank order; within one entry the playlist's own
/// track order is kept, seeds and already-accumulated ids are skipped. An
/// entry is always absorbed whole, even when it crosses the target mid-way,
/// and the result is then truncated. Accumulation order depends only on the
/// (score, id) ranking and the stored track order, so output is
/// reproducible. Running out of candidates before `target_count` is not an
/// error.
pub fn assemble(top_k: &TopK, seed_tracks: &AHashSet<String>, target_count: usize) -> Vec<String> {
	let mut accumulated = Vec::new();
	let mut seen = AHashSet::new();

	for entry in top_k.entries() {
		if accumulated.len() >= target_count {
			break;
		}

		for uri in &entry.record.track_uris {
			if seed_tracks.contains(uri) || !seen.insert(uri.clone()) {
				continue;
			}

			accumulated.push(uri.clone());
		}
	}

	accumulated.truncate(target_count);

	accumulated
}
