use std::cmp::Ordering;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use mixtape_domain::PlaylistRecord;

/// One corpus playlist paired with its similarity to the query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
	pub record: PlaylistRecord,
	pub score: f64,
}

/// Bounded set of the best-scoring candidates seen so far for one query.
///
/// Entries are kept sorted by score descending, ties broken by ascending
/// record id, and capped at `capacity`. At most one entry per record id is
/// retained, so merging a snapshot with candidates it already contains is a
/// no-op.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TopK {
	capacity: usize,
	entries: Vec<ScoredCandidate>,
}

impl TopK {
	pub fn new(capacity: usize) -> Self {
		Self { capacity, entries: Vec::new() }
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn entries(&self) -> &[ScoredCandidate] {
		&self.entries
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Pure merge: the result holds the `capacity` best candidates of
	/// `self` plus `candidates`, and `self` is untouched. Merging shard A
	/// then B gives the same result as B then A or both at once, which is
	/// what makes checkpoint resumption exact.
	#[must_use]
	pub fn merge(&self, candidates: impl IntoIterator<Item = ScoredCandidate>) -> Self {
		let mut merged = self.entries.clone();

		merged.extend(candidates);
		merged.sort_by(cmp_candidates);

		let mut seen = AHashSet::with_capacity(merged.len());

		merged.retain(|candidate| seen.insert(candidate.record.id));
		merged.truncate(self.capacity);

		Self { capacity: self.capacity, entries: merged }
	}

	/// Re-caps a deserialized set to the configured capacity, dropping the
	/// tail if the configuration shrank between runs.
	#[must_use]
	pub fn with_capacity(mut self, capacity: usize) -> Self {
		self.capacity = capacity;
		self.entries.truncate(capacity);
		self
	}
}

/// Total descending order over f64 scores; NaN sorts last on either side.
pub fn cmp_score_desc(a: f64, b: f64) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}

fn cmp_candidates(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
	cmp_score_desc(a.score, b.score).then_with(|| a.record.id.cmp(&b.record.id))
}
