use std::sync::LazyLock;

use ahash::AHashSet;
use regex::Regex;

use crate::playlist::PlaylistRecord;

static NAME_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"[.,/#!$%^*;:{}=_`~()@]").expect("Fixed punctuation pattern must compile.")
});

/// Set Jaccard similarity over two id lists.
///
/// Duplicates are collapsed before comparison. Two empty sets compare as
/// identical and score 1.0; the 0/0 case is otherwise undefined and this
/// convention is relied on by [`score`].
pub fn jaccard(a: &[String], b: &[String]) -> f64 {
	let a = a.iter().collect::<AHashSet<_>>();
	let b = b.iter().collect::<AHashSet<_>>();
	let union = a.union(&b).count();

	if union == 0 {
		return 1.0;
	}

	a.intersection(&b).count() as f64 / union as f64
}

/// Lowercases, replaces a fixed punctuation class with spaces, and collapses
/// runs of whitespace, returning the resulting token list.
pub fn normalize_name(name: &str) -> Vec<String> {
	let lowered = name.to_lowercase();
	let stripped = NAME_PUNCTUATION.replace_all(&lowered, " ");

	stripped.split_whitespace().map(str::to_string).collect()
}

/// Composite similarity between a corpus playlist and a query playlist.
///
/// `(1 + 0.5·trackJ + 0.25·artistJ + 0.25·albumJ) / denom`, where `denom`
/// is `1 + nameJ` when both playlists carry a display name and `1`
/// otherwise. The name term only ever divides, so a shared name can at most
/// halve the score while track/artist/album overlap raises it; the result
/// is always in `(0, 2]`.
pub fn score(candidate: &PlaylistRecord, query: &PlaylistRecord) -> f64 {
	let denominator = match (candidate.name.as_deref(), query.name.as_deref()) {
		(Some(a), Some(b)) => 1.0 + jaccard(&normalize_name(a), &normalize_name(b)),
		_ => 1.0,
	};
	let track = jaccard(&candidate.track_uris, &query.track_uris);
	let artist = jaccard(&candidate.artist_uris, &query.artist_uris);
	let album = jaccard(&candidate.album_uris, &query.album_uris);

	(1.0 + 0.5 * track + 0.25 * artist + 0.25 * album) / denominator
}
