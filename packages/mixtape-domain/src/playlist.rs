use serde::{Deserialize, Serialize};

/// Display-name sentinel used by the corpus format when a playlist has no
/// name. Loaders map it to `None`; it never appears inside a
/// [`PlaylistRecord`].
pub const NO_NAME: &str = "No Name";

/// One playlist, either a query or a corpus entry.
///
/// URI lists keep the order and duplicates of the source document. Scoring
/// treats them as sets; the assembler relies on `track_uris` order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaylistRecord {
	pub id: u64,
	pub name: Option<String>,
	pub track_uris: Vec<String>,
	pub artist_uris: Vec<String>,
	pub album_uris: Vec<String>,
}

impl PlaylistRecord {
	/// `true` when the playlist carries a real display name, i.e. the source
	/// document had one and it was not the sentinel.
	pub fn has_name(&self) -> bool {
		self.name.is_some()
	}
}
