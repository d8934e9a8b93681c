use std::{
	fs,
	path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};
use mixtape_domain::{NO_NAME, PlaylistRecord};
use mixtape_engine::ShardSource;

#[derive(Debug, Deserialize)]
struct RawDocument {
	playlists: Vec<Value>,
}

#[derive(Debug, Deserialize)]
struct RawPlaylist {
	pid: u64,
	name: Option<String>,
	tracks: Vec<RawTrack>,
}
impl RawPlaylist {
	fn into_record(self) -> PlaylistRecord {
		let mut track_uris = Vec::with_capacity(self.tracks.len());
		let mut artist_uris = Vec::with_capacity(self.tracks.len());
		let mut album_uris = Vec::with_capacity(self.tracks.len());

		for track in self.tracks {
			track_uris.push(track.track_uri);
			artist_uris.push(track.artist_uri);
			album_uris.push(track.album_uri);
		}

		PlaylistRecord {
			id: self.pid,
			name: self.name.filter(|name| name != NO_NAME),
			track_uris,
			artist_uris,
			album_uris,
		}
	}
}

#[derive(Debug, Deserialize)]
struct RawTrack {
	track_uri: String,
	artist_uri: String,
	album_uri: String,
}

/// Loads every playlist from one corpus document.
///
/// A document that fails to parse as a whole is an error; an individual
/// playlist entry missing a required field (pid, or any track uri) is
/// skipped with a warning and the rest of the document survives. The
/// `"No Name"` display-name sentinel maps to an absent name.
pub fn load_playlists(path: &Path) -> Result<Vec<PlaylistRecord>> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadShard { path: path.to_path_buf(), source: err })?;
	let document: RawDocument = serde_json::from_str(&raw)
		.map_err(|err| Error::MalformedShard { path: path.to_path_buf(), source: err })?;
	let mut records = Vec::with_capacity(document.playlists.len());

	for playlist in document.playlists {
		match serde_json::from_value::<RawPlaylist>(playlist) {
			Ok(raw_playlist) => records.push(raw_playlist.into_record()),
			Err(err) => {
				tracing::warn!(
					path = %path.display(),
					error = %err,
					"Skipping playlist with missing required fields."
				);
			},
		}
	}

	Ok(records)
}

/// Corpus access over a directory of shard files: every `*.json` file is a
/// shard, keyed by its file stem.
pub struct FsShardSource {
	dir: PathBuf,
}

impl FsShardSource {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	/// Sorted for stable logs; the scan result is order-independent.
	pub fn enumerate(&self) -> Result<Vec<String>> {
		let entries = fs::read_dir(&self.dir)
			.map_err(|err| Error::ListShards { path: self.dir.clone(), source: err })?;
		let mut shard_ids = Vec::new();

		for entry in entries {
			let entry = entry
				.map_err(|err| Error::ListShards { path: self.dir.clone(), source: err })?;
			let path = entry.path();

			if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
				continue;
			}
			if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
				shard_ids.push(stem.to_string());
			}
		}

		shard_ids.sort();

		Ok(shard_ids)
	}
}
impl ShardSource for FsShardSource {
	fn shard_ids(&self) -> mixtape_engine::Result<Vec<String>> {
		self.enumerate()
			.map_err(|err| mixtape_engine::Error::ShardEnumeration { message: err.to_string() })
	}

	fn load(&self, shard_id: &str) -> mixtape_engine::Result<Vec<PlaylistRecord>> {
		let path = self.dir.join(format!("{shard_id}.json"));

		load_playlists(&path).map_err(|err| mixtape_engine::Error::Shard {
			shard_id: shard_id.to_string(),
			message: err.to_string(),
		})
	}
}
