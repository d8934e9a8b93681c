mod error;

pub use error::{Error, Result};

use std::{
	collections::{HashMap, HashSet},
	env, fs,
	path::{Path, PathBuf},
	sync::Mutex,
};

use serde_json::json;
use uuid::Uuid;

use mixtape_domain::PlaylistRecord;
use mixtape_engine::{CheckpointState, CheckpointStore, ShardSource};

/// Uniquely named scratch directory, removed on drop.
pub struct TestDir {
	path: PathBuf,
	cleaned: bool,
}

impl TestDir {
	pub fn new() -> Result<Self> {
		let path = env::temp_dir().join(format!("mixtape_test_{}", Uuid::new_v4().simple()));

		fs::create_dir_all(&path)?;

		Ok(Self { path, cleaned: false })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn join(&self, name: &str) -> PathBuf {
		self.path.join(name)
	}

	pub fn cleanup(mut self) -> Result<()> {
		fs::remove_dir_all(&self.path)?;

		self.cleaned = true;

		Ok(())
	}
}
impl Drop for TestDir {
	fn drop(&mut self) {
		if self.cleaned {
			return;
		}

		if let Err(err) = fs::remove_dir_all(&self.path) {
			eprintln!("Test directory cleanup failed: {err}.");
		}
	}
}

/// Fixture playlist with tracks only; artist/album lists stay empty.
pub fn playlist(id: u64, name: Option<&str>, tracks: &[&str]) -> PlaylistRecord {
	PlaylistRecord {
		id,
		name: name.map(str::to_string),
		track_uris: tracks.iter().map(|uri| uri.to_string()).collect(),
		artist_uris: Vec::new(),
		album_uris: Vec::new(),
	}
}

/// Renders records as one corpus document in the source JSON format, with
/// one synthetic track entry per track uri.
pub fn shard_document(records: &[PlaylistRecord]) -> String {
	let playlists = records
		.iter()
		.map(|record| {
			let tracks = record
				.track_uris
				.iter()
				.enumerate()
				.map(|(idx, uri)| {
					json!({
						"track_uri": uri,
						"artist_uri": record
							.artist_uris
							.get(idx)
							.cloned()
							.unwrap_or_else(|| format!("artist:{idx}")),
						"album_uri": record
							.album_uris
							.get(idx)
							.cloned()
							.unwrap_or_else(|| format!("album:{idx}")),
					})
				})
				.collect::<Vec<_>>();
			let mut playlist = json!({ "pid": record.id, "tracks": tracks });

			if let Some(name) = record.name.as_deref() {
				playlist["name"] = json!(name);
			}

			playlist
		})
		.collect::<Vec<_>>();

	json!({ "playlists": playlists }).to_string()
}

/// Writes a shard document into `dir` under `<shard_id>.json`.
pub fn write_shard(dir: &Path, shard_id: &str, records: &[PlaylistRecord]) -> Result<PathBuf> {
	let path = dir.join(format!("{shard_id}.json"));

	fs::write(&path, shard_document(records))?;

	Ok(path)
}

/// In-memory checkpoint store for orchestrator tests; optionally fails the
/// next N puts to simulate a dying process.
#[derive(Default)]
pub struct MemoryCheckpointStore {
	states: Mutex<HashMap<u64, CheckpointState>>,
	put_failures: Mutex<u32>,
}

impl MemoryCheckpointStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn fail_next_puts(&self, count: u32) {
		*self.put_failures.lock().unwrap_or_else(|err| err.into_inner()) = count;
	}

	pub fn state(&self, query_id: u64) -> Option<CheckpointState> {
		self.states.lock().unwrap_or_else(|err| err.into_inner()).get(&query_id).cloned()
	}
}
impl CheckpointStore for MemoryCheckpointStore {
	fn get(&self, query_id: u64, capacity: usize) -> mixtape_engine::Result<CheckpointState> {
		let states = self.states.lock().unwrap_or_else(|err| err.into_inner());

		Ok(states
			.get(&query_id)
			.cloned()
			.unwrap_or_else(|| CheckpointState::empty(query_id, capacity)))
	}

	fn put(&self, state: &CheckpointState) -> mixtape_engine::Result<()> {
		let mut failures = self.put_failures.lock().unwrap_or_else(|err| err.into_inner());

		if *failures > 0 {
			*failures -= 1;

			return Err(mixtape_engine::Error::Checkpoint {
				query_id: state.query_id,
				message: "Injected put failure.".to_string(),
			});
		}

		let mut states = self.states.lock().unwrap_or_else(|err| err.into_inner());

		states.insert(state.query_id, state.clone());

		Ok(())
	}
}

/// Fixed in-memory corpus; shards listed in `fail_shards` error on load
/// without being consumed.
#[derive(Default)]
pub struct StaticShardSource {
	shards: Vec<(String, Vec<PlaylistRecord>)>,
	fail_shards: HashSet<String>,
}

impl StaticShardSource {
	pub fn new(shards: Vec<(String, Vec<PlaylistRecord>)>) -> Self {
		Self { shards, fail_shards: HashSet::new() }
	}

	pub fn with_failing_shard(mut self, shard_id: &str) -> Self {
		self.fail_shards.insert(shard_id.to_string());
		self
	}
}
impl ShardSource for StaticShardSource {
	fn shard_ids(&self) -> mixtape_engine::Result<Vec<String>> {
		Ok(self.shards.iter().map(|(id, _)| id.clone()).collect())
	}

	fn load(&self, shard_id: &str) -> mixtape_engine::Result<Vec<PlaylistRecord>> {
		if self.fail_shards.contains(shard_id) {
			return Err(mixtape_engine::Error::Shard {
				shard_id: shard_id.to_string(),
				message: "Injected load failure.".to_string(),
			});
		}

		self.shards
			.iter()
			.find(|(id, _)| id == shard_id)
			.map(|(_, records)| records.clone())
			.ok_or_else(|| mixtape_engine::Error::Shard {
				shard_id: shard_id.to_string(),
				message: "Unknown shard.".to_string(),
			})
	}
}
