use std::{
	fs, io,
	path::{Path, PathBuf},
};

use crate::error::{Error, Result};
use mixtape_engine::{CheckpointState, CheckpointStore};

/// One JSON file per query id under a checkpoint directory.
///
/// Writes stage the full state into a temp sibling and `rename` it into
/// place, so a reader never observes a half-written state; the previous
/// state stays visible until the new one is complete.
pub struct FsCheckpointStore {
	dir: PathBuf,
}

impl FsCheckpointStore {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	fn path_for(&self, query_id: u64) -> PathBuf {
		self.dir.join(format!("query_{query_id}.json"))
	}

	fn read(&self, query_id: u64, capacity: usize) -> Result<Option<CheckpointState>> {
		let path = self.path_for(query_id);
		let raw = match fs::read_to_string(&path) {
			Ok(raw) => raw,
			Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
			Err(err) => return Err(Error::ReadCheckpoint { path, source: err }),
		};
		let state: CheckpointState = serde_json::from_str(&raw)
			.map_err(|err| Error::CorruptCheckpoint { path, source: err })?;
		let CheckpointState { query_id, processed_shards, top_k } = state;

		// Re-cap in case the configured K shrank between runs.
		Ok(Some(CheckpointState {
			query_id,
			processed_shards,
			top_k: top_k.with_capacity(capacity),
		}))
	}

	fn write(&self, state: &CheckpointState) -> Result<()> {
		fs::create_dir_all(&self.dir)
			.map_err(|err| Error::WriteCheckpoint { path: self.dir.clone(), source: err })?;

		let raw = serde_json::to_string(state)
			.map_err(|err| Error::EncodeCheckpoint { query_id: state.query_id, source: err })?;
		let path = self.path_for(state.query_id);
		let staging = staging_path(&path);

		fs::write(&staging, raw)
			.map_err(|err| Error::WriteCheckpoint { path: staging.clone(), source: err })?;
		fs::rename(&staging, &path)
			.map_err(|err| Error::WriteCheckpoint { path, source: err })?;

		Ok(())
	}
}
impl CheckpointStore for FsCheckpointStore {
	fn get(&self, query_id: u64, capacity: usize) -> mixtape_engine::Result<CheckpointState> {
		match self.read(query_id, capacity) {
			Ok(Some(state)) => Ok(state),
			Ok(None) => Ok(CheckpointState::empty(query_id, capacity)),
			Err(err @ Error::CorruptCheckpoint { .. }) => {
				Err(mixtape_engine::Error::CheckpointCorrupt { query_id, message: err.to_string() })
			},
			Err(err) => {
				Err(mixtape_engine::Error::Checkpoint { query_id, message: err.to_string() })
			},
		}
	}

	fn put(&self, state: &CheckpointState) -> mixtape_engine::Result<()> {
		self.write(state).map_err(|err| mixtape_engine::Error::Checkpoint {
			query_id: state.query_id,
			message: err.to_string(),
		})
	}
}

fn staging_path(path: &Path) -> PathBuf {
	let mut staging = path.as_os_str().to_owned();

	staging.push(".tmp");

	PathBuf::from(staging)
}
