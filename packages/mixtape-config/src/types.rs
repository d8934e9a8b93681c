use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub corpus: Corpus,
	pub job: Job,
	#[serde(default)]
	pub ranking: Ranking,
	#[serde(default)]
	pub runtime: Runtime,
}

#[derive(Debug, Deserialize)]
pub struct Corpus {
	/// Directory holding the shard files; every `*.json` file is one shard.
	pub shard_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Job {
	pub query_file: PathBuf,
	pub output_file: PathBuf,
	pub checkpoint_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct Ranking {
	/// Similar playlists retained per query.
	#[serde(default = "default_top_k")]
	pub top_k: usize,
	/// Recommended tracks emitted per query.
	#[serde(default = "default_recommendations")]
	pub recommendations: usize,
}
impl Default for Ranking {
	fn default() -> Self {
		Self { top_k: default_top_k(), recommendations: default_recommendations() }
	}
}

#[derive(Debug, Deserialize)]
pub struct Runtime {
	/// Concurrent queries; 0 means one per available core.
	#[serde(default)]
	pub workers: usize,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}
impl Default for Runtime {
	fn default() -> Self {
		Self { workers: 0, log_level: default_log_level() }
	}
}

fn default_top_k() -> usize {
	100
}

fn default_recommendations() -> usize {
	500
}

fn default_log_level() -> String {
	"info".to_string()
}
