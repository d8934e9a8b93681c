mod error;

pub mod checkpoint;
pub mod report;
pub mod shards;

pub use checkpoint::FsCheckpointStore;
pub use error::{Error, Result};
pub use report::{ReportRow, write_report};
pub use shards::{FsShardSource, load_playlists};
