mod error;

pub mod assemble;
pub mod checkpoint;
pub mod orchestrator;
pub mod topk;

pub use assemble::assemble;
pub use checkpoint::{CheckpointState, CheckpointStore};
pub use error::{Error, Result};
pub use orchestrator::{QueryContext, ShardSource, orchestrate};
pub use topk::{ScoredCandidate, TopK, cmp_score_desc};
