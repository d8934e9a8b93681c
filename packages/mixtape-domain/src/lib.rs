pub mod playlist;
pub mod scoring;

pub use playlist::{NO_NAME, PlaylistRecord};
pub use scoring::{jaccard, normalize_name, score};
