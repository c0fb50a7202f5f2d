mod video_hash;


use std::path::{Path, PathBuf};

use thiserror::Error;

pub use video_hash::VideoHash;

/// A source of perceptual hashes. The one implementation used in production
/// is [`crate::library::PhashCmdHasher`], which shells out to an external
/// hasher command. Everything downstream of argument parsing is written
/// against this trait, so hashing can be faked out in tests.
pub trait VideoHasher {
    fn hash_video(&self, src_path: &Path) -> Result<VideoHash, HashCreationError>;
}

#[derive(Error, Debug)]
pub enum HashCreationError {
    #[error("Failed to invoke hasher command {cmd}: {source}")]
    SpawnFailure {
        cmd: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Hasher command failed at {path}: {msg}")]
    CommandFailure { path: PathBuf, msg: String },

    #[error("No output from hasher command at {0}")]
    NoOutput(PathBuf),

    #[error("Unparseable hash value {line:?} from hasher command at {path}")]
    BadHashValue { path: PathBuf, line: String },
}
