use std::{ffi::OsString, path::PathBuf};

use thiserror::Error;

use crate::library::{FileSetError, HashCreationError, LibError};

#[derive(Error, Debug)]
pub enum AppError {
    /////////////////////////////////
    // Argument parsing
    #[error("Must specify video file")]
    MissingVideoPath,

    /////////////////////////////////
    // Batch enumeration problems.
    //It's important to get the wording of these right because these errors
    //are very easy to trigger.
    #[error("Path in --dirs not found: {0}")]
    DirPathNotFound(PathBuf),

    #[error("Path in --excl not found: {0}")]
    ExclPathNotFound(PathBuf),

    #[error("Video file search error: {0}")]
    FileSearch(FileSetError),

    /////////////////////////////////
    // Hashing
    #[error("Hash Creation Error: {0}")]
    CreateHash(#[from] HashCreationError),

    #[error(
        "Hasher command {0:?} is not callable. Install it on the PATH, or name a \
         working command with --hasher-cmd"
    )]
    HasherNotCallable(OsString),

    /////////////////////////////////
    // Output
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl From<LibError> for AppError {
    fn from(e: LibError) -> Self {
        match e {
            LibError::Processing(e) => Self::CreateHash(e),
            LibError::FileSet(FileSetError::PathNotFound(path)) => Self::DirPathNotFound(path),
            LibError::FileSet(FileSetError::ExclPathNotFound(path)) => Self::ExclPathNotFound(path),
            LibError::FileSet(e) => Self::FileSearch(e),
        }
    }
}
