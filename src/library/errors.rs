use thiserror::Error;

use super::file_set::FileSetError;
use super::video_hashing::HashCreationError;

#[derive(Error, Debug)]
pub enum LibError {
    #[error("Error processing video: {0}")]
    Processing(#[from] HashCreationError),

    #[error("Error enumerating video files: {0}")]
    FileSet(#[from] FileSetError),
}
