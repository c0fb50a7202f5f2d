pub mod definitions;
mod errors;
mod file_set;
mod lib_fns;
mod library_cfg;
mod utils;
mod video_hashing;

//internal exports
pub(crate) use file_set::FileSet;
//external exports
pub use errors::LibError;
pub use file_set::FileSetError;
pub use lib_fns::hash_videos_in_dirs;
pub use library_cfg::HasherCfg;
pub use utils::phash_ops::{hasher_is_callable, PhashCmdHasher};
pub use video_hashing::{HashCreationError, VideoHash, VideoHasher};
