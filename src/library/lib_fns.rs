use std::path::Path;

use itertools::Either::{Left, Right};
use rayon::prelude::*;

use crate::library::*;

/// Hashes every video file found under `source_dirs` (minus anything under
/// `excl_dirs`), in parallel.
///
/// A per-file problem (an unreadable directory entry, a hasher failure on a
/// single video) is nonfatal and is returned alongside the hashes that could
/// be produced. A missing source or exclusion path is fatal.
pub fn hash_videos_in_dirs(
    hasher: &(impl VideoHasher + Sync),
    source_dirs: &[impl AsRef<Path> + Sync],
    excl_dirs: &[impl AsRef<Path> + Sync],
) -> Result<(Vec<VideoHash>, Vec<LibError>), LibError> {
    let file_set = FileSet::new(source_dirs, excl_dirs);
    let (video_paths, enumeration_errs) = file_set.enumerate_videos().map_err(LibError::from)?;

    let mut nonfatal_errs: Vec<LibError> = enumeration_errs.into_iter().map(LibError::from).collect();

    let hash_start_time = std::time::Instant::now();

    let hash_results = video_paths.par_iter().map(|src_path| hasher.hash_video(src_path));

    let (mut hashes, hash_errs): (Vec<_>, Vec<_>) = hash_results.partition_map(|res| match res {
        Ok(hash) => Left(hash),
        Err(e) => Right(LibError::from(e)),
    });

    //parallel partitioning does not keep enumeration order. Sort for
    //deterministic outputs.
    hashes.sort_by(|x, y| x.src_path().cmp(y.src_path()));

    nonfatal_errs.extend(hash_errs);

    let hash_time = std::time::Instant::now() - hash_start_time;
    trace!(target: "application", "hashed {} videos in {}",
        hashes.len(),
        format!("{}.{} s", hash_time.as_secs(), hash_time.subsec_millis()),
    );

    Ok((hashes, nonfatal_errs))
}
