use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    result::Result,
};

use itertools::{Either::*, Itertools};
use thiserror::Error;
use walkdir::WalkDir;

use crate::library::definitions::VIDEO_EXTS;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileSetError {
    #[error("Path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("Exclusion path not found: {0}")]
    ExclPathNotFound(PathBuf),

    #[error("File enumeration failed: {0}")]
    Enumeration(String),
}

impl From<walkdir::Error> for FileSetError {
    fn from(e: walkdir::Error) -> Self {
        Self::Enumeration(format!("{}", e))
    }
}

/// The set of video files under a collection of source paths, minus anything
/// under the exclusion paths.
pub struct FileSet {
    source_paths: Vec<PathBuf>,
    excl_paths: Vec<PathBuf>,
}

impl FileSet {
    pub fn new(
        source_paths: impl IntoIterator<Item = impl AsRef<Path>>,
        excl_paths: impl IntoIterator<Item = impl AsRef<Path>>,
    ) -> Self {
        let source_paths = source_paths.into_iter().map(|p| p.as_ref().to_path_buf()).collect();

        let excl_paths = excl_paths.into_iter().map(|p| p.as_ref().to_path_buf()).collect();

        Self {
            source_paths,
            excl_paths,
        }
    }

    /// Walks the filesystem and returns every video file in the set, along
    /// with nonfatal errors for the entries that could not be read.
    pub fn enumerate_videos(&self) -> Result<(Vec<PathBuf>, Vec<FileSetError>), FileSetError> {
        use FileSetError::*;

        //we will return a fatal error if any directory/file that the user
        //has specified does not exist.
        for path in &self.source_paths {
            if !path.exists() {
                return Err(PathNotFound(path.to_owned()));
            }
        }
        for path in &self.excl_paths {
            if !path.exists() {
                return Err(ExclPathNotFound(path.to_owned()));
            }
        }

        let paths_to_enumerate =
            self.source_paths
                .iter()
                .flat_map(WalkDir::new)
                .filter(|dir_entry_res| match &dir_entry_res {
                    Ok(dir_entry) => self.should_keep(dir_entry),
                    Err(_) => true,
                });

        let (mut enumerated_paths, loading_errors): (Vec<_>, Vec<_>) = paths_to_enumerate
            .map(|dir_entry_res| dir_entry_res.map(|dir_entry| dir_entry.path().to_path_buf()))
            .partition_map(|dir_entry_res| match dir_entry_res {
                Ok(src_path) => Left(src_path),
                Err(e) => Right(e.into()),
            });

        //sort is required for deterministic outputs.
        enumerated_paths.sort();
        enumerated_paths.dedup();

        Ok((enumerated_paths, loading_errors))
    }

    fn should_keep(&self, x: &walkdir::DirEntry) -> bool {
        x.path().is_file()
            && !any_item_includes(&self.excl_paths, x.path())
            && VIDEO_EXTS.iter().any(|&ext| {
                x.path()
                    .extension()
                    .map(OsStr::to_string_lossy)
                    .unwrap_or_default()
                    .to_lowercase()
                    == ext
            })
    }
}

fn is_ancestor_of(reference: impl AsRef<Path>, cand: impl AsRef<Path>) -> bool {
    cand.as_ref().ancestors().any(|anc| reference.as_ref() == anc)
}

fn any_item_includes(references: impl IntoIterator<Item = impl AsRef<Path>>, cand: impl AsRef<Path>) -> bool {
    references.into_iter().any(|r| is_ancestor_of(r, &cand))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn touch(path: &Path) {
        fs::write(path, b"").unwrap();
    }

    #[test]
    fn enumerates_videos_recursively_in_sorted_order() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("sub")).unwrap();
        touch(&root.join("zebra.mp4"));
        touch(&root.join("apple.mkv"));
        touch(&root.join("sub").join("middle.webm"));

        let file_set = FileSet::new(vec![root], Vec::<PathBuf>::new());
        let (paths, errs) = file_set.enumerate_videos().unwrap();

        assert!(errs.is_empty());
        assert_eq!(
            paths,
            vec![
                root.join("apple.mkv"),
                root.join("sub").join("middle.webm"),
                root.join("zebra.mp4"),
            ]
        );
    }

    #[test]
    fn skips_files_without_a_video_extension() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("movie.mp4"));
        touch(&root.join("notes.txt"));
        touch(&root.join("poster.jpg"));
        touch(&root.join("no_extension"));

        let file_set = FileSet::new(vec![root], Vec::<PathBuf>::new());
        let (paths, _errs) = file_set.enumerate_videos().unwrap();

        assert_eq!(paths, vec![root.join("movie.mp4")]);
    }

    #[test]
    fn extension_match_is_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("upper.MKV"));

        let file_set = FileSet::new(vec![root], Vec::<PathBuf>::new());
        let (paths, _errs) = file_set.enumerate_videos().unwrap();

        assert_eq!(paths, vec![root.join("upper.MKV")]);
    }

    #[test]
    fn excluded_subtrees_are_not_enumerated() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        fs::create_dir(root.join("old")).unwrap();
        touch(&root.join("keep.mp4"));
        touch(&root.join("old").join("legacy.avi"));

        let file_set = FileSet::new(vec![root], vec![root.join("old")]);
        let (paths, _errs) = file_set.enumerate_videos().unwrap();

        assert_eq!(paths, vec![root.join("keep.mp4")]);
    }

    #[test]
    fn missing_source_path_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nonexistent");

        let file_set = FileSet::new(vec![&missing], Vec::<PathBuf>::new());
        let err = file_set.enumerate_videos().unwrap_err();

        assert_eq!(err, FileSetError::PathNotFound(missing));
    }

    #[test]
    fn missing_exclusion_path_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        let missing = root.join("nonexistent");

        let file_set = FileSet::new(vec![root.to_path_buf()], vec![missing.clone()]);
        let err = file_set.enumerate_videos().unwrap_err();

        assert_eq!(err, FileSetError::ExclPathNotFound(missing));
    }

    #[test]
    fn a_source_path_may_be_a_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(&root.join("only.mp4"));
        touch(&root.join("other.mp4"));

        let file_set = FileSet::new(vec![root.join("only.mp4")], Vec::<PathBuf>::new());
        let (paths, _errs) = file_set.enumerate_videos().unwrap();

        assert_eq!(paths, vec![root.join("only.mp4")]);
    }
}
