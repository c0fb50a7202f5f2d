use std::path::PathBuf;

use crate::library::HasherCfg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportVerbosity {
    Quiet,
    Default,
    Verbose,
}

#[derive(Debug, Clone)]
pub struct OutputCfg {
    pub json_output: bool,
    pub verbosity: ReportVerbosity,
}

#[derive(Debug, Clone)]
pub struct DirCfg {
    pub batch_dirs: Vec<PathBuf>,
    pub excl_dirs: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct AppCfg {
    /// The video named on the command line, when not in --dirs mode.
    pub video_path: Option<PathBuf>,

    /// When given, print the distance between the two videos instead of the
    /// hash of the first.
    pub ref_video_path: Option<PathBuf>,

    pub dir_cfg: DirCfg,
    pub hasher_cfg: HasherCfg,
    pub output_cfg: OutputCfg,
}
