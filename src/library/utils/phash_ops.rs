use std::{
    ffi::{OsStr, OsString},
    path::Path,
    process::{Command, Stdio},
};

use crate::library::{
    definitions::MAX_ERRMSG_CHARS, HashCreationError, HasherCfg, VideoHash, VideoHasher,
};

/// Obtains hashes by running an external hasher command, by default `phash`.
/// The command is called with a single argument (the video path) and prints
/// one decimal hash value per line on stdout.
#[derive(Debug, Clone)]
pub struct PhashCmdHasher {
    command: OsString,
}

impl PhashCmdHasher {
    pub fn new(cfg: &HasherCfg) -> Self {
        Self {
            command: cfg.command.clone(),
        }
    }
}

impl VideoHasher for PhashCmdHasher {
    fn hash_video(&self, src_path: &Path) -> Result<VideoHash, HashCreationError> {
        let values = run_hasher_command(&self.command, src_path)?;
        Ok(VideoHash::new(src_path, values))
    }
}

/// Returns true if the hasher command can be spawned at all. Batch mode
/// checks this up front, so that a misconfigured command produces one clear
/// error instead of a warning per video.
pub fn hasher_is_callable(command: &OsStr) -> bool {
    Command::new(command)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .is_ok()
}

fn run_hasher_command(command: &OsStr, src_path: &Path) -> Result<Vec<u64>, HashCreationError> {
    let output = Command::new(command)
        .arg(src_path)
        .output()
        .map_err(|e| HashCreationError::SpawnFailure {
            cmd: command.to_string_lossy().into_owned(),
            source: e,
        })?;

    //the hasher is free to chatter on stderr. Only a nonzero exit status is a failure.
    if !output.status.success() {
        let msg = String::from_utf8_lossy(&output.stderr).into_owned();
        return Err(command_failure(src_path, msg));
    }

    let stdout = std::str::from_utf8(&output.stdout)
        .map_err(|_| command_failure(src_path, "hasher output was not valid utf8".to_string()))?;

    let values = parse_hash_lines(stdout, src_path)?;

    //ffmpeg-based hashers can report success but decode no frames, printing
    //nothing. Treat an empty report as a failed run rather than an empty hash.
    if values.is_empty() {
        return Err(HashCreationError::NoOutput(src_path.to_path_buf()));
    }

    Ok(values)
}

fn parse_hash_lines(stdout: &str, src_path: &Path) -> Result<Vec<u64>, HashCreationError> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.parse::<u64>().map_err(|_| HashCreationError::BadHashValue {
                path: src_path.to_path_buf(),
                line: line.to_string(),
            })
        })
        .collect()
}

fn command_failure(src_path: &Path, msg: String) -> HashCreationError {
    //truncate the message. See MAX_ERRMSG_CHARS.
    let msg = msg.chars().take(MAX_ERRMSG_CHARS).collect::<String>();
    HashCreationError::CommandFailure {
        path: src_path.to_path_buf(),
        msg,
    }
}
