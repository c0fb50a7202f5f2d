// Hasher definitions
pub const DEFAULT_HASHER_CMD: &str = "phash";

// Filename extensions that batch mode treats as videos. Files with any other
// extension are skipped without invoking the hasher command.
pub const VIDEO_EXTS: [&str; 15] = [
    "avi", "mpg", "mov", "mp4", "mkv", "wmv", "flv", "ogv", "webm", "vob", "qt", "m4v", "mpv", "3gp", "f4v",
];

// sometimes external commands create very long error messages. Limit them to
// this many characters.
pub const MAX_ERRMSG_CHARS: usize = 500;
