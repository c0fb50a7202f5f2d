use std::{ffi::OsString, path::PathBuf};

use super::{app_cfg::*, errors::AppError};
use crate::library::{definitions::DEFAULT_HASHER_CMD, HasherCfg};

pub fn parse_args() -> Result<AppCfg, AppError> {
    parse_args_from(std::env::args_os())
}

fn parse_args_from(itr: impl IntoIterator<Item = impl Into<OsString> + Clone>) -> Result<AppCfg, AppError> {
    let video_path = "Video file";
    let ref_video_path = "Reference video file";
    let batch_dir_paths = "Batch dir paths";
    let excl_paths = "Exclude paths";
    let hasher_cmd = "Hasher command";
    let json_output = "Json output";
    let quiet = "Quiet";
    let verbose = "Verbose";

    //args are not added through method chaining because this appears to break rustfmt.
    let mut clap_app = clap::App::new("Video dct hash")
        .version("0.1")
        .about("Prints and compares dct-based perceptual hashes of video files");

    clap_app = clap_app.arg(
        clap::Arg::with_name(video_path)
            .multiple(true)
            .takes_value(true)
            .help("Path of the video file to be hashed. Only the first path is used. Any further positional arguments are ignored.")
            .display_order(1),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(ref_video_path)
            .long("with-ref")
            .takes_value(true)
            .help("Path of a reference video file. Instead of printing the hash of VIDEO_PATH, print the hamming distance between the hashes of the two videos.")
            .display_order(2),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(batch_dir_paths)
            .long("dirs")
            .multiple(true)
            .min_values(1)
            .takes_value(true)
            .conflicts_with_all(&[video_path, ref_video_path])
            .help("Paths containing video files. Every video found underneath is hashed and printed.")
            .display_order(3),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(excl_paths)
            .short("x")
            .long("excl")
            .multiple(true)
            .min_values(1)
            .takes_value(true)
            .help("Paths to be ignored in --dirs mode")
            .display_order(4),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(hasher_cmd)
            .long("hasher-cmd")
            .takes_value(true)
            .default_value(DEFAULT_HASHER_CMD)
            .help("External command which prints the raw hash values for a single video file"),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(json_output)
            .long("json-output")
            .help("Print outputs in json format"),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(quiet)
            .long("quiet")
            .help("Quiet verbosity: Only print errors, warnings and output")
            .conflicts_with(verbose),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(verbose)
            .long("verbose")
            .help("Verbose verbosity: Trace the hashing process"),
    );

    let matches = clap_app.get_matches_from(itr);

    //only the first positional argument is consulted. The hasher binary this
    //tool wraps has always ignored trailing arguments, and scripts depend on
    //being able to pass them.
    let video_path = matches
        .values_of_os(video_path)
        .and_then(|mut paths| paths.next())
        .map(PathBuf::from);

    let ref_video_path = matches.value_of_os(ref_video_path).map(PathBuf::from);

    let batch_dirs = match matches.values_of_os(batch_dir_paths) {
        Some(batch_dirs) => batch_dirs.map(PathBuf::from).collect(),
        None => vec![],
    };

    let excl_dirs = match matches.values_of_os(excl_paths) {
        Some(excl_dirs) => excl_dirs.map(PathBuf::from).collect(),
        None => vec![],
    };

    //a video path must come from somewhere: the positional argument, or the
    //--dirs enumeration.
    if video_path.is_none() && batch_dirs.is_empty() {
        return Err(AppError::MissingVideoPath);
    }

    let hasher_cfg = HasherCfg {
        command: matches
            .value_of_os(hasher_cmd)
            .unwrap_or_else(|| unreachable!())
            .to_owned(),
    };

    let verbosity = if matches.is_present(quiet) {
        ReportVerbosity::Quiet
    } else if matches.is_present(verbose) {
        ReportVerbosity::Verbose
    } else {
        ReportVerbosity::Default
    };

    let output_cfg = OutputCfg {
        json_output: matches.is_present(json_output),
        verbosity,
    };

    let ret = AppCfg {
        video_path,
        ref_video_path,
        dir_cfg: DirCfg { batch_dirs, excl_dirs },
        hasher_cfg,
        output_cfg,
    };

    Ok(ret)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_positional_is_the_video_path_and_extras_are_ignored() {
        let cfg = parse_args_from(vec!["vid_dct_hash", "a.mp4", "b.mp4", "c.mp4"]).unwrap();

        assert_eq!(cfg.video_path, Some(PathBuf::from("a.mp4")));
        assert_eq!(cfg.ref_video_path, None);
        assert!(cfg.dir_cfg.batch_dirs.is_empty());
    }

    #[test]
    fn missing_video_path_is_an_error() {
        let err = parse_args_from(vec!["vid_dct_hash"]).unwrap_err();

        assert!(matches!(err, AppError::MissingVideoPath));
        assert_eq!(err.to_string(), "Must specify video file");
    }

    #[test]
    fn with_ref_still_requires_a_video_path() {
        let err = parse_args_from(vec!["vid_dct_hash", "--with-ref", "b.mp4"]).unwrap_err();

        assert!(matches!(err, AppError::MissingVideoPath));
    }

    #[test]
    fn with_ref_names_the_reference_video() {
        let cfg = parse_args_from(vec!["vid_dct_hash", "a.mp4", "--with-ref", "b.mp4"]).unwrap();

        assert_eq!(cfg.video_path, Some(PathBuf::from("a.mp4")));
        assert_eq!(cfg.ref_video_path, Some(PathBuf::from("b.mp4")));
    }

    #[test]
    fn dirs_mode_needs_no_positional_argument() {
        let cfg = parse_args_from(vec![
            "vid_dct_hash",
            "--dirs",
            "vids",
            "more_vids",
            "--excl",
            "vids/old",
        ])
        .unwrap();

        assert_eq!(cfg.video_path, None);
        assert_eq!(
            cfg.dir_cfg.batch_dirs,
            vec![PathBuf::from("vids"), PathBuf::from("more_vids")]
        );
        assert_eq!(cfg.dir_cfg.excl_dirs, vec![PathBuf::from("vids/old")]);
    }

    #[test]
    fn hasher_command_defaults_to_phash() {
        let cfg = parse_args_from(vec!["vid_dct_hash", "a.mp4"]).unwrap();

        assert_eq!(cfg.hasher_cfg.command, OsString::from(DEFAULT_HASHER_CMD));
    }

    #[test]
    fn hasher_command_can_be_overridden() {
        let cfg = parse_args_from(vec!["vid_dct_hash", "a.mp4", "--hasher-cmd", "/opt/bin/myhash"]).unwrap();

        assert_eq!(cfg.hasher_cfg.command, OsString::from("/opt/bin/myhash"));
    }

    #[test]
    fn verbosity_flags_map_to_report_verbosity() {
        let cfg = parse_args_from(vec!["vid_dct_hash", "a.mp4"]).unwrap();
        assert_eq!(cfg.output_cfg.verbosity, ReportVerbosity::Default);

        let cfg = parse_args_from(vec!["vid_dct_hash", "a.mp4", "--quiet"]).unwrap();
        assert_eq!(cfg.output_cfg.verbosity, ReportVerbosity::Quiet);

        let cfg = parse_args_from(vec!["vid_dct_hash", "a.mp4", "--verbose"]).unwrap();
        assert_eq!(cfg.output_cfg.verbosity, ReportVerbosity::Verbose);
    }

    #[test]
    fn json_output_flag_is_recorded() {
        let cfg = parse_args_from(vec!["vid_dct_hash", "a.mp4", "--json-output"]).unwrap();

        assert!(cfg.output_cfg.json_output);
    }
}
