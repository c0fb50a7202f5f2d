use std::{
    error::Error,
    io::{BufWriter, Write},
    path::Path,
};

use serde::Serialize;

use super::{app_cfg::*, arg_parse, errors::AppError};
use crate::library::{
    hash_videos_in_dirs, hasher_is_callable, PhashCmdHasher, VideoHash, VideoHasher,
};

pub fn run_app() -> i32 {
    //Parse arguments and bail early if there is an error.
    let cfg = match arg_parse::parse_args() {
        Ok(cfg) => {
            configure_logs(cfg.output_cfg.verbosity);
            cfg
        }
        Err(fatal) => {
            //Errors are reported using TermLogger, which is configured from the argument parser.
            //But if a fatal error occurred during parsing the logger would not be configured when
            //we attempt to print the fatal error. So if a fatal error occurs, start the logger
            //before returning the error.
            configure_logs(ReportVerbosity::Verbose);
            print_fatal_err(&fatal, ReportVerbosity::Verbose);
            return 1;
        }
    };

    //Check up front (in batch mode) that the hasher command can be spawned, and bail if not.
    //Slightly helps usability as we can bail early here with a useful error message.
    //Otherwise, the program would loop over every video printing the same
    //"failed to invoke hasher command" warning.
    if !cfg.dir_cfg.batch_dirs.is_empty() && !hasher_is_callable(&cfg.hasher_cfg.command) {
        let fatal = AppError::HasherNotCallable(cfg.hasher_cfg.command.clone());
        print_fatal_err(&fatal, cfg.output_cfg.verbosity);
        return 1;
    }

    let hasher = PhashCmdHasher::new(&cfg.hasher_cfg);

    let stdout = std::io::stdout();
    let mut stdout = BufWriter::new(stdout.lock());

    match run_app_inner(&cfg, &hasher, &mut stdout) {
        Ok(nonfatal_errs) => {
            print_nonfatal_errs(nonfatal_errs);
            0
        }
        Err(fatal_error) => {
            print_fatal_err(&fatal_error, cfg.output_cfg.verbosity);
            1
        }
    }
}

fn run_app_inner(
    cfg: &AppCfg,
    hasher: &(impl VideoHasher + Sync),
    output: &mut impl Write,
) -> Result<Vec<AppError>, AppError> {
    let mut nonfatal_errs: Vec<AppError> = vec![];

    if !cfg.dir_cfg.batch_dirs.is_empty() {
        let (hashes, errs) =
            hash_videos_in_dirs(hasher, &cfg.dir_cfg.batch_dirs, &cfg.dir_cfg.excl_dirs)
                .map_err(AppError::from)?;
        nonfatal_errs.extend(errs.into_iter().map(AppError::from));

        //sanity check: tell the user if we didn't pick any files up, as they
        //may have made a mistake.
        if hashes.is_empty() && nonfatal_errs.is_empty() {
            warn!("No video files were found at the paths given by --dirs. No results will be returned.")
        }

        print_hash_group(output, &hashes, cfg.output_cfg.json_output)?;
    } else {
        //the argument parser guarantees a video path outside of --dirs mode.
        let video_path = cfg.video_path.as_ref().ok_or(AppError::MissingVideoPath)?;

        match &cfg.ref_video_path {
            Some(ref_video_path) => {
                let hash = hasher.hash_video(video_path)?;
                let ref_hash = hasher.hash_video(ref_video_path)?;
                print_distance(output, &hash, &ref_hash, cfg.output_cfg.json_output)?;
            }
            None => {
                let hash = hasher.hash_video(video_path)?;
                print_hash_values(output, &hash, cfg.output_cfg.json_output)?;
            }
        }
    }

    output.flush().map_err(AppError::from)?;

    Ok(nonfatal_errs)
}

fn print_hash_values(output: &mut impl Write, hash: &VideoHash, json_output: bool) -> Result<(), AppError> {
    if json_output {
        #[derive(Serialize)]
        struct JsonStruct<'a> {
            path: &'a Path,
            hash: &'a [u64],
        }

        let json_struct = JsonStruct {
            path: hash.src_path(),
            hash: hash.values(),
        };

        serde_json::to_writer_pretty(&mut *output, &json_struct).unwrap_or_default();
        writeln!(output)?;
    } else {
        //one decimal value per line, in the order the hasher returned them.
        for value in hash.values() {
            writeln!(output, "{}", value)?;
        }
    }

    Ok(())
}

fn print_distance(
    output: &mut impl Write,
    hash: &VideoHash,
    ref_hash: &VideoHash,
    json_output: bool,
) -> Result<(), AppError> {
    let distance = hash.distance(ref_hash);

    if json_output {
        #[derive(Serialize)]
        struct JsonStruct<'a> {
            path: &'a Path,
            reference: &'a Path,
            distance: u32,
        }

        let json_struct = JsonStruct {
            path: hash.src_path(),
            reference: ref_hash.src_path(),
            distance,
        };

        serde_json::to_writer_pretty(&mut *output, &json_struct).unwrap_or_default();
        writeln!(output)?;
    } else {
        writeln!(output, "{}", distance)?;
    }

    Ok(())
}

fn print_hash_group(output: &mut impl Write, hashes: &[VideoHash], json_output: bool) -> Result<(), AppError> {
    if json_output {
        #[derive(Serialize)]
        struct JsonStruct<'a> {
            path: &'a Path,
            hash: &'a [u64],
        }

        let output_vec: Vec<JsonStruct> = hashes
            .iter()
            .map(|hash| JsonStruct {
                path: hash.src_path(),
                hash: hash.values(),
            })
            .collect();

        serde_json::to_writer_pretty(&mut *output, &output_vec).unwrap_or_default();
        writeln!(output)?;
    } else {
        for hash in hashes {
            writeln!(output, "{}", hash.src_path().display())?;
            for value in hash.values() {
                writeln!(output, "{}", value)?;
            }
            writeln!(output)?;
        }
    }

    Ok(())
}

fn print_fatal_err(fatal_err: &AppError, verbosity: ReportVerbosity) {
    error!(target: "app-errorlog", "{}", fatal_err);

    if verbosity == ReportVerbosity::Verbose {
        let mut source: Option<&(dyn Error + 'static)> = fatal_err.source();
        while let Some(e) = source {
            error!(target: "app-errorlog", "    caused by: {}", e);
            source = e.source();
        }
    }
}

fn print_nonfatal_errs(nonfatal_errs: Vec<AppError>) {
    for err in nonfatal_errs {
        warn!("{}", err);
    }
}

pub fn configure_logs(verbosity: ReportVerbosity) {
    use simplelog::*;

    let cfg = ConfigBuilder::new().build();

    let min_loglevel = match verbosity {
        ReportVerbosity::Quiet => LevelFilter::Warn,
        ReportVerbosity::Default => LevelFilter::Info,
        ReportVerbosity::Verbose => LevelFilter::Trace,
    };

    TermLogger::init(min_loglevel, cfg, TerminalMode::Stderr, ColorChoice::Auto)
        .expect("TermLogger failed to initialize");
}
