use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};
use spc_img::{
    commands::pack::{pack, prepare, write_done, PackJob},
    logging, ImageError, DEFAULT_OUTPUT,
};

/// SPC file packager for spcplayer.
/// Packs SPC files into an SD card image, one fixed-size slot per file.
#[derive(Parser, Debug)]
#[command(name = "spc2img")]
#[clap(version)]
struct Cli {
    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Debug printing of per-slot progress
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// SPC files to package
    #[arg(required = true, num_args = 1..)]
    file: Vec<PathBuf>,
}

#[derive(Debug)]
struct Args {
    job: PackJob,
    verbose: bool,
}

/// Validates user input and checks every path, reporting bad ones as usage errors
fn parse_args() -> Args {
    let cli = Cli::parse();

    let job = prepare(&cli.file, &cli.output).unwrap_or_else(|e| usage_error(e).exit());

    Args {
        job,
        verbose: cli.verbose,
    }
}

/// Bad paths and file counts are reported the way clap reports bad arguments
fn usage_error(e: ImageError) -> clap::Error {
    Cli::command().error(ErrorKind::Io, e)
}

fn main() -> Result<()> {
    let args = parse_args();
    logging::init(args.verbose);

    pack(args.job).context("Pack command failed")?;
    write_done(&mut io::stdout().lock())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["spc2img", "a.spc", "b.spc"]).unwrap();

        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(cli.file, vec![PathBuf::from("a.spc"), PathBuf::from("b.spc")]);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_at_least_one_file() {
        let err = Cli::try_parse_from(["spc2img", "-o", "out.img"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_missing_input_is_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.spc");

        let e = prepare(&[missing], &dir.path().join("out.img")).unwrap_err();
        let err = usage_error(e);

        assert_eq!(err.kind(), ErrorKind::Io);
        assert_ne!(err.exit_code(), 0);
        assert!(err.to_string().contains("missing.spc"));
    }
}
