use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use clap::{error::ErrorKind, CommandFactory, Parser, Subcommand};
use spc_img::{
    commands::{
        cat::cat_slot,
        extract::extract_slots,
        info::image_info,
        list::list_slots,
        pack::{pack, prepare, write_done, PackJob},
    },
    logging, ImageError, DEFAULT_OUTPUT,
};

#[derive(Debug, Subcommand)]
enum Command {
    /// Pack SPC files into an image
    Pack {
        /// Output file
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,
        /// SPC files to package
        #[arg(required = true, num_args = 1..)]
        file: Vec<PathBuf>,
    },
    /// List the slots of an image
    List {
        /// Path to the image
        image: PathBuf,
    },
    /// Extract a single slot to stdout
    Cat {
        /// Path to the image
        image: PathBuf,
        /// Index of the slot to extract
        index: usize,
    },
    /// Extract every slot to a folder
    Extract {
        /// Path to the image
        image: PathBuf,
        /// Path to the folder to output the extracted slots
        output_folder: PathBuf,
    },
    /// Print a JSON summary of an image
    Info {
        /// Path to the image
        image: PathBuf,
    },
}

/// Builds and inspects SPC SD card images for spcplayer.
#[derive(Parser, Debug)]
#[command(name = "spc_img")]
#[clap(version)]
struct Cli {
    /// Debug printing of per-slot progress
    #[arg(short, long, default_value_t = false, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug)]
enum Action {
    Pack(PackJob),
    List { image: PathBuf },
    Cat { image: PathBuf, index: usize },
    Extract { image: PathBuf, output_folder: PathBuf },
    Info { image: PathBuf },
}

#[derive(Debug)]
struct Args {
    action: Action,
    verbose: bool,
}

/// Validates user input and constructs a valid input state
fn parse_args() -> Args {
    let cli = Cli::parse();

    let action = match cli.command {
        Command::Pack { output, file } => {
            Action::Pack(prepare(&file, &output).unwrap_or_else(|e| usage_error(e).exit()))
        }
        Command::List { image } => Action::List { image },
        Command::Cat { image, index } => Action::Cat { image, index },
        Command::Extract {
            image,
            output_folder,
        } => Action::Extract {
            image,
            output_folder,
        },
        Command::Info { image } => Action::Info { image },
    };

    Args {
        action,
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

    match args.action {
        Action::Pack(job) => {
            pack(job).context("Pack command failed")?;
            write_done(&mut io::stdout().lock())?;
        }
        Action::List { image } => list_slots(&image).context("List command failed")?,
        Action::Cat { image, index } => cat_slot(&image, index).context("Cat command failed")?,
        Action::Extract {
            image,
            output_folder,
        } => {
            extract_slots(&image, &output_folder).context("Extract command failed")?;
        }
        Action::Info { image } => image_info(&image).context("Info command failed")?,
    }

    Ok(())
}
