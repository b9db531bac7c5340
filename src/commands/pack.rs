use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

use crate::{
    builder::{build_image, BuildReport, Source},
    error::ImageError,
    file_parsers::spc_img::types::Header,
};

/// Validated inputs for a pack run: readable input paths and an opened output
#[derive(Debug)]
pub struct PackJob {
    pub sources: Vec<Source>,
    pub output: File,
    pub output_path: PathBuf,
}

/// Check every input can be opened, then create the output, failing on the first bad path.
///
/// The count is checked first so an oversized list never truncates an existing output.
pub fn prepare(files: &[PathBuf], output_path: &Path) -> Result<PackJob, ImageError> {
    Header::for_count(files.len())?;

    let sources = files
        .iter()
        .map(|path| Source::open(path))
        .collect::<Result<Vec<_>, _>>()?;

    let output = File::create(output_path).map_err(|e| {
        ImageError::configuration(format!("can't open '{}': {e}", output_path.display()))
    })?;

    Ok(PackJob {
        sources,
        output,
        output_path: output_path.to_path_buf(),
    })
}

/// Pack the sources into the output file and sync it to disk
pub fn pack(job: PackJob) -> Result<BuildReport> {
    let PackJob {
        sources,
        output,
        output_path,
    } = job;

    let mut writer = BufWriter::new(output);
    let report = build_image(&mut writer, sources)
        .with_context(|| format!("Failed to pack image {}", output_path.display()))?;

    let output = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("Failed to flush image {}", output_path.display()))?;
    output
        .sync_all()
        .with_context(|| format!("Failed to sync image {}", output_path.display()))?;

    Ok(report)
}

/// Completion line printed once the image is on disk
pub fn write_done<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "done").context("Failed to write to stdout")
}
