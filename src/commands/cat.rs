use std::{
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

use crate::{commands::load_image, file_parsers::spc_img::types::SpcImage};

/// Write the raw contents of one slot to stdout
pub fn cat_slot(image_path: &Path, index: usize) -> Result<()> {
    let image = load_image(image_path)?;

    let mut stdout = BufWriter::new(io::stdout().lock());
    write_slot(&image, index, &mut stdout)?;

    stdout.flush().context("Failed to flush stdout")
}

pub fn write_slot<W: Write>(image: &SpcImage, index: usize, out: &mut W) -> Result<()> {
    let slot = image.slot(index).with_context(|| {
        format!(
            "Slot {index} out of range, image holds {} slots",
            image.slots.len()
        )
    })?;

    out.write_all(slot).context("Failed to write slot")
}
