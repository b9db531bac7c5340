use std::{
    io::{self, BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

use crate::{
    commands::load_image,
    file_parsers::spc_img::types::{slot_offset, used_len, SpcImage},
};

/// List the slots of an image: index, byte offset and used length
pub fn list_slots(image_path: &Path) -> Result<()> {
    let image = load_image(image_path)?;

    let mut stdout = BufWriter::new(io::stdout().lock());
    write_listing(&image, &mut stdout)?;

    stdout.flush().context("Failed to flush stdout")
}

pub fn write_listing<W: Write>(image: &SpcImage, out: &mut W) -> Result<()> {
    image.slots.iter().enumerate().try_for_each(|(i, slot)| {
        writeln!(out, "{}\t{:#010x}\t{}", i, slot_offset(i), used_len(slot))
            .context("Failed to write listing")
    })
}
