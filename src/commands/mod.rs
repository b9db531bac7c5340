pub mod cat;
pub mod extract;
pub mod info;
pub mod list;
pub mod pack;

use std::{fs, path::Path};

use anyhow::{Context, Result};
use bytes::Bytes;

use crate::file_parsers::spc_img::{types::SpcImage, SpcImageParser};

/// Read and parse an image from disk
pub fn load_image(path: &Path) -> Result<SpcImage> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read image {}", path.display()))?;

    SpcImageParser
        .parse_bytes(Bytes::from(bytes))
        .with_context(|| format!("Failed to parse image {}", path.display()))
}
