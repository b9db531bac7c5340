use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{
    commands::load_image,
    file_parsers::spc_img::types::{image_size, SpcImage, MAGIC, SLOT_SIZE},
};

#[derive(Debug, Serialize)]
pub struct ImageSummary {
    pub tag: String,
    pub count: usize,
    pub slot_size: usize,
    pub image_size: usize,
    pub trailing_bytes: usize,
}

impl From<&SpcImage> for ImageSummary {
    fn from(image: &SpcImage) -> Self {
        Self {
            tag: String::from_utf8_lossy(MAGIC).into_owned(),
            count: image.header.count(),
            slot_size: SLOT_SIZE,
            image_size: image_size(image.header.count()),
            trailing_bytes: image.trailing_bytes(),
        }
    }
}

/// Print a JSON summary of an image
pub fn image_info(image_path: &Path) -> Result<()> {
    let image = load_image(image_path)?;

    let summary = ImageSummary::from(&image);
    let json = serde_json::to_string_pretty(&summary).context("Failed to serialise summary")?;
    println!("{json}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::{build_image, Source},
        file_parsers::{spc_img::SpcImageParser, FileParser},
    };

    #[test]
    fn test_summary_json() {
        let mut bytes = Vec::new();
        build_image(
            &mut bytes,
            vec![
                Source::from_bytes("a.spc", vec![1]),
                Source::from_bytes("b.spc", vec![2]),
                Source::from_bytes("c.spc", vec![3]),
            ],
        )
        .unwrap();
        bytes.extend_from_slice(&[0; 4]);

        let image = SpcImageParser.parse(&bytes).unwrap();
        let value = serde_json::to_value(ImageSummary::from(&image)).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "tag": "SPC ",
                "count": 3,
                "slot_size": 66048,
                "image_size": 512 + 3 * 66048,
                "trailing_bytes": 4,
            })
        );
    }
}
