use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tracing::info;

use crate::commands::load_image;

/// Name of the file slot `index` is extracted to
pub fn slot_filename(index: usize) -> String {
    format!("slot_{index:05}.spc")
}

/// Extract every slot of an image into a folder
pub fn extract_slots(image_path: &Path, output_folder: &Path) -> Result<Vec<PathBuf>> {
    let image = load_image(image_path)?;

    fs::create_dir_all(output_folder).context("Failed to create folder")?;

    image
        .slots
        .iter()
        .enumerate()
        .map(|(i, slot)| {
            let out_filename = output_folder.join(slot_filename(i));
            fs::write(&out_filename, slot)
                .with_context(|| format!("Failed to write file {}", out_filename.display()))?;

            info!("Extracted slot: {}", out_filename.display());
            Ok(out_filename)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        builder::{build_image, Source},
        file_parsers::spc_img::types::SLOT_SIZE,
    };

    #[test]
    fn test_extract() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("sd_spc.img");

        let mut bytes = Vec::new();
        build_image(
            &mut bytes,
            vec![
                Source::from_bytes("a.spc", vec![5; 20]),
                Source::from_bytes("b.spc", vec![6; SLOT_SIZE + 3]),
            ],
        )
        .unwrap();
        fs::write(&image_path, bytes).unwrap();

        let out_folder = dir.path().join("slots");
        let written = extract_slots(&image_path, &out_folder).unwrap();

        assert_eq!(
            written,
            vec![
                out_folder.join("slot_00000.spc"),
                out_folder.join("slot_00001.spc")
            ]
        );

        let first = fs::read(&written[0]).unwrap();
        assert_eq!(first.len(), SLOT_SIZE);
        assert_eq!(&first[..20], &[5; 20]);
        assert!(first[20..].iter().all(|&b| b == 0));

        assert_eq!(fs::read(&written[1]).unwrap(), vec![6; SLOT_SIZE]);
    }

    #[test]
    fn test_extract_not_an_image() {
        let dir = tempfile::tempdir().unwrap();
        let image_path = dir.path().join("junk.img");
        fs::write(&image_path, b"not an image at all").unwrap();

        let err = extract_slots(&image_path, &dir.path().join("out")).unwrap_err();
        assert!(format!("{err:#}").contains("Not an SPC image"));
    }
}
