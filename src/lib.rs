pub mod builder;
pub mod commands;
pub mod error;
pub mod file_parsers;
pub mod logging;

pub use builder::{build_image, BuildReport, Source};
pub use error::{ImageError, UndersizedInput};
pub use file_parsers::spc_img::types::{
    image_size, slot_offset, Header, SpcImage, HEADER_SIZE, MAGIC, MAX_FILES, SLOT_SIZE,
};

/// Written when no output path is given
pub const DEFAULT_OUTPUT: &str = "sd_spc.img";
