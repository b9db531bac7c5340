//! Error types for image building

use std::{fmt, io};

use thiserror::Error;

use crate::file_parsers::spc_img::types::SLOT_SIZE;

/// Fatal errors while packing an image
#[derive(Debug, Error)]
pub enum ImageError {
    /// Invalid arguments: too many or too few files, unopenable paths
    #[error("{0}")]
    Configuration(String),

    /// An input could not be read
    #[error("failed to read {name}")]
    SourceRead {
        name: String,
        #[source]
        source: io::Error,
    },

    /// The output did not accept all bytes
    #[error("failed to write image")]
    SinkWrite {
        #[source]
        source: io::Error,
    },
}

impl ImageError {
    pub fn configuration(message: impl Into<String>) -> Self {
        ImageError::Configuration(message.into())
    }
}

/// Non-fatal: an input shorter than a slot, zero-padded on write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndersizedInput {
    pub index: usize,
    pub name: String,
    pub len: usize,
}

impl fmt::Display for UndersizedInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expecting at least {} bytes for {}, actually it is only {}",
            SLOT_SIZE, self.name, self.len
        )
    }
}
