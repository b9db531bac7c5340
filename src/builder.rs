//! Packs SPC snapshots into a flat image: one header, then one fixed-size slot per input

use std::{
    fs::File,
    io::{self, Cursor, Read, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, warn};

use crate::{
    error::{ImageError, UndersizedInput},
    file_parsers::spc_img::types::{Header, HEADER_SIZE, SLOT_SIZE},
};

/// Where a source's bytes come from
enum Origin {
    Reader(Box<dyn Read>),
    /// Opened only while its slot is being copied
    Path(PathBuf),
}

/// A named input, read to completion when its slot is written
pub struct Source {
    name: String,
    origin: Origin,
}

impl std::fmt::Debug for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Source").field("name", &self.name).finish()
    }
}

impl Source {
    pub fn new(name: impl Into<String>, reader: impl Read + 'static) -> Self {
        Self {
            name: name.into(),
            origin: Origin::Reader(Box::new(reader)),
        }
    }

    pub fn from_bytes(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self::new(name, Cursor::new(data))
    }

    /// A file named by its path. It is opened once here to report a bad path
    /// early, then closed again until its slot is written.
    pub fn open(path: &Path) -> Result<Self, ImageError> {
        File::open(path).map_err(|e| {
            ImageError::configuration(format!("can't open '{}': {e}", path.display()))
        })?;

        Ok(Self {
            name: path.display().to_string(),
            origin: Origin::Path(path.to_path_buf()),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the first slot's worth of bytes, draining and counting anything past it
    fn read_slot(&mut self) -> Result<(Vec<u8>, u64), ImageError> {
        let read = match &mut self.origin {
            Origin::Reader(reader) => read_capped(reader.as_mut()),
            Origin::Path(path) => {
                File::open(path.as_path()).and_then(|mut file| read_capped(&mut file))
            }
        };

        read.map_err(|source| ImageError::SourceRead {
            name: self.name.clone(),
            source,
        })
    }
}

fn read_capped<R: Read + ?Sized>(reader: &mut R) -> io::Result<(Vec<u8>, u64)> {
    let mut slot = Vec::with_capacity(SLOT_SIZE);

    (&mut *reader).take(SLOT_SIZE as u64).read_to_end(&mut slot)?;
    let excess = io::copy(reader, &mut io::sink())?;

    Ok((slot, excess))
}

/// Outcome of a successful build
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub slots: usize,
    pub bytes_written: u64,
    pub warnings: Vec<UndersizedInput>,
}

/// Write an image of `sources` to `sink`, in order, then flush it.
///
/// The count is checked before anything is written, so an oversized or empty
/// input list leaves the sink untouched. Undersized inputs are zero-padded and
/// reported; oversized ones are cut to the slot size without a warning. Read
/// and write failures abort immediately and leave whatever was already written.
pub fn build_image<W: Write>(
    sink: &mut W,
    sources: Vec<Source>,
) -> Result<BuildReport, ImageError> {
    let header = Header::for_count(sources.len())?;

    let write_err = |source| ImageError::SinkWrite { source };

    sink.write_all(&header.encode()).map_err(write_err)?;

    let mut report = BuildReport {
        slots: 0,
        bytes_written: HEADER_SIZE as u64,
        warnings: vec![],
    };

    for (index, mut source) in sources.into_iter().enumerate() {
        let (mut slot, excess) = source.read_slot()?;

        if slot.len() < SLOT_SIZE {
            let warning = UndersizedInput {
                index,
                name: source.name,
                len: slot.len(),
            };
            warn!("{warning}");
            report.warnings.push(warning);

            slot.resize(SLOT_SIZE, 0);
        } else {
            debug!(index, name = %source.name, excess, "packed slot");
        }

        sink.write_all(&slot).map_err(write_err)?;

        report.slots += 1;
        report.bytes_written += SLOT_SIZE as u64;
    }

    sink.flush().map_err(write_err)?;

    Ok(report)
}
