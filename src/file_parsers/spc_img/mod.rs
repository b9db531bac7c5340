use anyhow::{anyhow, ensure, Result};
use bytes::Bytes;
use nom::{
    bytes::complete::{tag, take},
    multi::count,
    number::complete::le_u16,
    IResult,
};

use crate::file_parsers::{
    spc_img::types::{Header, SpcImage, HEADER_SIZE, MAGIC, SLOT_SIZE},
    FileParser,
};

pub mod types;

pub struct SpcImageParser;

impl FileParser for SpcImageParser {
    type Output = SpcImage;

    fn parse(&self, bytes: &[u8]) -> Result<Self::Output> {
        self.parse_bytes(Bytes::copy_from_slice(bytes))
    }
}

impl SpcImageParser {
    /// Parse an owned buffer; slots are views into it rather than copies
    pub fn parse_bytes(&self, buf: Bytes) -> Result<SpcImage> {
        ensure!(
            buf.len() >= HEADER_SIZE,
            "SPC image header truncated: expected {HEADER_SIZE} bytes, got {}",
            buf.len()
        );

        let (rest, header) = parse_header(&buf).map_err(|_| {
            anyhow!(
                "Not an SPC image: missing {:?} tag",
                String::from_utf8_lossy(MAGIC)
            )
        })?;

        let wanted = header.count() * SLOT_SIZE;
        ensure!(
            rest.len() >= wanted,
            "SPC image truncated: header declares {} slots ({wanted} bytes), only {} bytes follow",
            header.count(),
            rest.len()
        );

        let (rest, slots) = parse_slots(rest, header.count())
            .map_err(|e| anyhow!("Failed to parse SPC image slots: {:?}", e.map(|e| e.code)))?;

        Ok(SpcImage {
            header,
            slots: slots.into_iter().map(|s| buf.slice_ref(s)).collect(),
            trailing: rest.len(),
        })
    }
}

fn parse_header(input: &[u8]) -> IResult<&[u8], Header> {
    let (input, _) = tag(&MAGIC[..])(input)?;
    let (input, count) = le_u16(input)?;
    let (input, _) = take(HEADER_SIZE - 6)(input)?; // Reserved, zero-filled by the packer

    Ok((input, Header { count }))
}

fn parse_slots(input: &[u8], slot_count: usize) -> IResult<&[u8], Vec<&[u8]>> {
    count(take(SLOT_SIZE), slot_count)(input)
}
