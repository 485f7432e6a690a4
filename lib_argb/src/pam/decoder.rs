use super::format::{Pam, PamHeader};
use crate::constants::{END_HEADER, PAM_MAGIC};
use log::{debug, error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("not a valid pixel-map container")]
    InvalidSignature,
    #[error("header terminator not found")]
    MissingEndOfHeader,
    #[error("malformed header line {0:?}")]
    MalformedHeader(String),
}

pub fn decode(container: &[u8]) -> Result<Pam<'_>, DecodeError> {
    // Check the magic line
    if !container.starts_with(PAM_MAGIC) {
        error!("Container does not start with the P7 magic line");
        return Err(DecodeError::InvalidSignature);
    }
    debug!("Magic line validated successfully");

    // The search starts at 0 so that the magic line's newline can double as
    // the first byte of the terminator in a header with no fields.
    let header_end = find(container, END_HEADER).ok_or_else(|| {
        error!("No ENDHDR line in {} bytes of decoder output", container.len());
        DecodeError::MissingEndOfHeader
    })?;
    debug!("Header terminator found at offset {}", header_end);

    let header = parse_header(&container[..header_end])?;
    debug!("Header fields: {:?}", header);

    let payload = &container[header_end + END_HEADER.len()..];
    debug!("Payload length: {}", payload.len());

    Ok(Pam { header, payload })
}

/// Byte-level subsequence search; the payload after the header is binary.
fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn parse_header(header: &[u8]) -> Result<PamHeader, DecodeError> {
    let mut fields = PamHeader::default();

    // First line is the magic number
    for raw in header.split(|&b| b == b'\n').skip(1) {
        let line = std::str::from_utf8(raw)
            .map_err(|_| malformed(&String::from_utf8_lossy(raw)))?
            .trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (key, value) = line
            .split_once(|c: char| c.is_ascii_whitespace())
            .map(|(key, value)| (key, value.trim()))
            .ok_or_else(|| malformed(line))?;

        match key {
            PamHeader::WIDTH_KEY => fields.width = Some(number(line, value)?),
            PamHeader::HEIGHT_KEY => fields.height = Some(number(line, value)?),
            PamHeader::DEPTH_KEY => fields.depth = Some(number(line, value)?),
            PamHeader::MAXVAL_KEY => fields.maxval = Some(number(line, value)?),
            // Repeated TUPLTYPE lines concatenate
            PamHeader::TUPLE_TYPE_KEY => {
                fields.tuple_type = Some(match fields.tuple_type.take() {
                    Some(prev) => format!("{} {}", prev, value),
                    None => value.to_string(),
                })
            }
            other => debug!("Ignoring unknown header key {:?}", other),
        }
    }

    Ok(fields)
}

fn number(line: &str, value: &str) -> Result<u32, DecodeError> {
    value.parse().map_err(|_| malformed(line))
}

fn malformed(line: &str) -> DecodeError {
    error!("Malformed header line {:?}", line);
    DecodeError::MalformedHeader(line.to_string())
}
