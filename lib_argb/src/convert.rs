use log::{debug, error, info};
use thiserror::Error;

use crate::constants::{CHANNELS, ICON_HEIGHT, ICON_PAYLOAD_LEN, ICON_WIDTH, MAXVAL, TUPLE_TYPE};
use crate::pam::{self, DecodeError, PamHeader};

const PIXEL_SIZE: usize = CHANNELS as usize;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("{0}")]
    Decode(#[from] DecodeError),
    #[error("header declares {field} {found}, expected {expected} for a 32x32 RGBA icon")]
    UnsupportedHeader {
        field: &'static str,
        found: String,
        expected: String,
    },
    #[error(
        "payload has the wrong length ({0} bytes), expected a 32x32 4-channel-per-pixel icon"
    )]
    WrongPayloadLength(usize),
    #[error("pixel data ends mid-pixel: {0} trailing bytes")]
    TruncatedPixel(usize),
}

/// Converts a PAM container holding a 32x32 RGBA icon into a flat ARGB8888
/// buffer with no header.
///
/// # Errors
/// - `ConvertError::Decode` if the magic line or `ENDHDR` is missing, or a
///   header line cannot be parsed
/// - `ConvertError::UnsupportedHeader` if a declared field disagrees with the
///   icon geometry
/// - `ConvertError::WrongPayloadLength` unless the payload is exactly 4096 bytes
pub fn convert(container: &[u8]) -> Result<Vec<u8>, ConvertError> {
    info!("Starting conversion of {} byte container", container.len());

    let pam = pam::decode(container)?;
    check_icon_header(&pam.header)?;

    if pam.payload.len() != ICON_PAYLOAD_LEN {
        error!(
            "Payload is {} bytes, a {}x{} icon needs {}",
            pam.payload.len(),
            ICON_WIDTH,
            ICON_HEIGHT,
            ICON_PAYLOAD_LEN
        );
        return Err(ConvertError::WrongPayloadLength(pam.payload.len()));
    }

    let argb = rgba_to_argb(pam.payload)?;
    info!("Conversion completed successfully");

    Ok(argb)
}

/// Checks the fields a container declares against the supported icon shape.
/// Fields the container leaves out are not checked.
pub fn check_icon_header(header: &PamHeader) -> Result<(), ConvertError> {
    let expected = PamHeader::icon();
    let numeric = [
        (PamHeader::WIDTH_KEY, header.width, expected.width),
        (PamHeader::HEIGHT_KEY, header.height, expected.height),
        (PamHeader::DEPTH_KEY, header.depth, expected.depth),
        (PamHeader::MAXVAL_KEY, header.maxval, expected.maxval),
    ];
    for (field, found, expected) in numeric {
        if let (Some(found), Some(expected)) = (found, expected) {
            if found != expected {
                return Err(unsupported(field, found.to_string(), expected.to_string()));
            }
        }
    }

    if let Some(tuple_type) = &header.tuple_type {
        if tuple_type != TUPLE_TYPE {
            return Err(unsupported(
                PamHeader::TUPLE_TYPE_KEY,
                tuple_type.clone(),
                TUPLE_TYPE.to_string(),
            ));
        }
    }

    debug!(
        "Header matches {}x{}, depth {}, maxval {}",
        ICON_WIDTH, ICON_HEIGHT, CHANNELS, MAXVAL
    );
    Ok(())
}

fn unsupported(field: &'static str, found: String, expected: String) -> ConvertError {
    error!("Header declares {} {}, expected {}", field, found, expected);
    ConvertError::UnsupportedHeader {
        field,
        found,
        expected,
    }
}

/// Reorders every `(r, g, b, a)` group to `(a, r, g, b)`.
///
/// Byte values are copied as-is. A trailing partial pixel is an error rather
/// than being dropped.
pub fn rgba_to_argb(rgba: &[u8]) -> Result<Vec<u8>, ConvertError> {
    let pixels = rgba.chunks_exact(PIXEL_SIZE);
    let remainder = pixels.remainder().len();
    if remainder != 0 {
        error!("Pixel data has {} trailing bytes", remainder);
        return Err(ConvertError::TruncatedPixel(remainder));
    }

    let mut argb = Vec::with_capacity(rgba.len());
    for pixel in pixels {
        let [r, g, b, a] = [pixel[0], pixel[1], pixel[2], pixel[3]];
        argb.extend_from_slice(&[a, r, g, b]);
    }
    debug!("Permuted {} pixels", argb.len() / PIXEL_SIZE);

    Ok(argb)
}
