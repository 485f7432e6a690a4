use log::debug;

use super::format::PamHeader;
use crate::constants::{END_HEADER, PAM_MAGIC};

/// Writes a container in the layout `pngtopam` emits: magic line, one line
/// per declared field, `ENDHDR`, then the payload untouched.
pub fn encode(header: &PamHeader, payload: &[u8]) -> Vec<u8> {
    let mut text = String::new();
    let numeric = [
        (PamHeader::WIDTH_KEY, header.width),
        (PamHeader::HEIGHT_KEY, header.height),
        (PamHeader::DEPTH_KEY, header.depth),
        (PamHeader::MAXVAL_KEY, header.maxval),
    ];
    for (key, value) in numeric {
        if let Some(value) = value {
            text.push_str(&format!("{} {}\n", key, value));
        }
    }
    if let Some(tuple_type) = &header.tuple_type {
        text.push_str(&format!("{} {}\n", PamHeader::TUPLE_TYPE_KEY, tuple_type));
    }

    let mut encoded =
        Vec::with_capacity(PAM_MAGIC.len() + text.len() + END_HEADER.len() + payload.len());
    encoded.extend_from_slice(PAM_MAGIC);
    encoded.extend_from_slice(text.as_bytes());
    // Everything written so far ends in a newline
    encoded.extend_from_slice(&END_HEADER[1..]);
    encoded.extend_from_slice(payload);
    debug!(
        "Encoded container: {} header bytes, {} payload bytes",
        encoded.len() - payload.len(),
        payload.len()
    );

    encoded
}
