#![allow(dead_code)]

use lib_argb::constants::ICON_PAYLOAD_LEN;

/// The smallest container the decoder accepts: magic line, then ENDHDR.
pub const MINIMAL_HEADER: &[u8] = b"P7\nENDHDR\n";

/// Header exactly as `pngtopam -alphapam` prints it for a 32x32 icon.
pub const PNGTOPAM_HEADER: &[u8] =
    b"P7\nWIDTH 32\nHEIGHT 32\nDEPTH 4\nMAXVAL 255\nTUPLTYPE RGB_ALPHA\nENDHDR\n";

pub fn container(header: &[u8], payload: &[u8]) -> Vec<u8> {
    [header, payload].concat()
}

/// Every pixel distinct: pixel `i` is `(i, i >> 8, !i, i * 7)` truncated to bytes.
pub fn distinct_payload() -> Vec<u8> {
    (0..ICON_PAYLOAD_LEN / 4)
        .flat_map(|i| [i as u8, (i >> 8) as u8, !(i as u8), (i * 7) as u8])
        .collect()
}
