use crate::constants::{CHANNELS, ICON_HEIGHT, ICON_WIDTH, MAXVAL, TUPLE_TYPE};

/// Header fields of a PAM ("P7") container.
///
/// Every field is optional: a container consisting of nothing but the magic
/// line and `ENDHDR` is still well-formed, it just declares nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PamHeader {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub depth: Option<u32>,
    pub maxval: Option<u32>,
    pub tuple_type: Option<String>,
}

impl PamHeader {
    pub const WIDTH_KEY: &'static str = "WIDTH";
    pub const HEIGHT_KEY: &'static str = "HEIGHT";
    pub const DEPTH_KEY: &'static str = "DEPTH";
    pub const MAXVAL_KEY: &'static str = "MAXVAL";
    pub const TUPLE_TYPE_KEY: &'static str = "TUPLTYPE";

    /// The header `pngtopam -alphapam` writes for a 32x32 RGBA icon.
    pub fn icon() -> Self {
        Self {
            width: Some(ICON_WIDTH),
            height: Some(ICON_HEIGHT),
            depth: Some(CHANNELS),
            maxval: Some(MAXVAL),
            tuple_type: Some(TUPLE_TYPE.to_string()),
        }
    }
}

/// A decoded container. The payload borrows from the input buffer.
#[derive(Debug)]
pub struct Pam<'a> {
    pub header: PamHeader,
    pub payload: &'a [u8],
}
