pub const ICON_WIDTH: u32 = 32;
pub const ICON_HEIGHT: u32 = 32;
/// Red, green, blue and alpha.
pub const CHANNELS: u32 = 4;
pub const MAXVAL: u32 = 255;
pub const TUPLE_TYPE: &str = "RGB_ALPHA";

pub const ICON_PAYLOAD_LEN: usize = (ICON_WIDTH * ICON_HEIGHT * CHANNELS) as usize;

pub const PAM_MAGIC: &[u8; 3] = b"P7\n";
pub const END_HEADER: &[u8; 8] = b"\nENDHDR\n";

pub const FILE_EXT: &str = "bin";
