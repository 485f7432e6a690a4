pub mod decoder;
pub mod encoder;
pub mod format;

pub use decoder::{decode, DecodeError};
pub use encoder::encode;
pub use format::{Pam, PamHeader};
