pub mod constants;
pub mod convert;
pub mod pam;

use log::*;
use std::io::Write;

pub use crate::convert::{convert, ConvertError};
pub use crate::pam::{decode, encode, Pam, PamHeader};

/// Sets up stderr logging for the converter and its front-end.
///
/// Defaults to `warn`, with `info` for this workspace's crates. `RUST_LOG`
/// overrides both.
pub fn init_logging() {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter_level(LevelFilter::Warn)
        .filter(Some("lib_argb"), LevelFilter::Info)
        .filter(Some("png2argb"), LevelFilter::Info)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
