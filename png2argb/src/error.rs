use std::io;
use std::path::PathBuf;

use lib_argb::ConvertError;
use thiserror::Error;

use crate::pngtopam::ToolError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("PNG decoding failed: {0}")]
    Decoder(#[from] ToolError),

    #[error("{0}")]
    Convert(#[from] ConvertError),

    #[error("cannot write {}: {source}", path.display())]
    Output { path: PathBuf, source: io::Error },
}
