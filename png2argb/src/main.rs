mod error;
mod output;
mod pngtopam;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use lib_argb::constants::FILE_EXT;
use log::{error, info, warn};

use error::AppError;
use pngtopam::PamTool;

/// Convert a 32x32 PNG icon into a raw ARGB8888 blob.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// 32x32 PNG icon to convert
    input_png: PathBuf,
    /// Where to write the 4096 bytes of ARGB data
    output_bin: PathBuf,
}

fn main() -> ExitCode {
    lib_argb::init_logging();
    let opts = Opts::parse();

    match run(&opts, &PamTool::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Conversion of {} failed", opts.input_png.display());
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(opts: &Opts, decoder: &PamTool) -> Result<(), AppError> {
    if opts.output_bin.extension().and_then(|ext| ext.to_str()) != Some(FILE_EXT) {
        warn!(
            "Output {} does not end in .{}",
            opts.output_bin.display(),
            FILE_EXT
        );
    }

    let container = decoder.decode(&opts.input_png)?;
    let argb = lib_argb::convert(&container)?;

    output::write_atomic(&opts.output_bin, &argb).map_err(|source| AppError::Output {
        path: opts.output_bin.clone(),
        source,
    })?;
    info!(
        "Wrote {} bytes of ARGB data to {}",
        argb.len(),
        opts.output_bin.display()
    );

    Ok(())
}
