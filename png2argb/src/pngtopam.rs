use std::ffi::{OsStr, OsString};
use std::io::{self, ErrorKind};
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use log::{debug, error};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("{0} not found, is netpbm installed?")]
    NotFound(String),

    #[error("failed to run {program}: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("{program} exited with {status}")]
    Failed { program: String, status: ExitStatus },
}

/// External PNG decoder that prints a PAM container on stdout.
pub struct PamTool {
    program: OsString,
    args: Vec<OsString>,
}

impl Default for PamTool {
    fn default() -> Self {
        Self::new("pngtopam", ["-alphapam"])
    }
}

impl PamTool {
    pub fn new<I, S>(program: impl AsRef<OsStr>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self {
            program: program.as_ref().to_owned(),
            args: args.into_iter().map(|arg| arg.as_ref().to_owned()).collect(),
        }
    }

    /// Runs the tool on `png` and returns everything it wrote to stdout.
    /// Its stderr goes straight to ours.
    pub fn decode(&self, png: &Path) -> Result<Vec<u8>, ToolError> {
        let name = self.program.to_string_lossy().into_owned();
        debug!("Running {} {:?} {}", name, self.args, png.display());

        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(png)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|err| {
                error!("Could not start {}: {}", name, err);
                match err.kind() {
                    ErrorKind::NotFound => ToolError::NotFound(name.clone()),
                    _ => ToolError::Spawn {
                        program: name.clone(),
                        source: err,
                    },
                }
            })?;

        if !output.status.success() {
            error!("{} failed on {}: {}", name, png.display(), output.status);
            return Err(ToolError::Failed {
                program: name,
                status: output.status,
            });
        }
        debug!("{} produced {} bytes", name, output.stdout.len());

        Ok(output.stdout)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn missing_program_is_not_found() {
        let tool = PamTool::new("png2argb-no-such-decoder", ["-alphapam"]);

        let err = tool.decode(Path::new("icon.png")).unwrap_err();

        assert!(matches!(err, ToolError::NotFound(ref name) if name == "png2argb-no-such-decoder"));
    }

    #[test]
    fn non_zero_exit_is_failure() {
        let tool = PamTool::new("false", Vec::<OsString>::new());

        let err = tool.decode(Path::new("icon.png")).unwrap_err();

        assert!(matches!(err, ToolError::Failed { ref program, .. } if program == "false"));
    }

    #[test]
    fn stdout_is_collected() {
        let tool = PamTool::new("echo", ["-n", "P7"]);

        let out = tool.decode(Path::new("icon.png")).unwrap();

        assert_eq!(out, b"P7 icon.png");
    }
}
