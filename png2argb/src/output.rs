use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

/// Writes `data` to `path` through a sibling `.partial` file that is renamed
/// into place only once fully written and synced. On any error the partial
/// file is removed and `path` is left as it was.
pub fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let partial = partial_path(path);
    let mut file = File::create(&partial)?;
    let guard = RemoveOnDrop::new(&partial);
    debug!("Writing {} bytes to {}", data.len(), partial.display());

    file.write_all(data)?;
    file.sync_all()?;
    // Closed before the rename
    drop(file);

    fs::rename(&partial, path)?;
    guard.disarm();
    Ok(())
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".partial");
    PathBuf::from(name)
}

struct RemoveOnDrop<'a> {
    path: &'a Path,
    armed: bool,
}

impl<'a> RemoveOnDrop<'a> {
    fn new(path: &'a Path) -> Self {
        Self { path, armed: true }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for RemoveOnDrop<'_> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        if let Err(err) = fs::remove_file(self.path) {
            warn!("Could not remove {}: {}", self.path.display(), err);
        }
    }
}
