//! Scoped scratch directories for staging run outputs.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A scratch directory that is wiped clean on creation and removed when
/// dropped.
///
/// Run outputs are staged here and only promoted into their final location
/// once the whole run has succeeded, so a failure on any path never leaves
/// partial artifacts outside scratch space.
#[derive(Debug)]
pub struct ScratchDir {
    path: PathBuf,
}

impl ScratchDir {
    /// Create a clean scratch directory `parent/name`, removing any
    /// leftovers from a previous run first.
    pub fn create(parent: &Path, name: &str) -> io::Result<Self> {
        let path = parent.join(name);
        if path.exists() {
            fs::remove_dir_all(&path)?;
        }
        fs::create_dir_all(&path)?;
        debug!(path = %path.display(), "acquired scratch directory");
        Ok(Self { path })
    }

    /// The scratch directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of a staged file inside the scratch directory.
    pub fn file(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Move a staged file to its final destination, replacing any existing
    /// file there.
    pub fn promote(&self, name: &str, dest: &Path) -> io::Result<()> {
        let src = self.file(name);
        match fs::rename(&src, dest) {
            Ok(()) => Ok(()),
            Err(_) => {
                // rename fails across filesystems
                fs::copy(&src, dest)?;
                fs::remove_file(&src)
            }
        }
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}
