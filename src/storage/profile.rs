//! Profile directory access.
//!
//! Provides the [`ProfileDir`] struct that owns the path of the active
//! profile and reads/writes the snapshot files stored there.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::platform;

/// Directory holding one profile's persisted tab state.
#[derive(Debug, Clone)]
pub struct ProfileDir {
    path: PathBuf,
}

impl ProfileDir {
    /// Opens (or creates) the profile directory at the given path.
    ///
    /// # Errors
    /// Returns `io::Error` if the directory cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    /// Opens the named profile under the platform data directory.
    pub fn open_named(name: &str) -> io::Result<Self> {
        Self::open(platform::get_data_dir().join("profiles").join(name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn file_path(&self, file_name: &str) -> PathBuf {
        self.path.join(file_name)
    }

    /// Reads a profile file. A missing file reads as `None`.
    pub fn read(&self, file_name: &str) -> io::Result<Option<Vec<u8>>> {
        match fs::read(self.file_path(file_name)) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Writes a profile file through a temporary file and rename.
    pub fn write(&self, file_name: &str, data: &[u8]) -> io::Result<()> {
        let target = self.file_path(file_name);
        let tmp = target.with_extension("tmp");
        fs::write(&tmp, data)?;
        fs::rename(tmp, target)
    }

    /// Deletes a profile file; deleting a missing file is not an error.
    pub fn remove(&self, file_name: &str) -> io::Result<()> {
        match fs::remove_file(self.file_path(file_name)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}
