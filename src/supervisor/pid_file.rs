//! File-backed record of the supervised worker's process ID.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::error::SupervisorError;

/// The marker file whose presence signals "a worker is believed running".
///
/// Holds a single decimal pid. At most one marker may exist at a time:
/// [`PidFile::write`] uses `create_new` so a second writer fails instead of
/// clobbering an existing record.
pub struct PidFile {
    path: PathBuf,
}

impl PidFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the recorded pid. Returns `Ok(None)` if no marker exists;
    /// a marker whose content is not a pid is an error, not a silent skip.
    pub fn read(&self) -> Result<Option<i32>, SupervisorError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let pid = contents
            .trim()
            .parse::<i32>()
            .map_err(|_| SupervisorError::PidFileCorrupt {
                path: self.path.clone(),
                content: contents.trim().to_string(),
            })?;

        Ok(Some(pid))
    }

    /// Record a freshly spawned worker's pid. Fails if a marker already
    /// exists.
    pub fn write(&self, pid: i32) -> Result<(), SupervisorError> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)?;
        writeln!(file, "{pid}")?;
        Ok(())
    }

    /// Delete the marker. Errors if it does not exist.
    pub fn remove(&self) -> Result<(), SupervisorError> {
        fs::remove_file(&self.path)?;
        Ok(())
    }
}
