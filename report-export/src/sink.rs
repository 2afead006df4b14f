//! Destinations for rendered files.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::ExportError;
use crate::exporter::ExportedFile;

/// Where exported files end up.
pub trait FileSink {
    /// Stores `file` and returns where it was written.
    ///
    /// # Errors
    /// [`ExportError::Io`] when the file cannot be written. A failed write
    /// leaves nothing behind.
    fn write(
        &mut self,
        file: &ExportedFile,
    ) -> Result<PathBuf, ExportError>;
}

/// Writes files into a directory.
///
/// Bytes go to a hidden temporary sibling first and are renamed into place,
/// so readers never observe a half-written report.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl FileSink for DirectorySink {
    fn write(
        &mut self,
        file: &ExportedFile,
    ) -> Result<PathBuf, ExportError> {
        fs::create_dir_all(&self.dir)?;

        let target = self.dir.join(&file.file_name);
        let temp = self.dir.join(format!(".{}.partial", file.file_name));

        if let Err(err) = write_all(&temp, &file.bytes).and_then(|()| fs::rename(&temp, &target)) {
            warn!(path = %temp.display(), error = %err, "discarding partial report");
            let _ = fs::remove_file(&temp);
            return Err(err.into());
        }

        info!(path = %target.display(), size = file.bytes.len(), "wrote report");
        Ok(target)
    }
}

fn write_all(
    path: &Path,
    bytes: &[u8],
) -> std::io::Result<()> {
    let mut out = File::create(path)?;
    out.write_all(bytes)?;
    out.sync_all()
}

/// Keeps files in memory. Handy for previews and tests.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub files: Vec<ExportedFile>,
}

impl FileSink for MemorySink {
    fn write(
        &mut self,
        file: &ExportedFile,
    ) -> Result<PathBuf, ExportError> {
        self.files.push(file.clone());
        Ok(PathBuf::from(&file.file_name))
    }
}
