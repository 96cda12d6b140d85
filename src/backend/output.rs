//! Place generated modules on disk.
//!
//! The writer only knows about paths and bytes; it never generates code itself. Each module lands in
//! `<dir>/<module>.rs`.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Writes generated modules into one output directory.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
}

impl OutputWriter {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `module`.
    pub fn target_path(&self, module: &str) -> PathBuf {
        self.dir.join(format!("{}.rs", module))
    }

    /// Write `contents` for `module`, creating the directory if needed.
    pub fn write(&self, module: &str, contents: &str) -> io::Result<PathBuf> {
        fs::create_dir_all(&self.dir)?;
        let path = self.target_path(module);
        fs::write(&path, contents)?;
        tracing::info!(path = %path.display(), bytes = contents.len(), "wrote generated module");
        Ok(path)
    }

    /// Whether the file for `module` exists and holds exactly `contents`.
    pub fn is_up_to_date(&self, module: &str, contents: &str) -> io::Result<bool> {
        match fs::read_to_string(self.target_path(module)) {
            Ok(existing) => Ok(existing == contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
