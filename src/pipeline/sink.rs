use std::fs::{self, File};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::alignment::io::{write_fasta, WINDOW_FILE_EXTENSION};
use crate::error::{Result, WindowError};
use crate::pipeline::WindowFragment;

/// Destination for processed windows.
pub trait WindowSink {
    /// Persist one window. Errors stop the run at this window.
    fn write_window(&mut self, fragment: &WindowFragment) -> Result<()>;
}

/// Writes each window to `<directory>/<name>.fasta`.
#[derive(Debug, Clone)]
pub struct FastaDirectorySink {
    directory: PathBuf,
    force: bool,
}

impl FastaDirectorySink {
    /// Sink writing into `directory`, which is created if missing.
    pub fn new(directory: impl Into<PathBuf>, force: bool) -> Result<Self> {
        let directory = directory.into();
        fs::create_dir_all(&directory)?;
        Ok(Self { directory, force })
    }

    /// Output directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Path a window called `name` is written to.
    ///
    /// `name` is used as a single path component. Range files are rejected
    /// when a name contains a path separator, and default names are numbers.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.directory.join(format!("{name}.{WINDOW_FILE_EXTENSION}"))
    }

    /// Collision check run before any bytes are written for a window.
    ///
    /// Returns the target path, or [`WindowError::OutputCollision`] when it
    /// already exists and overwriting is off.
    pub fn guard(&self, name: &str) -> Result<PathBuf> {
        let path = self.path_for(name);
        if !self.force && path.exists() {
            return Err(WindowError::OutputCollision { path });
        }
        Ok(path)
    }
}

impl WindowSink for FastaDirectorySink {
    fn write_window(&mut self, fragment: &WindowFragment) -> Result<()> {
        let path = self.guard(fragment.window.name())?;
        debug!(path = %path.display(), rows = fragment.alignment.num_rows(), "writing window");
        let file = File::create(&path)?;
        write_fasta(file, &fragment.alignment)?;
        Ok(())
    }
}

/// Keeps every window in memory, in write order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    /// Windows received so far.
    pub fragments: Vec<WindowFragment>,
}

impl MemorySink {
    /// Empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl WindowSink for MemorySink {
    fn write_window(&mut self, fragment: &WindowFragment) -> Result<()> {
        self.fragments.push(fragment.clone());
        Ok(())
    }
}
