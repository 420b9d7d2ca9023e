//! Run configuration for [`WindowSplitter`](crate::WindowSplitter).
//!
//! The CLI maps its flags onto [`SplitConfig`]; library users build one
//! directly. [`SplitConfig::validate`] checks parameters before any window is
//! generated.

use std::path::PathBuf;

use tracing::debug;

use crate::error::Result;
use crate::window::{self, RangeSet, RegularWindows, Windows};

/// Default window size in columns.
pub const DEFAULT_WINDOW_SIZE: usize = 300;
/// Default distance between window centres.
pub const DEFAULT_STEP_SIZE: usize = 25;

/// Where window coordinates come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowSource {
    /// Sliding windows over the whole alignment.
    Regular {
        /// Window width in columns.
        window_size: usize,
        /// Distance between consecutive centres.
        step_size: usize,
    },
    /// Explicit ranges read from a comma-separated file.
    Ranges {
        /// Range file path.
        path: PathBuf,
        /// Whether the file uses 1-based coordinates.
        one_based: bool,
    },
}

impl Default for WindowSource {
    fn default() -> Self {
        WindowSource::Regular {
            window_size: DEFAULT_WINDOW_SIZE,
            step_size: DEFAULT_STEP_SIZE,
        }
    }
}

impl WindowSource {
    /// Build the window stream for an alignment of `alignment_length` columns.
    ///
    /// A range file is read and fully validated here, and its windows are
    /// truncated to `alignment_length`.
    pub fn windows(&self, alignment_length: usize) -> Result<Windows> {
        match self {
            WindowSource::Regular {
                window_size,
                step_size,
            } => {
                let windows = RegularWindows::new(*window_size, *step_size, alignment_length)?;
                debug!(
                    left = windows.left_flank(),
                    right = windows.right_flank(),
                    windows = windows.len(),
                    "regular windows"
                );
                Ok(windows.into())
            }
            WindowSource::Ranges { path, one_based } => {
                let ranges = RangeSet::from_file(path)?;
                debug!(
                    source = %ranges.source().display(),
                    ranges = ranges.len(),
                    one_based,
                    "read range file"
                );
                Ok(ranges.into_windows(*one_based, alignment_length)?.into())
            }
        }
    }
}

/// Options for one windowing run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SplitConfig {
    /// Window coordinates.
    pub source: WindowSource,
    /// Keep rows that are fully ambiguous within a window.
    pub keep_ambiguous: bool,
    /// Overwrite window files that already exist.
    pub force: bool,
    /// Write `windows.log` next to the window files.
    pub write_window_log: bool,
}

impl SplitConfig {
    /// Sliding-window configuration with default policies.
    pub fn regular(window_size: usize, step_size: usize) -> Self {
        Self {
            source: WindowSource::Regular {
                window_size,
                step_size,
            },
            ..Self::default()
        }
    }

    /// Range-file configuration with default policies.
    pub fn ranges(path: impl Into<PathBuf>, one_based: bool) -> Self {
        Self {
            source: WindowSource::Ranges {
                path: path.into(),
                one_based,
            },
            ..Self::default()
        }
    }

    /// Reject parameters that cannot produce windows.
    pub fn validate(&self) -> Result<()> {
        match &self.source {
            WindowSource::Regular {
                window_size,
                step_size,
            } => window::validate_parameters(*window_size, *step_size),
            WindowSource::Ranges { .. } => Ok(()),
        }
    }
}
