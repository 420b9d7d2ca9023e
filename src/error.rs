//! Crate-wide error type for a windowing run.

use std::path::PathBuf;

use thiserror::Error;

use crate::alignment::AlignmentError;

/// Errors that can occur while splitting an alignment into windows.
///
/// Parameter and range-file errors are raised before the first window is
/// generated. Collisions are raised when the offending window is written and
/// stop the run at that window.
#[derive(Debug, Error)]
pub enum WindowError {
    /// Window size or step size below one.
    #[error("invalid {parameter}: {value} (minimum value is 1)")]
    InvalidWindowParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Value that was supplied.
        value: usize,
    },

    /// Range file that cannot be turned into windows.
    #[error("malformed range file {}: {reason}", path.display())]
    MalformedRangeFile {
        /// File the ranges were read from.
        path: PathBuf,
        /// What is wrong with it.
        reason: String,
    },

    /// Output file exists and overwriting was not permitted.
    #[error(
        "the file {} already exists; use --force to overwrite existing files",
        path.display()
    )]
    OutputCollision {
        /// Path that already exists.
        path: PathBuf,
    },

    /// Alignment could not be built or parsed.
    #[error("alignment error: {0}")]
    Alignment(#[from] AlignmentError),

    /// I/O failure while reading ranges or writing windows.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for windowing operations.
pub type Result<T> = std::result::Result<T, WindowError>;

impl WindowError {
    /// Build a [`WindowError::MalformedRangeFile`] for `path`.
    pub fn malformed_ranges(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Self::MalformedRangeFile {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = WindowError::malformed_ranges("ranges.csv", "line 2: start 'x' is not an integer");
        assert_eq!(
            err.to_string(),
            "malformed range file ranges.csv: line 2: start 'x' is not an integer"
        );

        let err = WindowError::OutputCollision {
            path: PathBuf::from("out/51.fasta"),
        };
        assert!(err.to_string().contains("out/51.fasta"));
        assert!(err.to_string().contains("--force"));

        let err = WindowError::InvalidWindowParameter {
            parameter: "step size",
            value: 0,
        };
        assert_eq!(err.to_string(), "invalid step size: 0 (minimum value is 1)");
    }
}
