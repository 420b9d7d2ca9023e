//! Alignment readers and the window writer.
//!
//! Input is auto-detected from its first non-blank line: `>` starts FASTA,
//! a `<taxa> <characters>` header starts PHYLIP. Windows are always written
//! as two-line FASTA.

mod fasta;
mod phylip;

pub use fasta::{parse_fasta, write_fasta};
pub use phylip::parse_phylip;

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::alignment::{Alignment, AlignmentError};

/// Extension used for window files.
pub const WINDOW_FILE_EXTENSION: &str = "fasta";

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentFormat {
    /// FASTA, wrapped or unwrapped.
    Fasta,
    /// Relaxed PHYLIP, sequential or interleaved.
    Phylip,
}

impl AlignmentFormat {
    /// Guess the format from file contents.
    pub fn detect(text: &str) -> Result<Self, AlignmentError> {
        let first = text
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .ok_or(AlignmentError::Empty)?;

        if first.starts_with('>') {
            Ok(AlignmentFormat::Fasta)
        } else if phylip::parse_header(first).is_some() {
            Ok(AlignmentFormat::Phylip)
        } else {
            Err(AlignmentError::UnknownFormat)
        }
    }

    /// Parse `text` in this format.
    pub fn parse(self, text: &str) -> Result<Alignment, AlignmentError> {
        match self {
            AlignmentFormat::Fasta => parse_fasta(text.as_bytes()),
            AlignmentFormat::Phylip => parse_phylip(text),
        }
    }
}

impl fmt::Display for AlignmentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AlignmentFormat::Fasta => "fasta",
            AlignmentFormat::Phylip => "phylip",
        })
    }
}

impl FromStr for AlignmentFormat {
    type Err = AlignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fasta" | "fa" | "fas" => Ok(AlignmentFormat::Fasta),
            "phylip" | "phylip-relaxed" | "phy" => Ok(AlignmentFormat::Phylip),
            _ => Err(AlignmentError::UnknownFormat),
        }
    }
}

/// Read an alignment file, detecting its format unless one is given.
///
/// Returns the alignment together with the format that was used.
pub fn read_alignment(
    path: impl AsRef<Path>,
    format: Option<AlignmentFormat>,
) -> Result<(Alignment, AlignmentFormat), AlignmentError> {
    let text = fs::read_to_string(path.as_ref())?;
    let format = match format {
        Some(format) => format,
        None => AlignmentFormat::detect(&text)?,
    };
    let alignment = format.parse(&text)?;
    Ok((alignment, format))
}
