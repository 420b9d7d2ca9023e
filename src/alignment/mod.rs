//! Column-aligned sequence matrix, window slicing, and alignment file I/O.

pub mod io;
mod slice;

pub use slice::WindowSlicer;

use std::ops::Range;

use thiserror::Error;

/// Characters that break Newick or RAxML parsing when used in identifiers.
pub const ILLEGAL_ID_CHARACTERS: [char; 7] = [',', ';', '(', ')', ' ', '\'', ':'];

/// Errors raised while building or reading an alignment.
#[derive(Debug, Error)]
pub enum AlignmentError {
    /// The input holds no sequences.
    #[error("alignment contains no sequences")]
    Empty,

    /// A row differs in length from the first row.
    #[error("sequence '{id}' has {found} columns, expected {expected}")]
    RaggedRows {
        /// Identifier of the offending row.
        id: String,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },

    /// None of the supported formats matched the input.
    #[error("unknown alignment format (supported: fasta, phylip)")]
    UnknownFormat,

    /// Input looked like a known format but could not be parsed.
    #[error("parse error at line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// Underlying read failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// One row of an alignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    /// Sequence identifier.
    pub id: String,
    /// Aligned residues as ASCII.
    pub seq: Vec<u8>,
}

impl SeqRecord {
    /// Construct a row.
    pub fn new(id: impl Into<String>, seq: impl Into<Vec<u8>>) -> Self {
        Self {
            id: id.into(),
            seq: seq.into(),
        }
    }

    /// Number of columns in the row.
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Returns `true` for a row without columns.
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }
}

/// Matrix of equal-length rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    records: Vec<SeqRecord>,
    width: usize,
}

impl Alignment {
    /// Build an alignment, checking that all rows share one length.
    ///
    /// An empty row list is accepted and has width zero; readers reject empty
    /// inputs themselves.
    pub fn new(records: Vec<SeqRecord>) -> Result<Self, AlignmentError> {
        let width = records.first().map(SeqRecord::len).unwrap_or(0);
        if let Some(ragged) = records.iter().find(|record| record.len() != width) {
            return Err(AlignmentError::RaggedRows {
                id: ragged.id.clone(),
                expected: width,
                found: ragged.len(),
            });
        }
        Ok(Self { records, width })
    }

    /// Build from rows already known to share a length (subsets and slices
    /// of a valid alignment).
    pub(crate) fn from_records_unchecked(records: Vec<SeqRecord>) -> Self {
        let width = records.first().map(SeqRecord::len).unwrap_or(0);
        debug_assert!(records.iter().all(|record| record.len() == width));
        Self { records, width }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn num_rows(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the alignment has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows in input order.
    pub fn records(&self) -> &[SeqRecord] {
        &self.records
    }

    /// Iterate over rows.
    pub fn iter(&self) -> std::slice::Iter<'_, SeqRecord> {
        self.records.iter()
    }

    /// First row, used as the classification sample.
    pub fn first(&self) -> Option<&SeqRecord> {
        self.records.first()
    }

    /// Consume the alignment, returning its rows.
    pub fn into_records(self) -> Vec<SeqRecord> {
        self.records
    }

    /// Copy of the columns in `range`, clamped to the alignment width.
    ///
    /// Row order and identifiers are preserved; the source is not modified.
    pub fn columns(&self, range: Range<usize>) -> Alignment {
        let end = range.end.min(self.width);
        let start = range.start.min(end);
        let records = self
            .records
            .iter()
            .map(|record| SeqRecord::new(record.id.clone(), &record.seq[start..end]))
            .collect();
        Self {
            records,
            width: end - start,
        }
    }

    /// Replace [`ILLEGAL_ID_CHARACTERS`] in every identifier with `_`.
    pub fn sanitize_ids(&mut self) {
        for record in &mut self.records {
            if record.id.contains(&ILLEGAL_ID_CHARACTERS[..]) {
                record.id = record.id.replace(&ILLEGAL_ID_CHARACTERS[..], "_");
            }
        }
    }
}

impl<'a> IntoIterator for &'a Alignment {
    type Item = &'a SeqRecord;
    type IntoIter = std::slice::Iter<'a, SeqRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Alignment {
        Alignment::new(vec![
            SeqRecord::new("seq1", "ACGTAC"),
            SeqRecord::new("seq2", "A-GTTC"),
        ])
        .unwrap()
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Alignment::new(vec![
            SeqRecord::new("a", "ACGT"),
            SeqRecord::new("b", "ACG"),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            AlignmentError::RaggedRows { ref id, expected: 4, found: 3 } if id == "b"
        ));
    }

    #[test]
    fn columns_copy_each_row() {
        let alignment = sample();
        let slice = alignment.columns(1..4);
        assert_eq!(slice.width(), 3);
        assert_eq!(slice.records()[0].seq, b"CGT".to_vec());
        assert_eq!(slice.records()[1].seq, b"-GT".to_vec());
        assert_eq!(alignment.width(), 6);
    }

    #[test]
    fn columns_clamp_past_the_end() {
        let slice = sample().columns(4..20);
        assert_eq!(slice.width(), 2);
        assert_eq!(slice.records()[0].seq, b"AC".to_vec());
        assert_eq!(sample().columns(10..20).width(), 0);
    }

    #[test]
    fn sanitize_replaces_tree_delimiters() {
        let mut alignment = Alignment::new(vec![SeqRecord::new("a b,(c):d;'e'", "A")]).unwrap();
        alignment.sanitize_ids();
        assert_eq!(alignment.records()[0].id, "a_b__c__d__e_");
    }
}
