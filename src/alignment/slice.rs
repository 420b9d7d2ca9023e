use crate::alignment::{Alignment, SeqRecord};
use crate::sequence::{reverse_complement, SequenceType};
use crate::window::WindowSpec;

/// Cuts windows out of a source alignment.
#[derive(Debug, Clone, Copy)]
pub struct WindowSlicer<'a> {
    alignment: &'a Alignment,
    sequence_type: SequenceType,
}

impl<'a> WindowSlicer<'a> {
    /// Slicer over `alignment`, whose rows were classified as `sequence_type`.
    pub fn new(alignment: &'a Alignment, sequence_type: SequenceType) -> Self {
        Self {
            alignment,
            sequence_type,
        }
    }

    /// Category used to decide whether inverted windows are complemented.
    pub fn sequence_type(&self) -> SequenceType {
        self.sequence_type
    }

    /// Extract the window's columns from every row.
    ///
    /// Windows from inverted ranges are reverse complemented row by row, but
    /// only for nucleotide alignments; other categories come out forward.
    pub fn slice(&self, window: &WindowSpec) -> Alignment {
        let fragment = self.alignment.columns(window.columns());
        if !(window.reverse_complement() && self.sequence_type == SequenceType::Nucleotide) {
            return fragment;
        }

        let records = fragment
            .into_records()
            .into_iter()
            .map(|record| SeqRecord {
                seq: reverse_complement(&record.seq),
                id: record.id,
            })
            .collect();
        Alignment::from_records_unchecked(records)
    }
}
