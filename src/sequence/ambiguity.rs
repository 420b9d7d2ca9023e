use crate::alignment::Alignment;
use crate::sequence::SequenceType;

/// Drops rows that carry no residue information within a window.
#[derive(Debug, Clone, Copy)]
pub struct AmbiguityFilter {
    sequence_type: SequenceType,
}

/// Window fragment after ambiguity filtering.
#[derive(Debug, Clone)]
pub struct FilteredFragment {
    /// Rows that were kept, in their original order.
    pub alignment: Alignment,
    /// Identifiers of the rows that were dropped.
    pub removed: Vec<String>,
}

impl AmbiguityFilter {
    /// Filter for alignments of the given category.
    pub fn new(sequence_type: SequenceType) -> Self {
        Self { sequence_type }
    }

    /// Category the filter applies rules for.
    pub fn sequence_type(&self) -> SequenceType {
        self.sequence_type
    }

    /// Whether every character of `fragment` is ambiguous for the category.
    /// The empty fragment counts as fully ambiguous.
    pub fn is_fully_ambiguous(&self, fragment: &[u8]) -> bool {
        self.sequence_type.ambiguous_symbols().contains_all(fragment)
    }

    /// Split a window fragment into kept rows and dropped identifiers.
    pub fn apply(&self, fragment: Alignment) -> FilteredFragment {
        let (kept, dropped): (Vec<_>, Vec<_>) = fragment
            .into_records()
            .into_iter()
            .partition(|record| !self.is_fully_ambiguous(&record.seq));

        FilteredFragment {
            alignment: Alignment::from_records_unchecked(kept),
            removed: dropped.into_iter().map(|record| record.id).collect(),
        }
    }
}
