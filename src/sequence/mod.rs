//! Sequence classification and residue-level transforms.
//!
//! [`SequenceType`] maps each category to two symbol tables: the full
//! alphabet used by the classifier and the ambiguous subset used by the
//! [`AmbiguityFilter`]. Both checks are a table lookup plus a membership test.

mod alphabet;
mod ambiguity;
mod classify;
mod complement;

pub use alphabet::{
    SymbolSet, AMINO_ACID_ALPHABET, AMINO_ACID_AMBIGUOUS, NUCLEOTIDE_ALPHABET,
    NUCLEOTIDE_AMBIGUOUS, OTHER_AMBIGUOUS,
};
pub use ambiguity::{AmbiguityFilter, FilteredFragment};
pub use classify::{classify_alignment, classify_sequence};
pub use complement::{complement, reverse_complement};

use std::fmt;

/// Alphabet category inferred for an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SequenceType {
    /// DNA or RNA.
    Nucleotide,
    /// Protein.
    AminoAcid,
    /// Anything else (morphological data, binary characters, ...).
    Other,
}

impl SequenceType {
    /// Categories tried by the classifier, in priority order. `Other` is the
    /// fallback and has no alphabet of its own.
    pub const CLASSIFICATION_ORDER: [SequenceType; 2] =
        [SequenceType::Nucleotide, SequenceType::AminoAcid];

    /// Full alphabet of the category, `None` for [`SequenceType::Other`].
    pub fn alphabet(self) -> Option<&'static SymbolSet> {
        match self {
            SequenceType::Nucleotide => Some(&NUCLEOTIDE_ALPHABET),
            SequenceType::AminoAcid => Some(&AMINO_ACID_ALPHABET),
            SequenceType::Other => None,
        }
    }

    /// Symbols that carry no residue information in this category.
    pub fn ambiguous_symbols(self) -> &'static SymbolSet {
        match self {
            SequenceType::Nucleotide => &NUCLEOTIDE_AMBIGUOUS,
            SequenceType::AminoAcid => &AMINO_ACID_AMBIGUOUS,
            SequenceType::Other => &OTHER_AMBIGUOUS,
        }
    }

    /// Lowercase label used in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            SequenceType::Nucleotide => "nucleotide",
            SequenceType::AminoAcid => "amino acid",
            SequenceType::Other => "other",
        }
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
