use crate::alignment::Alignment;
use crate::sequence::SequenceType;

/// Classify one sequence by the characters it contains.
///
/// The nucleotide alphabet is tried first, so a sequence made only of
/// symbols shared by both alphabets (`N`, gaps, `?`) is a nucleotide.
pub fn classify_sequence(sequence: &[u8]) -> SequenceType {
    SequenceType::CLASSIFICATION_ORDER
        .into_iter()
        .find(|kind| {
            kind.alphabet()
                .is_some_and(|alphabet| alphabet.contains_all(sequence))
        })
        .unwrap_or(SequenceType::Other)
}

/// Classify an alignment from its first row.
///
/// An alignment without rows classifies like an empty sequence.
pub fn classify_alignment(alignment: &Alignment) -> SequenceType {
    let sample = alignment.first().map(|record| record.seq.as_slice());
    classify_sequence(sample.unwrap_or_default())
}
