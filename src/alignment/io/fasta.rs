use std::io::{self, Read, Write};

use bio::io::fasta;

use crate::alignment::{Alignment, AlignmentError, SeqRecord};

/// Parse FASTA records into an alignment.
///
/// The identifier is the first word of each header line.
pub fn parse_fasta<R: Read>(reader: R) -> Result<Alignment, AlignmentError> {
    let mut records = Vec::new();
    for record in fasta::Reader::new(reader).records() {
        let record = record?;
        records.push(SeqRecord::new(record.id(), record.seq()));
    }
    if records.is_empty() {
        return Err(AlignmentError::Empty);
    }
    Alignment::new(records)
}

/// Write `alignment` as two-line FASTA (one unwrapped sequence line per row).
pub fn write_fasta<W: Write>(writer: W, alignment: &Alignment) -> io::Result<()> {
    let mut writer = fasta::Writer::new(writer);
    for record in alignment {
        writer.write(&record.id, None, &record.seq)?;
    }
    writer.flush()
}
