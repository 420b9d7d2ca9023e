use crate::alignment::{Alignment, AlignmentError, SeqRecord};

/// Parse the `<taxa> <characters>` header line.
pub(super) fn parse_header(line: &str) -> Option<(usize, usize)> {
    let mut fields = line.split_whitespace();
    let taxa = fields.next()?.parse().ok()?;
    let characters = fields.next()?.parse().ok()?;
    Some((taxa, characters))
}

/// Parse a relaxed PHYLIP alignment.
///
/// Names run up to the first whitespace; residues may contain spaces.
/// The interleaved layout is tried first (the first `taxa` lines carry names,
/// later blocks continue the rows in the same order); if that doesn't
/// produce rows of the declared length the sequential layout is used.
pub fn parse_phylip(text: &str) -> Result<Alignment, AlignmentError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines.next().ok_or(AlignmentError::Empty)?;
    let (taxa, characters) = parse_header(header).ok_or_else(|| AlignmentError::Parse {
        line: header_line,
        message: "expected '<taxa> <characters>' header".to_string(),
    })?;
    if taxa == 0 {
        return Err(AlignmentError::Empty);
    }

    let body: Vec<(usize, &str)> = lines.collect();
    if body.len() < taxa {
        return Err(AlignmentError::Parse {
            line: body.last().map(|(line, _)| *line).unwrap_or(header_line),
            message: format!("expected {taxa} taxa, found {}", body.len()),
        });
    }

    let interleaved = parse_interleaved(&body, taxa);
    let records = if interleaved.iter().all(|record| record.len() == characters) {
        interleaved
    } else {
        parse_sequential(&body, taxa, characters)?
    };
    Alignment::new(records)
}

fn split_name(line: &str) -> (String, Vec<u8>) {
    match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name.to_string(), residues(rest)),
        None => (line.to_string(), Vec::new()),
    }
}

fn residues(line: &str) -> Vec<u8> {
    line.bytes().filter(|b| !b.is_ascii_whitespace()).collect()
}

fn parse_interleaved(body: &[(usize, &str)], taxa: usize) -> Vec<SeqRecord> {
    let mut records: Vec<SeqRecord> = body[..taxa]
        .iter()
        .map(|(_, line)| {
            let (name, seq) = split_name(line);
            SeqRecord::new(name, seq)
        })
        .collect();
    for (offset, (_, line)) in body[taxa..].iter().enumerate() {
        records[offset % taxa].seq.extend(residues(line));
    }
    records
}

fn parse_sequential(
    body: &[(usize, &str)],
    taxa: usize,
    characters: usize,
) -> Result<Vec<SeqRecord>, AlignmentError> {
    let mut lines = body.iter();
    let mut records = Vec::with_capacity(taxa);

    for _ in 0..taxa {
        let (line_no, line) = lines.next().ok_or_else(|| AlignmentError::Parse {
            line: body.last().map(|(line, _)| *line).unwrap_or(0),
            message: format!("expected {taxa} taxa, found {}", records.len()),
        })?;
        let (name, mut seq) = split_name(line);
        let mut last_line = *line_no;
        while seq.len() < characters {
            let (line_no, line) = lines.next().ok_or_else(|| AlignmentError::Parse {
                line: last_line,
                message: format!(
                    "sequence '{name}' ends after {} of {characters} characters",
                    seq.len()
                ),
            })?;
            seq.extend(residues(line));
            last_line = *line_no;
        }
        if seq.len() > characters {
            return Err(AlignmentError::Parse {
                line: last_line,
                message: format!(
                    "sequence '{name}' has {} characters, header declares {characters}",
                    seq.len()
                ),
            });
        }
        records.push(SeqRecord::new(name, seq));
    }

    if let Some((line_no, _)) = lines.next() {
        return Err(AlignmentError::Parse {
            line: *line_no,
            message: format!("unexpected data after {taxa} taxa"),
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_single_line() {
        let alignment = parse_phylip("2 6\nhuman ACGTAC\nchimp ACG-AC\n").unwrap();
        assert_eq!(alignment.num_rows(), 2);
        assert_eq!(alignment.records()[1].id, "chimp");
        assert_eq!(alignment.records()[1].seq, b"ACG-AC".to_vec());
    }

    #[test]
    fn interleaved_blocks() {
        let text = " 2 8\nhuman ACGT\nchimp ACG-\n\nAC GT\nTTTT\n";
        let alignment = parse_phylip(text).unwrap();
        assert_eq!(alignment.records()[0].seq, b"ACGTACGT".to_vec());
        assert_eq!(alignment.records()[1].seq, b"ACG-TTTT".to_vec());
    }

    #[test]
    fn sequential_wrapped() {
        let text = "2 8\nhuman ACGT\nACGT\nchimp ACG-\nTTTT\n";
        let alignment = parse_phylip(text).unwrap();
        assert_eq!(alignment.records()[0].seq, b"ACGTACGT".to_vec());
        assert_eq!(alignment.records()[1].id, "chimp");
        assert_eq!(alignment.records()[1].seq, b"ACG-TTTT".to_vec());
    }

    #[test]
    fn truncated_sequence_is_reported() {
        let err = parse_phylip("2 8\nhuman ACGT\nchimp ACG-\n").unwrap_err();
        assert!(matches!(err, AlignmentError::Parse { .. }));
    }

    #[test]
    fn missing_taxa_are_reported() {
        let err = parse_phylip("3 4\nhuman ACGT\n").unwrap_err();
        assert!(err.to_string().contains("expected 3 taxa"));
    }
}
