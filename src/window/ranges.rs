use std::fs;
use std::path::{Path, PathBuf};

use csv::{ErrorKind, ReaderBuilder, Trim};

use crate::error::{Result, WindowError};
use crate::window::WindowSpec;

/// One `start,end[,name]` line of a range file, as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeRecord {
    /// Start coordinate as supplied.
    pub start: i64,
    /// End coordinate as supplied.
    pub end: i64,
    /// Optional window label from the third column.
    pub name: Option<String>,
    /// 1-based line number in the source file.
    pub line: usize,
}

impl RangeRecord {
    /// Convert to 0-based half-open coordinates.
    ///
    /// One-based input only shifts the start: a 1-based inclusive end is
    /// already the exclusive end in 0-based form.
    pub fn normalized(&self, one_based: bool) -> (i64, i64) {
        if one_based {
            (self.start - 1, self.end)
        } else {
            (self.start, self.end)
        }
    }
}

/// Parsed, validated contents of a range file.
#[derive(Debug, Clone)]
pub struct RangeSet {
    source: PathBuf,
    records: Vec<RangeRecord>,
}

impl RangeSet {
    /// Read and validate a comma-separated range file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| {
            WindowError::malformed_ranges(path, format!("cannot be read: {err}"))
        })?;
        Self::parse(&text, path)
    }

    /// Parse range records from `text`; `source` is used in error messages.
    ///
    /// Every record must have the column count of the first one, and the first
    /// two columns must be integers. Fields are trimmed, may be quoted, and
    /// empty lines are skipped.
    pub fn parse(text: &str, source: impl Into<PathBuf>) -> Result<Self> {
        let source = source.into();
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .flexible(false)
            .from_reader(text.as_bytes());

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|err| csv_error(err, &source))?;
            let line_no = row.position().map_or(records.len() + 1, |pos| pos.line() as usize);
            if row.len() < 2 {
                return Err(WindowError::malformed_ranges(
                    &source,
                    "expected at least two columns with start and end positions, \
                     optionally a third with the name of the range",
                ));
            }

            let start = parse_coordinate(&row[0], "start", line_no, &source)?;
            let end = parse_coordinate(&row[1], "end", line_no, &source)?;
            let name = row.get(2).filter(|name| !name.is_empty());
            if let Some(name) = name.filter(|name| name.contains(&['/', '\\'][..])) {
                return Err(WindowError::malformed_ranges(
                    &source,
                    format!("line {line_no}: range name '{name}' contains a path separator"),
                ));
            }

            records.push(RangeRecord {
                start,
                end,
                name: name.map(str::to_string),
                line: line_no,
            });
        }

        if records.is_empty() {
            return Err(WindowError::malformed_ranges(&source, "contains no ranges"));
        }

        Ok(Self { source, records })
    }

    /// File the ranges came from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Records in file order.
    pub fn records(&self) -> &[RangeRecord] {
        &self.records
    }

    /// Number of ranges.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when there are no ranges.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Turn the ranges into windows over an alignment of `alignment_length`
    /// columns.
    ///
    /// All records are checked up front, so a bad coordinate anywhere in the
    /// file fails before the first window is produced. Windows reaching past
    /// the last column are truncated to it.
    pub fn into_windows(self, one_based: bool, alignment_length: usize) -> Result<RangeWindows> {
        for record in &self.records {
            let (start, end) = record.normalized(one_based);
            if start < 0 || end < 0 {
                return Err(WindowError::malformed_ranges(
                    &self.source,
                    format!(
                        "line {}: range {},{} lies before the first column",
                        record.line, record.start, record.end
                    ),
                ));
            }
        }

        Ok(RangeWindows {
            records: self.records.into_iter().enumerate(),
            one_based,
            alignment_length,
        })
    }
}

fn csv_error(err: csv::Error, source: &Path) -> WindowError {
    let reason = match err.kind() {
        ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => {
            let line = pos.as_ref().map_or(0, |pos| pos.line());
            format!("line {line}: expected {expected_len} columns, found {len}")
        }
        _ => err.to_string(),
    };
    WindowError::malformed_ranges(source, reason)
}

fn parse_coordinate(field: &str, label: &str, line_no: usize, source: &Path) -> Result<i64> {
    field.parse::<i64>().map_err(|_| {
        WindowError::malformed_ranges(
            source,
            format!(
                "line {line_no}: {label} '{field}' is not an integer; \
                 the first two columns must be start and end positions"
            ),
        )
    })
}

/// Windows built from explicit ranges, in file order.
#[derive(Debug)]
pub struct RangeWindows {
    records: std::iter::Enumerate<std::vec::IntoIter<RangeRecord>>,
    one_based: bool,
    alignment_length: usize,
}

impl Iterator for RangeWindows {
    type Item = WindowSpec;

    fn next(&mut self) -> Option<WindowSpec> {
        let (index, record) = self.records.next()?;
        let (start, end) = record.normalized(self.one_based);
        // Both bounds were checked non-negative in `into_windows`.
        let (start, end) = (start as usize, end as usize);
        let mid = (start + end) / 2;
        let window = WindowSpec::new(index, start, end, mid, record.name);
        Some(window.truncated(self.alignment_length))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.records.size_hint()
    }
}

impl ExactSizeIterator for RangeWindows {}
