use std::ops::Range;

/// Column names of the window table written to `windows.log`.
pub const WINDOW_TABLE_HEADER: [&str; 6] = ["count", "start", "mid", "end", "win_len", "name"];

/// One alignment window.
///
/// Coordinates are 0-based and half-open (`[start, end)`). A spec is built
/// once by a generator and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WindowSpec {
    index: usize,
    start: usize,
    end: usize,
    mid: usize,
    name: String,
    reverse_complement: bool,
}

impl WindowSpec {
    /// Build a window, normalizing an inverted interval.
    ///
    /// When `start > end` the bounds are swapped and the window is flagged for
    /// reverse complementation. `mid` and the default name are taken as given,
    /// so they still reflect the original ordering.
    pub(crate) fn new(
        index: usize,
        start: usize,
        end: usize,
        mid: usize,
        name: Option<String>,
    ) -> Self {
        let (start, end, reverse_complement) = if start > end {
            (end, start, true)
        } else {
            (start, end, false)
        };
        let name = name.unwrap_or_else(|| (mid + 1).to_string());

        Self {
            index,
            start,
            end,
            mid,
            name,
            reverse_complement,
        }
    }

    /// Clip the window to the first `alignment_length` columns.
    ///
    /// `mid`, the name and the reverse complement flag are kept as they were
    /// derived from the untruncated bounds.
    pub(crate) fn truncated(mut self, alignment_length: usize) -> Self {
        self.end = self.end.min(alignment_length);
        self.start = self.start.min(self.end);
        self
    }

    /// Ordinal of the window in generation order (0-based).
    pub fn index(&self) -> usize {
        self.index
    }

    /// First column (inclusive, 0-based).
    pub fn start(&self) -> usize {
        self.start
    }

    /// Last column (exclusive, 0-based).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Reference column used for default naming (0-based).
    pub fn mid(&self) -> usize {
        self.mid
    }

    /// Number of columns covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` when the window covers no columns.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Output base name: a user label or the 1-based midpoint.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the window came from an inverted range.
    pub fn reverse_complement(&self) -> bool {
        self.reverse_complement
    }

    /// Column range covered by the window.
    pub fn columns(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Row of the window table: index, 1-based start and mid, end, length
    /// and name.
    pub fn table_row(&self) -> [String; 6] {
        [
            self.index.to_string(),
            (self.start + 1).to_string(),
            (self.mid + 1).to_string(),
            self.end.to_string(),
            self.len().to_string(),
            self.name.clone(),
        ]
    }
}
