use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use csv::{Terminator, WriterBuilder};

use crate::window::{WindowSpec, WINDOW_TABLE_HEADER};

/// File name of the window geometry table.
pub const WINDOWS_LOG: &str = "windows.log";
/// File name of the removed-sequences table.
pub const REMOVED_SEQUENCES_LOG: &str = "removed_sequences.log";

/// Window table and removed-sequence table collected during a run.
#[derive(Debug, Clone, Default)]
pub struct WindowLog {
    windows: Vec<WindowSpec>,
    removed: Vec<(String, Vec<String>)>,
}

fn table_writer<W: Write>(writer: W) -> csv::Writer<W> {
    WriterBuilder::new()
        .delimiter(b'\t')
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer)
}

impl WindowLog {
    /// Empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `window` to the window table.
    pub fn record_window(&mut self, window: &WindowSpec) {
        self.windows.push(window.clone());
    }

    /// Note the identifiers dropped from the window called `name`.
    ///
    /// Empty lists are ignored. A repeated name replaces the earlier entry
    /// but keeps its position.
    pub fn record_removed(&mut self, name: &str, ids: &[String]) {
        if ids.is_empty() {
            return;
        }
        match self.removed.iter_mut().find(|(window, _)| window == name) {
            Some((_, existing)) => *existing = ids.to_vec(),
            None => self.removed.push((name.to_string(), ids.to_vec())),
        }
    }

    /// Number of windows recorded.
    pub fn window_count(&self) -> usize {
        self.windows.len()
    }

    /// Window name → dropped identifiers, in first-seen order.
    pub fn removed(&self) -> &[(String, Vec<String>)] {
        &self.removed
    }

    /// Whether any window dropped sequences.
    pub fn has_removed(&self) -> bool {
        !self.removed.is_empty()
    }

    /// Header plus one tab-separated row per window.
    pub fn write_windows<W: Write>(&self, writer: W) -> csv::Result<()> {
        let mut table = table_writer(writer);
        table.write_record(WINDOW_TABLE_HEADER)?;
        for window in &self.windows {
            table.write_record(window.table_row())?;
        }
        table.flush()?;
        Ok(())
    }

    /// `name<TAB>id1,id2,...` per window that dropped sequences.
    pub fn write_removed<W: Write>(&self, writer: W) -> csv::Result<()> {
        let mut table = table_writer(writer);
        for (name, ids) in &self.removed {
            let ids = ids.join(",");
            table.write_record([name.as_str(), ids.as_str()])?;
        }
        table.flush()?;
        Ok(())
    }

    /// Write the tables into `directory`.
    ///
    /// `windows.log` is written only when `include_windows` is set;
    /// `removed_sequences.log` whenever some window dropped sequences.
    pub fn write_to(&self, directory: &Path, include_windows: bool) -> io::Result<()> {
        if include_windows {
            self.write_windows(File::create(directory.join(WINDOWS_LOG))?)?;
        }
        if self.has_removed() {
            self.write_removed(File::create(directory.join(REMOVED_SEQUENCES_LOG))?)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::RegularWindows;

    fn render(write: impl FnOnce(&mut Vec<u8>) -> csv::Result<()>) -> String {
        let mut buffer = Vec::new();
        write(&mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn window_table_has_header_and_rows() {
        let mut log = WindowLog::new();
        for window in RegularWindows::new(10, 25, 60).unwrap() {
            log.record_window(&window);
        }
        assert_eq!(
            render(|out| log.write_windows(out)),
            "count\tstart\tmid\tend\twin_len\tname\n\
             0\t1\t1\t5\t5\t1\n\
             1\t21\t26\t30\t10\t26\n\
             2\t46\t51\t55\t10\t51\n"
        );
    }

    #[test]
    fn removed_table_ignores_empty_lists_and_replaces_duplicates() {
        let mut log = WindowLog::new();
        log.record_removed("1", &["a".to_string(), "b".to_string()]);
        log.record_removed("26", &[]);
        log.record_removed("51", &["c".to_string()]);
        log.record_removed("1", &["d".to_string(), "e".to_string()]);
        assert_eq!(render(|out| log.write_removed(out)), "1\td,e\n51\tc\n");
    }

    #[test]
    fn names_with_tabs_are_quoted() {
        let mut log = WindowLog::new();
        log.record_removed("gene\tA", &["x".to_string()]);
        assert_eq!(render(|out| log.write_removed(out)), "\"gene\tA\"\tx\n");
    }
}
