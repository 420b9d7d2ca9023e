//! Window geometry: the [`WindowSpec`] entity and the two ways of producing
//! an ordered stream of windows.
//!
//! Regular mode slides a fixed-size window along the alignment; range mode
//! reads explicit `start,end[,name]` records. Both are lazy iterators and
//! assign dense 0-based indices in generation order.

mod ranges;
mod regular;
mod spec;

pub use ranges::{RangeRecord, RangeSet, RangeWindows};
pub use regular::RegularWindows;
pub use spec::{WindowSpec, WINDOW_TABLE_HEADER};

pub(crate) use regular::validate_parameters;

/// Window stream from either generation mode.
#[derive(Debug)]
pub enum Windows {
    /// Sliding windows.
    Regular(RegularWindows),
    /// Explicit ranges.
    Ranges(RangeWindows),
}

impl Iterator for Windows {
    type Item = WindowSpec;

    fn next(&mut self) -> Option<WindowSpec> {
        match self {
            Windows::Regular(windows) => windows.next(),
            Windows::Ranges(windows) => windows.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Windows::Regular(windows) => windows.size_hint(),
            Windows::Ranges(windows) => windows.size_hint(),
        }
    }
}

impl From<RegularWindows> for Windows {
    fn from(windows: RegularWindows) -> Self {
        Windows::Regular(windows)
    }
}

impl From<RangeWindows> for Windows {
    fn from(windows: RangeWindows) -> Self {
        Windows::Ranges(windows)
    }
}
