//! Lazy generate → slice → filter pipeline and its output sinks.
//!
//! [`WindowPipeline`] pulls one window at a time from a window stream, cuts
//! it out of the source alignment and applies the ambiguity filter, so only
//! one fragment is alive at once.

mod log;
mod sink;

pub use log::{WindowLog, REMOVED_SEQUENCES_LOG, WINDOWS_LOG};
pub use sink::{FastaDirectorySink, MemorySink, WindowSink};

use crate::alignment::{Alignment, WindowSlicer};
use crate::sequence::{AmbiguityFilter, FilteredFragment};
use crate::window::WindowSpec;

/// One processed window, ready for a sink.
#[derive(Debug, Clone)]
pub struct WindowFragment {
    /// Window geometry.
    pub window: WindowSpec,
    /// Sliced (and possibly filtered) rows.
    pub alignment: Alignment,
    /// Identifiers dropped by the ambiguity filter.
    pub removed: Vec<String>,
}

/// Iterator adaptor turning windows into fragments.
#[derive(Debug)]
pub struct WindowPipeline<'a, I> {
    windows: I,
    slicer: WindowSlicer<'a>,
    filter: Option<AmbiguityFilter>,
}

impl<'a, I> WindowPipeline<'a, I>
where
    I: Iterator<Item = WindowSpec>,
{
    /// Pipeline over `windows`. Pass `None` as `filter` to keep every row.
    pub fn new(windows: I, slicer: WindowSlicer<'a>, filter: Option<AmbiguityFilter>) -> Self {
        Self {
            windows,
            slicer,
            filter,
        }
    }

    fn process(&self, window: WindowSpec) -> WindowFragment {
        let fragment = self.slicer.slice(&window);
        let FilteredFragment { alignment, removed } = match &self.filter {
            Some(filter) => filter.apply(fragment),
            None => FilteredFragment {
                alignment: fragment,
                removed: Vec::new(),
            },
        };
        WindowFragment {
            window,
            alignment,
            removed,
        }
    }
}

impl<'a, I> Iterator for WindowPipeline<'a, I>
where
    I: Iterator<Item = WindowSpec>,
{
    type Item = WindowFragment;

    fn next(&mut self) -> Option<WindowFragment> {
        let window = self.windows.next()?;
        Some(self.process(window))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.windows.size_hint()
    }
}
