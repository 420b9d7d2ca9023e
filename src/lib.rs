//! # Sliding-window splitting of multiple sequence alignments
//!
//! This library partitions an alignment into sub-alignments ("windows") and
//! writes one FASTA file per window, ready for per-window tree inference.
//!
//! ## Pipeline
//!
//! 1. **Window generation**: regular windows from a window and step size, or
//!    explicit ranges from a `start,end[,name]` file
//! 2. **Classification**: the first row decides between nucleotide, amino
//!    acid and other data
//! 3. **Slicing**: each window's columns are copied out, reverse complemented
//!    for inverted nucleotide ranges
//! 4. **Filtering**: rows made only of gaps and unknown symbols are dropped
//!    per window
//!
//! Windows flow through these stages one at a time.
//!
//! ## Usage Example
//!
//! ```no_run
//! use msa_windows::{SplitConfig, WindowSplitter};
//! use msa_windows::alignment::io::read_alignment;
//!
//! let (mut alignment, _format) = read_alignment("input.fasta", None)?;
//! alignment.sanitize_ids();
//!
//! let splitter = WindowSplitter::new(SplitConfig::regular(300, 25))?;
//! let report = splitter.run_to_directory(&alignment, "windows")?;
//! println!("{} windows of {} data", report.windows_written(), report.sequence_type);
//! # Ok::<(), msa_windows::WindowError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod alignment; // Alignment matrix, slicing and file formats
pub mod config;    // Run configuration
pub mod error;     // Error types
pub mod pipeline;  // Lazy window pipeline and sinks
pub mod sequence;  // Classification, ambiguity filtering, complements
pub mod window;    // Window geometry

// Re-exports for convenience
pub use alignment::{Alignment, AlignmentError, SeqRecord, WindowSlicer};
pub use config::{SplitConfig, WindowSource};
pub use error::{Result, WindowError};
pub use pipeline::{FastaDirectorySink, WindowFragment, WindowLog, WindowPipeline, WindowSink};
pub use sequence::{AmbiguityFilter, SequenceType};
pub use window::{RangeSet, RegularWindows, WindowSpec, Windows};

use std::path::Path;

use tracing::{debug, info, warn};

use alignment::io::{read_alignment, AlignmentFormat};
use sequence::classify_alignment;

/// Windowing orchestrator.
///
/// Classifies the alignment, builds the window stream from the configured
/// source and drives fragments into a sink in generation order.
#[derive(Debug, Clone)]
pub struct WindowSplitter {
    config: SplitConfig,
}

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct SplitReport {
    /// Category inferred from the first row.
    pub sequence_type: SequenceType,
    /// Window and removed-sequence tables.
    pub log: WindowLog,
}

impl SplitReport {
    /// Number of windows handed to the sink.
    pub fn windows_written(&self) -> usize {
        self.log.window_count()
    }
}

impl WindowSplitter {
    /// Create a splitter, rejecting invalid window parameters.
    pub fn new(config: SplitConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &SplitConfig {
        &self.config
    }

    /// Lazy fragment stream over `alignment`.
    ///
    /// Range files are read and validated here, before any fragment exists.
    pub fn pipeline<'a>(&self, alignment: &'a Alignment) -> Result<WindowPipeline<'a, Windows>> {
        self.build_pipeline(alignment, classify_alignment(alignment))
    }

    /// Run every window into `sink`.
    ///
    /// Stops at the first sink error; windows already written stay written.
    pub fn run<S: WindowSink>(&self, alignment: &Alignment, sink: &mut S) -> Result<SplitReport> {
        let sequence_type = classify_alignment(alignment);
        let pipeline = self.build_pipeline(alignment, sequence_type)?;
        self.drive(pipeline, sequence_type, sink)
    }

    /// Run every window into FASTA files under `directory`, then write the
    /// log tables there.
    pub fn run_to_directory(
        &self,
        alignment: &Alignment,
        directory: impl AsRef<Path>,
    ) -> Result<SplitReport> {
        let directory = directory.as_ref();
        let sequence_type = classify_alignment(alignment);
        let pipeline = self.build_pipeline(alignment, sequence_type)?;

        let mut sink = FastaDirectorySink::new(directory, self.config.force)?;
        let report = self.drive(pipeline, sequence_type, &mut sink)?;
        report
            .log
            .write_to(directory, self.config.write_window_log)?;
        Ok(report)
    }

    fn build_pipeline<'a>(
        &self,
        alignment: &'a Alignment,
        sequence_type: SequenceType,
    ) -> Result<WindowPipeline<'a, Windows>> {
        let windows = self.config.source.windows(alignment.width())?;
        let filter = (!self.config.keep_ambiguous).then(|| AmbiguityFilter::new(sequence_type));
        Ok(WindowPipeline::new(
            windows,
            WindowSlicer::new(alignment, sequence_type),
            filter,
        ))
    }

    fn drive<S: WindowSink>(
        &self,
        pipeline: WindowPipeline<'_, Windows>,
        sequence_type: SequenceType,
        sink: &mut S,
    ) -> Result<SplitReport> {
        info!(
            %sequence_type,
            windows = pipeline.size_hint().0,
            "splitting alignment"
        );

        let mut log = WindowLog::new();
        for fragment in pipeline {
            let window = &fragment.window;
            debug!(
                index = window.index(),
                start = window.start(),
                end = window.end(),
                name = window.name(),
                reverse_complement = window.reverse_complement(),
                "window"
            );
            if !fragment.removed.is_empty() {
                debug!(
                    window = window.name(),
                    removed = %fragment.removed.join(","),
                    "dropped fully ambiguous sequences"
                );
            }
            if fragment.alignment.is_empty() {
                warn!(window = window.name(), "every sequence in the window is ambiguous");
            }

            log.record_window(window);
            sink.write_window(&fragment)?;
            log.record_removed(window.name(), &fragment.removed);
        }

        info!(windows = log.window_count(), "finished writing windows");
        Ok(SplitReport { sequence_type, log })
    }
}

/// Read `input`, sanitize its identifiers and split it into `output_directory`.
pub fn split_file(
    input: impl AsRef<Path>,
    format: Option<AlignmentFormat>,
    output_directory: impl AsRef<Path>,
    config: SplitConfig,
) -> Result<SplitReport> {
    let splitter = WindowSplitter::new(config)?;
    let (mut alignment, format) = read_alignment(input.as_ref(), format)?;
    info!(
        input = %input.as_ref().display(),
        %format,
        rows = alignment.num_rows(),
        columns = alignment.width(),
        "loaded alignment"
    );
    alignment.sanitize_ids();
    splitter.run_to_directory(&alignment, output_directory)
}
