use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use msa_windows::alignment::io::AlignmentFormat;
use msa_windows::config::{DEFAULT_STEP_SIZE, DEFAULT_WINDOW_SIZE};
use msa_windows::{split_file, SplitConfig, WindowSource};
use tracing_subscriber::EnvFilter;

/// Split a multiple sequence alignment into sub-alignments using either a
/// sliding window or a CSV file of alignment ranges.
///
/// One FASTA file per window is written to the output directory.
#[derive(Parser, Debug)]
#[command(name = "msa-windows", version)]
struct Cli {
    /// Path to the alignment file.
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// Output directory (created if missing).
    #[arg(short, long, value_name = "DIR")]
    output_directory: PathBuf,

    /// Window size.
    #[arg(short, long, default_value_t = DEFAULT_WINDOW_SIZE)]
    window_size: usize,

    /// Step size; distance between two window centres.
    #[arg(short, long, default_value_t = DEFAULT_STEP_SIZE)]
    step_size: usize,

    /// CSV file of `start,end[,name]` ranges. A start greater than the end
    /// selects the reverse complement of the range for nucleotide data.
    #[arg(long, value_name = "FILE")]
    split_file: Option<PathBuf>,

    /// Treat ranges in `--split-file` as one-based.
    #[arg(short = '1', long = "1-based")]
    one_based: bool,

    /// Keep sequences made only of ambiguous characters.
    #[arg(long)]
    keep_ambiguous: bool,

    /// Overwrite already existing window files.
    #[arg(short, long)]
    force: bool,

    /// Write `windows.log` to the output directory.
    #[arg(short, long)]
    log: bool,

    /// Alignment format; detected from the file when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// More diagnostics on stderr (repeat for trace output).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only report warnings and errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatArg {
    Fasta,
    Phylip,
}

impl From<FormatArg> for AlignmentFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Fasta => AlignmentFormat::Fasta,
            FormatArg::Phylip => AlignmentFormat::Phylip,
        }
    }
}

impl Cli {
    fn split_config(&self) -> SplitConfig {
        let source = match &self.split_file {
            Some(path) => WindowSource::Ranges {
                path: path.clone(),
                one_based: self.one_based,
            },
            None => WindowSource::Regular {
                window_size: self.window_size,
                step_size: self.step_size,
            },
        };
        SplitConfig {
            source,
            keep_ambiguous: self.keep_ambiguous,
            force: self.force,
            write_window_log: self.log,
        }
    }

    fn default_level(&self) -> &'static str {
        match (self.quiet, self.verbose) {
            (true, _) => "warn",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        }
    }
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.default_level());

    let report = split_file(
        &cli.input,
        cli.format.map(AlignmentFormat::from),
        &cli.output_directory,
        cli.split_config(),
    )
    .with_context(|| {
        format!(
            "failed to split {} into {}",
            cli.input.display(),
            cli.output_directory.display()
        )
    })?;

    tracing::info!(
        windows = report.windows_written(),
        sequence_type = %report.sequence_type,
        output = %cli.output_directory.display(),
        "done"
    );
    Ok(())
}
