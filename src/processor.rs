//! Core processing engine
//!
//! Reads the whole line stream, applies the selected tool and writes the
//! result. All output is computed before the first write, so a failing run
//! leaves stdout empty.

use anyhow::Context;
use clap::Parser;
use std::io::{self, Read, Write};

use crate::cli::{Args, Command};
use crate::dedup::{collapse_runs, DedupStats};
use crate::error::ToolError;
use crate::fields::FieldSelector;
use crate::input::LineStream;
use crate::matcher::Matcher;
use crate::output::OutputWriter;
use crate::report::{init_logging, print_error_chain, RunStats};
use crate::sorter::sort_lines;

/// Per-invocation configuration for one tool
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessorConfig {
    Grep {
        pattern: String,
        ignore_case: bool,
        invert: bool,
    },
    Sort {
        numeric: bool,
        reverse: bool,
    },
    Uniq {
        count: bool,
    },
    Cut {
        fields: Vec<usize>,
        delimiter: String,
    },
}

impl ProcessorConfig {
    pub fn from_args(args: &Args) -> Self {
        match &args.command {
            Command::Grep {
                pattern,
                ignore_case,
                invert,
            } => Self::Grep {
                pattern: pattern.clone(),
                ignore_case: *ignore_case,
                invert: *invert,
            },
            Command::Sort { reverse, numeric } => Self::Sort {
                numeric: *numeric,
                reverse: *reverse,
            },
            Command::Uniq { count } => Self::Uniq { count: *count },
            Command::Cut { fields, delimiter } => Self::Cut {
                fields: fields.indices().to_vec(),
                delimiter: delimiter.clone(),
            },
        }
    }

    /// Name of the tool this configuration runs
    pub fn name(&self) -> &'static str {
        match self {
            Self::Grep { .. } => "grep",
            Self::Sort { .. } => "sort",
            Self::Uniq { .. } => "uniq",
            Self::Cut { .. } => "cut",
        }
    }
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// Apply the configured tool to a materialized set of lines
    pub fn transform(&self, lines: Vec<String>) -> Result<Vec<String>, ToolError> {
        match &self.config {
            ProcessorConfig::Grep {
                pattern,
                ignore_case,
                invert,
            } => Ok(Matcher::new(pattern, *ignore_case, *invert).apply(lines)),
            ProcessorConfig::Sort { numeric, reverse } => sort_lines(lines, *numeric, *reverse),
            ProcessorConfig::Uniq { count } => {
                let runs = collapse_runs(lines);
                let stats = DedupStats::from_runs(&runs);
                log::debug!(
                    "uniq: {} runs, {} adjacent duplicates collapsed",
                    stats.runs,
                    stats.duplicates()
                );
                Ok(runs.iter().map(|run| run.render(*count)).collect())
            }
            ProcessorConfig::Cut { fields, delimiter } => {
                Ok(FieldSelector::new(fields.clone(), delimiter).apply(lines))
            }
        }
    }

    /// Read all of `input`, transform it and write the result to `output`
    pub fn process<R: Read, W: Write>(&self, input: R, output: W) -> anyhow::Result<RunStats> {
        let mut stats = RunStats::new();

        log::debug!("Running {:?}", self.config);

        let stream = LineStream::read_from(input).context("failed to read standard input")?;
        stats.bytes_read = stream.bytes_read;
        stats.lines_read = stream.len() as u64;
        log::debug!("Input encoding: {}", stream.encoding.name);

        let lines = self.transform(stream.lines)?;

        let mut writer = OutputWriter::new(output);
        writer
            .write_all_lines(&lines)
            .and_then(|_| writer.flush())
            .context("failed to write output")?;

        stats.lines_written = writer.lines_written();
        stats.bytes_written = writer.bytes_written();
        stats.log_summary(self.config.name());

        Ok(stats)
    }
}

/// Run the tool selected by already-parsed arguments
pub fn execute<R: Read, W: Write>(args: &Args, input: R, output: W) -> anyhow::Result<RunStats> {
    Processor::new(ProcessorConfig::from_args(args)).process(input, output)
}

/// Parse `argv`, run the selected tool against `input`/`output` and return
/// the process exit code
///
/// Usage errors are printed by clap and exit with its code (2, or 0 for
/// `--help`/`--version`); failed runs print the error chain and exit 1.
pub fn run<I, T, R, W>(argv: I, input: R, output: W) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    R: Read,
    W: Write,
{
    let args = match Args::try_parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return e.exit_code();
        }
    };

    init_logging(args.verbose, args.quiet);

    match execute(&args, input, output) {
        Ok(_) => 0,
        Err(e) => {
            if is_broken_pipe(&e) {
                log::debug!("Output closed early, stopping");
            } else {
                print_error_chain(&e);
            }
            exit_code(&e)
        }
    }
}

/// Exit code for a failed run; a closed downstream pipe is not a failure
pub fn exit_code(error: &anyhow::Error) -> i32 {
    if is_broken_pipe(error) {
        0
    } else {
        1
    }
}

fn is_broken_pipe(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}
