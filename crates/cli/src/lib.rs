// crates/cli/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod args;
pub mod config;
pub mod error;
pub mod options;
pub mod parsers;
pub mod presentation;

use std::io::Read;
use std::path::{Path, PathBuf};

use concentric_engine::config::Config;
use concentric_engine::error::EngineError;
use concentric_engine::filesystem;

use crate::args::Args;
use crate::error::{AppError, Result};
use crate::options::OutputFormat;
use crate::presentation::Report;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One thing to sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Stdin => "-".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Inputs named on the command line, in order.
#[must_use]
pub fn inputs(args: &Args) -> Vec<Input> {
    if args.paths.is_empty() {
        return vec![Input::Stdin];
    }
    args.paths
        .iter()
        .map(|p| {
            if p.as_os_str() == "-" {
                Input::Stdin
            } else {
                Input::File(p.clone())
            }
        })
        .collect()
}

/// Sort every input and print the results.
///
/// Every input is processed before anything is printed, so a failing input
/// produces no partial output.
///
/// # Errors
/// Returns the first read, sort or write failure.
pub fn run(args: &Args, config: &Config) -> Result<()> {
    let reports = inputs(args)
        .iter()
        .map(|input| process_input(input, config, args.output.write))
        .collect::<Result<Vec<_>>>()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match args.output.format {
        OutputFormat::Text => presentation::print_text(&mut out, &reports),
        OutputFormat::Json => presentation::print_json(&mut out, &reports),
    }
}

/// Sort one input; with `write`, files are replaced atomically when changed.
///
/// # Errors
/// Fails on I/O errors, an out-of-range `--lines`, or a strict-mode violation.
pub fn process_input(input: &Input, config: &Config, write: bool) -> Result<Report> {
    let original = match input {
        Input::Stdin => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
        Input::File(path) => filesystem::read_to_string(path)?,
    };

    let result = concentric_engine::run(config, &original).map_err(|e| with_input(e, input))?;
    let changed = result.changed(&original);

    let written = match input {
        Input::File(path) if write => {
            if changed {
                write_back(path, &result.text)?;
            }
            true
        }
        Input::Stdin if write => {
            log::warn!("--write has no effect on stdin; printing instead");
            false
        }
        _ => false,
    };

    let report = Report {
        input: input.name(),
        changed,
        written,
        stats: result.stats,
        text: (!written).then_some(result.text),
    };
    if written {
        log::info!("{}", presentation::summary_line(&report));
    }
    Ok(report)
}

fn write_back(path: &Path, text: &str) -> Result<()> {
    filesystem::atomic_write(path, text.as_bytes())?;
    log::debug!("rewrote {}", path.display());
    Ok(())
}

fn with_input(err: EngineError, input: &Input) -> AppError {
    match err {
        EngineError::InvalidRange {
            start,
            end,
            line_count,
        } => AppError::RangeOutsideInput {
            input: input.name(),
            start: start + 1,
            end: end + 1,
            line_count,
        },
        other => AppError::Engine(other),
    }
}
