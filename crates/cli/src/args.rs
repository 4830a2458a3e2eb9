// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::Parser;

use concentric_engine::options::{SortAction, UnknownPlacement};

use crate::options::{OutputFormat, Placement};
use crate::parsers::LineRangeArg;

#[derive(Parser, Debug)]
#[command(
    name = "concentric",
    version = crate::VERSION,
    about = "Sort CSS declarations in concentric order"
)]
pub struct Args {
    /// Files to sort (stdin when omitted or `-`)
    pub paths: Vec<PathBuf>,

    #[command(flatten)]
    pub sort: SortOptions,

    #[command(flatten)]
    pub input: InputOptions,

    #[command(flatten)]
    pub output: OutputOptions,
}

/// Ordering and cleanup
#[derive(clap::Args, Debug, Default)]
pub struct SortOptions {
    /// Where properties missing from the order go
    #[arg(long, value_enum, conflicts_with = "unknown_first", help_heading = "Sorting")]
    pub placement: Option<Placement>,

    /// Shorthand for `--placement first`
    #[arg(long, help_heading = "Sorting")]
    pub unknown_first: bool,

    /// Collapse adjacent declarations of the same property (first one wins)
    #[arg(long, visible_alias = "remove-duplicates", help_heading = "Sorting")]
    pub dedup: bool,

    /// Drop blank lines inside the sorted range
    #[arg(long, help_heading = "Sorting")]
    pub filter_blank_lines: bool,

    /// Match property names exactly instead of mapping kebab-case to camelCase
    #[arg(long, help_heading = "Sorting")]
    pub no_normalize: bool,

    /// Fail on lines without a `:` instead of sorting them by their full text
    #[arg(long, help_heading = "Sorting")]
    pub strict: bool,
}

/// Where input and settings come from
#[derive(clap::Args, Debug, Default)]
pub struct InputOptions {
    /// Only sort these lines (1-based, inclusive), e.g. `3:12`
    #[arg(long, value_name = "START:END", help_heading = "Input")]
    pub lines: Option<LineRangeArg>,

    /// Settings file (JSON or YAML, optionally under `sortConcentrically`)
    #[arg(long, value_name = "PATH", help_heading = "Input")]
    pub config: Option<PathBuf>,

    /// Custom order file, one property per line; replaces the built-in order
    #[arg(long, value_name = "PATH", help_heading = "Input")]
    pub order: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct OutputOptions {
    /// Rewrite files in place instead of printing them
    #[arg(short, long, help_heading = "Output")]
    pub write: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// More log output (repeatable)
    #[arg(short, long, action = clap::ArgAction::Count, conflicts_with = "quiet", help_heading = "Output")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, help_heading = "Output")]
    pub quiet: bool,
}

impl SortOptions {
    /// The sort command these flags select, if any was given.
    #[must_use]
    pub fn action(&self) -> Option<SortAction> {
        if self.unknown_first {
            return Some(SortAction::SortUnknownFirst);
        }
        self.placement
            .map(|placement| SortAction::from(UnknownPlacement::from(placement)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let args = Args::try_parse_from(["concentric"]).unwrap();
        assert!(args.paths.is_empty());
        assert_eq!(args.sort.action(), None);
        assert!(!args.sort.dedup);
        assert_eq!(args.output.format, OutputFormat::Text);
    }

    #[test]
    fn placement_conflicts_with_shorthand() {
        let res = Args::try_parse_from(["concentric", "--placement", "last", "--unknown-first"]);
        assert!(res.is_err());
    }

    #[test]
    fn flags_select_a_sort_action() {
        let args = Args::try_parse_from(["concentric", "--unknown-first"]).unwrap();
        assert_eq!(args.sort.action(), Some(SortAction::SortUnknownFirst));

        let args = Args::try_parse_from(["concentric", "--placement", "last"]).unwrap();
        assert_eq!(args.sort.action(), Some(SortAction::Sort));
    }

    #[test]
    fn parses_full_invocation() {
        let args = Args::try_parse_from([
            "concentric",
            "-w",
            "--dedup",
            "--lines",
            "2:8",
            "--format",
            "json",
            "-vv",
            "a.css",
        ])
        .unwrap();
        assert!(args.output.write);
        assert_eq!(args.output.verbose, 2);
        assert_eq!(args.input.lines.map(|r| (r.start, r.end)), Some((2, 8)));
        assert_eq!(args.paths, [PathBuf::from("a.css")]);
    }
}
