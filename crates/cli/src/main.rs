use clap::Parser;
use concentric_cli::args::{Args, OutputOptions};
use concentric_cli::config::build_config;
use log::LevelFilter;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    init_logger(&args.output);

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match concentric_cli::run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` wins over `-v`/`-q` when set.
fn init_logger(output: &OutputOptions) {
    let level = if output.quiet {
        LevelFilter::Error
    } else {
        match output.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
