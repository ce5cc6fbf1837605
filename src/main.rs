/*!
 * Command-line interface for treescript
 */

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use treescript::config::{Args, Config};
use treescript::report::Reporter;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
                print!("{e}");
                return ExitCode::SUCCESS;
            }
            eprint!("{e}");
            show_usage();
            return ExitCode::FAILURE;
        }
    };

    let config = Config::from_args(args);
    init_logging(config.verbose);

    let progress = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos} files")
    {
        progress.set_style(style);
    }
    progress.set_prefix("📂 Scanning");
    progress.enable_steady_tick(Duration::from_millis(100));

    let result = treescript::replicate(&config, Arc::new(progress.clone()));
    progress.finish_and_clear();

    match result {
        Ok(report) => {
            Reporter::new().print_report(&report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if e.is_invocation_error() {
                show_usage();
            }
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn show_usage() {
    eprintln!("\n{}", Args::command().render_long_help());
}
