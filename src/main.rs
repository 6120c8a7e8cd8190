use clap::Parser;
use invoice_purge::args::Args;
use invoice_purge::{config, logging, presentation};
use invoice_purge_engine::error::EngineError;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = logging::init(&args.behavior.log_level) {
        eprintln!("{e}");
    }

    let config = match config::resolve(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "resolved configuration");

    let format = args.output.format;

    if args.output.list {
        match invoice_purge_engine::list(&config) {
            Ok(files) => finish(presentation::print_listing(&files, format), false),
            Err(e) => engine_failure(&e),
        }
    } else {
        match invoice_purge_engine::run(&config) {
            Ok(report) => {
                let failed = args.behavior.strict && report.has_failures();
                finish(presentation::print_report(&report, format), failed)
            }
            Err(e) => engine_failure(&e),
        }
    }
}

fn finish(printed: invoice_purge::error::Result<()>, failed: bool) -> ExitCode {
    if let Err(e) = printed {
        eprintln!("Output Error: {e}");
        return ExitCode::FAILURE;
    }
    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

/// Nothing to do is not a failure; anything else is.
fn engine_failure(e: &EngineError) -> ExitCode {
    match e {
        EngineError::SourceMissing(_) | EngineError::NoMatches { .. } => {
            eprintln!("{e}");
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
