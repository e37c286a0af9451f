// src/main.rs

use anyhow::Result;
use clap::Parser;
use featlist::cli::{Cli, Commands, ReportArgs};
use featlist::config::ConfigBuilder;
use featlist::errors::Error;
use featlist::pipeline::Pipeline;
#[cfg(feature = "progress")]
use featlist::progress::IndicatifProgress;
use featlist::progress::ProgressReporter;
use featlist::run;
use featlist::signal::setup_signal_handler;

#[cfg(feature = "web")]
use featlist::web;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    let default_directive = if cfg!(debug_assertions) {
        "featlist=debug"
    } else {
        "featlist=info"
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_directive.parse()?),
        )
        .init();

    log::info!("Starting featlist v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::List(args) => run_report(args, Pipeline::FeatureList),
        Commands::Indent(args) => run_report(args, Pipeline::IndentationCheck),
        #[cfg(feature = "web")]
        Commands::Serve(args) => {
            let config = match ConfigBuilder::from_cli(args.scan, None).build() {
                Err(Error::NoScanRoot) => {
                    eprintln!("{}", Error::NoScanRoot);
                    return Ok(());
                }
                other => other?,
            };
            let rt = tokio::runtime::Runtime::new()?;
            return rt.block_on(web::start_server(config, args.port, !args.no_open));
        }
    };

    // --- Error Handling ---
    if let Err(e) = result {
        match e {
            Error::NoScanRoot => {
                eprintln!("{}", e);
                return Ok(());
            }
            Error::Interrupted => {
                eprintln!("\nOperation cancelled.");
                std::process::exit(130);
            }
            Error::NoFilesFound => {
                eprintln!("featlist: No .feature files found under the selected directory.");
                return Ok(());
            }
            _ => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

fn run_report(args: ReportArgs, pipeline: Pipeline) -> featlist::errors::Result<()> {
    let config = ConfigBuilder::from_cli(args.scan, Some(args.output)).build()?;
    log::debug!("Configuration built successfully.");

    let token = setup_signal_handler().map_err(|e| Error::Signal(format!("{:#}", e)))?;
    let progress = progress_reporter();

    let report = run(&config, pipeline, &token, progress.as_deref())?;
    log::info!("{} finished: {} files", pipeline, report.file_count());
    Ok(())
}

/// Shows a progress bar if stderr is a TTY.
fn progress_reporter() -> Option<Box<dyn ProgressReporter>> {
    #[cfg(feature = "progress")]
    {
        if atty::is(atty::Stream::Stderr) {
            return Some(Box::new(IndicatifProgress::new()));
        }
    }
    None
}
