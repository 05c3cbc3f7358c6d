use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use wrapwrite::{cli::Cli, runner};

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    // Errors surface as "Error: ..." on stderr with exit status 1
    runner::run()?;

    Ok(())
}
