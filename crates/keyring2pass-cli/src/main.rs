//! keyring2pass entry point.

use clap::Parser;
use keyring2pass_cli::{cancellation_exit_code, run, Cli, CANCELLED_EXIT_CODE};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides -v
    let default_filter = match cli.verbose {
        0 => "keyring2pass=warn",
        1 => "keyring2pass=info",
        _ => "keyring2pass=debug",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    ctrlc::set_handler(|| {
        println!("\nCancelled.");
        std::process::exit(CANCELLED_EXIT_CODE);
    })?;

    // Run the command
    let result = run(cli).await;
    if let Some(code) = cancellation_exit_code(&result) {
        println!("\nCancelled.");
        std::process::exit(code);
    }
    result
}
