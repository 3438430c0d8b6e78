use clap::Parser;
use tracing::Level;

mod cli;
mod commands;
mod render;
mod runner;
mod source;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let result = runtime.block_on(commands::run_command(cli));
    // A timed-out comparison keeps its blocking worker busy; do not wait for it.
    runtime.shutdown_background();
    result
}
