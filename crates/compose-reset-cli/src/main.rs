use clap::Parser;
use compose_reset_core::runner::Sequencer;

/// Stops the stack and removes its volumes, rebuilds every image without
/// cache, then starts the stack again. Migrations re-apply on the fresh
/// volumes during startup.
#[derive(Parser)]
#[command(
    name = "compose-reset",
    about = "Reset a Docker Compose stack: down -v, rebuild without cache, up",
    version
)]
struct Cli {}

fn main() {
    Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    if let Err(e) = run() {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    Sequencer::new().run_all()?;
    Ok(())
}
