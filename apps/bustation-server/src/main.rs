use std::path::PathBuf;

use anyhow::Result;
use api_gateway::ApiGateway;
use auth::AuthModule;
use clap::Parser;
use reservations::ReservationsModule;
use tokio_util::sync::CancellationToken;

mod config;
mod logging;

use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "bustation-server", version, about = "Bus station reservation server")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;

    if cli.print_config {
        print_config(&config);
        return Ok(());
    }

    logging::init(&config.logging, cli.verbose)?;
    run(config).await
}

#[allow(clippy::print_stdout)]
fn print_config(config: &AppConfig) {
    println!("{config:#?}");
}

async fn run(config: AppConfig) -> Result<()> {
    let auth = AuthModule::from_config(&config.auth)?;
    let reservations = ReservationsModule::from_config(&config.reservations);

    let gateway = ApiGateway::new(
        config.api_gateway,
        auth.token_verifier(),
        auth.identity_store(),
    )?
    .with_module(auth.router(), AuthModule::openapi())
    .with_module(reservations.router(), ReservationsModule::openapi());

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("shutdown signal received"),
            Err(e) => tracing::error!(error = %e, "failed to listen for shutdown signal"),
        }
        shutdown.cancel();
    });

    gateway.serve(cancel).await
}
