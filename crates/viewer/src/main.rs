#![forbid(unsafe_code)]

mod api;
mod build_info;
mod config;
mod http;
mod server;

use clap::Parser;
use config::{Cli, DEFAULT_LOG_FILTER, LogFormat};
use sb_core::board::BoardSession;
use sb_storage::SolutionStore;
use std::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);
    cli.validate()?;

    let store = match cli.seed.as_deref() {
        Some(path) => SolutionStore::load(path)?,
        None => SolutionStore::open_default()?,
    }
    .with_policy(cli.policy());
    let mut board = BoardSession::new(store, cli.session_config())?;

    let listener = TcpListener::bind((cli.host.as_str(), cli.port))?;
    let addr = listener.local_addr()?;
    info!(
        %addr,
        fingerprint = %build_info::build_fingerprint(),
        policy = cli.policy().as_str(),
        "solution board viewer listening"
    );
    // Machine-readable readiness line for scripts that start the viewer on port 0.
    println!("listening on http://{addr}");

    server::run_viewer(listener, &mut board)?;
    Ok(())
}
