use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use employee_payroll::api::{create_router, AppState};
use employee_payroll::config::ConfigLoader;

#[derive(Parser, Debug)]
#[command(name = "employee-payroll", version, about = "Employee roster and payroll service")]
struct Cli {
    /// Configuration directory holding payroll.yaml and employees.yaml.
    /// Built-in rates and an empty roster are used when omitted.
    #[arg(long, value_name = "DIR")]
    config: Option<PathBuf>,
    #[arg(long, default_value = "0.0.0.0")]
    host: IpAddr,
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

fn init_tracing() -> Result<()> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(filter)?)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(dir) => ConfigLoader::load(dir)
            .with_context(|| format!("loading configuration from {}", dir.display()))?,
        None => ConfigLoader::builtin(),
    };
    info!(
        payroll = %config.settings().name,
        currency = %config.settings().currency,
        seed_employees = config.roster().len(),
        "Configuration loaded"
    );

    let state = AppState::from_config(&config)?;
    let router = create_router(state);

    let addr = SocketAddr::new(cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!(%addr, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
