use anyhow::Result;
use clap::Parser;
use shortlink_api::config::{self, StoreBackend};
use shortlink_api::{server, telemetry};

/// REST API and redirect server for ShortLink resources.
///
/// Flags override the matching environment variables.
#[derive(Parser)]
#[command(name = "shortlink-api")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// API listener address [env: BIND_ADDRESS]
    #[arg(long)]
    bind_address: Option<String>,

    /// Health probe listener address [env: HEALTH_PROBE_BIND_ADDRESS]
    #[arg(long)]
    health_probe_bind_address: Option<String>,

    /// Shortlink store [env: STORE_BACKEND]
    #[arg(long, value_enum)]
    store: Option<StoreBackend>,

    /// Namespace holding the ShortLink resources [env: NAMESPACE]
    #[arg(long)]
    namespace: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let mut config = config::Config::from_env()?;
    if let Some(address) = args.bind_address {
        config.bind_address = config::normalize_bind_address(&address);
    }
    if let Some(address) = args.health_probe_bind_address {
        config.probe_bind_address = config::normalize_bind_address(&address);
    }
    if let Some(store) = args.store {
        config.store_backend = store;
    }
    if let Some(namespace) = args.namespace.filter(|ns| !ns.is_empty()) {
        config.namespace = Some(namespace);
    }

    telemetry::init(&config.log_level, &config.log_format);

    config.validate()?;
    config.print_summary();

    let repository = server::connect_repository(&config).await?;

    server::run(config, repository).await
}
