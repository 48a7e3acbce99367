//! CLI administration tool for shortlink-api.
//!
//! Works against the cluster in the current kubeconfig context (or the
//! in-cluster service account) without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Print the ShortLink CustomResourceDefinition
//! cargo run --bin shortlink-admin -- crd > shortlink-crd.json
//! kubectl apply -f shortlink-crd.json
//!
//! # List shortlinks
//! cargo run --bin shortlink-admin -- list --namespace links
//!
//! # Check API server connectivity
//! cargo run --bin shortlink-admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `NAMESPACE` (optional): namespace used when `--namespace` is not given

use shortlink_api::domain::repositories::ShortlinkRepository;
use shortlink_api::infrastructure::kubernetes::{KubeShortlinkRepository, ShortLinkResource};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use kube::CustomResourceExt;

/// CLI tool for managing shortlinks.
#[derive(Parser)]
#[command(name = "shortlink-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Namespace holding the ShortLink resources
    #[arg(short, long, global = true, env = "NAMESPACE")]
    namespace: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ShortLink CustomResourceDefinition as JSON
    Crd,

    /// List shortlinks
    List,

    /// Check API server connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Crd => print_crd()?,
        Commands::List => {
            let repo = connect(cli.namespace.as_deref()).await?;
            list_shortlinks(&repo).await?;
        }
        Commands::Check => {
            let repo = connect(cli.namespace.as_deref()).await?;
            check_connection(&repo).await?;
        }
    }

    Ok(())
}

async fn connect(namespace: Option<&str>) -> Result<KubeShortlinkRepository> {
    let client = kube::Client::try_default()
        .await
        .context("Failed to create Kubernetes client")?;

    Ok(match namespace.filter(|ns| !ns.is_empty()) {
        Some(ns) => KubeShortlinkRepository::new(client, ns),
        None => KubeShortlinkRepository::default_namespaced(client),
    })
}

/// Writes the CRD to stdout so it can be piped into `kubectl apply`.
fn print_crd() -> Result<()> {
    let crd = serde_json::to_string_pretty(&ShortLinkResource::crd())
        .context("Failed to serialize CustomResourceDefinition")?;
    println!("{}", crd);
    Ok(())
}

/// Lists shortlinks with their redirect settings and hit counts.
///
/// # Output Format
///
/// ```text
/// 🔗 Shortlinks
///
///   home: https://example.com (307, 12 hits)
///   docs: https://docs.rs (308, 0 hits)
///
///   Total: 2
/// ```
async fn list_shortlinks(repo: &KubeShortlinkRepository) -> Result<()> {
    println!("{}", "🔗 Shortlinks".bright_blue().bold());
    println!();

    let shortlinks = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list shortlinks: {}", e))?;

    if shortlinks.is_empty() {
        println!("{}", "  No shortlinks found".yellow());
        return Ok(());
    }

    for shortlink in &shortlinks {
        println!(
            "  {}: {} {}",
            shortlink.name.cyan(),
            shortlink.spec.target,
            format!(
                "({}, {} hits)",
                shortlink.spec.code, shortlink.status.count
            )
            .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        shortlinks.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn check_connection(repo: &KubeShortlinkRepository) -> Result<()> {
    println!("{}", "🔍 Checking API server connection...".bright_blue());

    match repo.ping().await {
        Ok(()) => {
            println!("{}", "✅ ShortLink resources are reachable".green().bold());
            Ok(())
        }
        Err(e) => {
            println!("{}", "❌ ShortLink resources are not reachable".red().bold());
            Err(anyhow::anyhow!("{}", e))
        }
    }
}
