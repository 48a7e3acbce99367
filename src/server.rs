//! HTTP server initialization and lifecycle.
//!
//! Two listeners run for the life of the process: the health probe server
//! and the API server. They share the application state and nothing else.
//! On SIGINT or SIGTERM both are told to stop; the API server then has a
//! bounded time to drain in-flight requests.

use crate::config::{Config, StoreBackend};
use crate::domain::repositories::ShortlinkRepository;
use crate::infrastructure::kubernetes::KubeShortlinkRepository;
use crate::infrastructure::persistence::InMemoryShortlinkRepository;
use crate::routes::{app_router, probe_router};
use crate::state::AppState;

use anyhow::{Context, Result};
use std::future::Future;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tokio::task::JoinError;
use tokio::time::timeout;
use tracing::{error, info, warn};

/// Builds the repository selected by `config.store_backend`.
///
/// # Errors
///
/// Returns an error if no Kubernetes client configuration can be found.
pub async fn connect_repository(config: &Config) -> Result<Arc<dyn ShortlinkRepository>> {
    match config.store_backend {
        StoreBackend::Kubernetes => {
            let client = kube::Client::try_default()
                .await
                .context("Failed to create Kubernetes client")?;

            let repository = match &config.namespace {
                Some(namespace) => KubeShortlinkRepository::new(client, namespace),
                None => KubeShortlinkRepository::default_namespaced(client),
            };
            info!("Store: Kubernetes API server");

            Ok(Arc::new(repository))
        }
        StoreBackend::Memory => {
            warn!("Store: in-memory, shortlinks are lost on exit");
            Ok(Arc::new(InMemoryShortlinkRepository::new()))
        }
    }
}

/// Runs both listeners until a termination signal arrives.
///
/// # Errors
///
/// Returns an error if:
/// - a listener cannot bind
/// - either server stops on its own
/// - the API server does not drain within the shutdown timeout
pub async fn run(config: Config, repository: Arc<dyn ShortlinkRepository>) -> Result<()> {
    let probe_listener = TcpListener::bind(&config.probe_bind_address)
        .await
        .with_context(|| format!("Failed to bind probe listener on {}", config.probe_bind_address))?;

    let api_listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind API listener on {}", config.bind_address))?;

    serve(
        api_listener,
        probe_listener,
        AppState::new(repository),
        &config.assets_dir,
        config.shutdown_timeout(),
        shutdown_signal(),
    )
    .await
}

/// Serves the probe and API routers until `shutdown` resolves.
///
/// The probe server is started first. After `shutdown`, both servers stop
/// accepting connections and the API server gets `shutdown_timeout` to
/// finish in-flight requests.
pub async fn serve<F>(
    api_listener: TcpListener,
    probe_listener: TcpListener,
    state: AppState,
    assets_dir: &Path,
    shutdown_timeout: Duration,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()>,
{
    let (stop_tx, stop_rx) = watch::channel(false);

    let probe_app = probe_router(state.clone());
    let probe_stop = stop_rx.clone();
    info!("Serving health probes on http://{}", probe_listener.local_addr()?);
    let mut probe_task = tokio::spawn(async move {
        axum::serve(probe_listener, probe_app)
            .with_graceful_shutdown(stopped(probe_stop))
            .await
    });

    let api_app = app_router(state, assets_dir);
    info!("Listening on http://{}", api_listener.local_addr()?);
    let mut api_task = tokio::spawn(async move {
        axum::serve(api_listener, api_app)
            .with_graceful_shutdown(stopped(stop_rx))
            .await
    });

    tokio::select! {
        () = shutdown => {}
        result = &mut probe_task => return Err(exited("Health probe server", result)),
        result = &mut api_task => return Err(exited("HTTP server", result)),
    }

    info!("Shutting down server...");
    // Receivers live inside the server tasks, which are still running here.
    let _ = stop_tx.send(true);

    match timeout(shutdown_timeout, &mut api_task).await {
        Ok(Ok(Ok(()))) => {}
        Ok(Ok(Err(e))) => return Err(anyhow::Error::new(e).context("HTTP server failed during shutdown")),
        Ok(Err(e)) => return Err(anyhow::Error::new(e).context("HTTP server task failed")),
        Err(_) => {
            error!("Server forced to shutdown");
            api_task.abort();
            probe_task.abort();
            anyhow::bail!("HTTP server did not drain within {:?}", shutdown_timeout);
        }
    }

    if timeout(Duration::from_secs(1), &mut probe_task).await.is_err() {
        probe_task.abort();
    }

    info!("Server exiting");
    Ok(())
}

/// Resolves once the stop flag is raised or its sender is gone.
async fn stopped(mut stop: watch::Receiver<bool>) {
    let _ = stop.wait_for(|stop| *stop).await;
}

/// Describes a server task that ended before shutdown was requested.
fn exited(name: &str, result: Result<io::Result<()>, JoinError>) -> anyhow::Error {
    match result {
        Ok(Ok(())) => anyhow::anyhow!("{} stopped unexpectedly", name),
        Ok(Err(e)) => anyhow::Error::new(e).context(format!("{} failed", name)),
        Err(e) => anyhow::Error::new(e).context(format!("{} task failed", name)),
    }
}

/// Waits for SIGINT (Ctrl+C) or, on Unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exited_messages() {
        let clean = exited("HTTP server", Ok(Ok(())));
        assert_eq!(clean.to_string(), "HTTP server stopped unexpectedly");

        let failed = exited(
            "HTTP server",
            Ok(Err(io::Error::new(io::ErrorKind::AddrInUse, "in use"))),
        );
        assert_eq!(failed.to_string(), "HTTP server failed");
    }

    #[tokio::test]
    async fn test_connect_memory_repository() {
        let config = Config {
            bind_address: "127.0.0.1:0".to_string(),
            probe_bind_address: "127.0.0.1:1".to_string(),
            store_backend: StoreBackend::Memory,
            namespace: None,
            assets_dir: "html/assets".into(),
            shutdown_timeout_secs: 5,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        };

        let repository = connect_repository(&config).await.unwrap();
        assert!(repository.list().await.unwrap().is_empty());
    }
}
