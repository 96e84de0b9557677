//! Server runtime
//!
//! [`ServerHandle`] owns the whole lifecycle: catalog construction, metrics
//! recorder, REST API listener and graceful shutdown. The CLI binary is a thin
//! wrapper around it.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::create_api_router;
use crate::domain::HeroRepository;
use crate::infrastructure::InMemoryHeroRepository;
use crate::shared::shutdown::{ShutdownCoordinator, ShutdownSignal};

// ── Options ────────────────────────────────────────────────────────

/// Options for starting the heroes server.
pub struct ServerOptions {
    pub config: AppConfig,
    /// Install the global Prometheus recorder (default: true).
    pub install_metrics: bool,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            install_metrics: true,
        }
    }
}

// ── ServerHandle ───────────────────────────────────────────────────

/// Handle to a running heroes server.
///
/// # Examples
///
/// ```rust,no_run
/// use boruto_heroes::server::{ServerHandle, ServerOptions};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let handle = ServerHandle::start(ServerOptions::default()).await?;
///     handle.install_signal_handler();
///     handle.shutdown_signal().wait().await;
///     handle.wait().await;
///     Ok(())
/// }
/// ```
pub struct ServerHandle {
    /// The configuration the server was started with.
    pub config: AppConfig,
    /// Address the REST API is bound to.
    pub local_addr: SocketAddr,
    /// The catalog served by this instance.
    pub repository: Arc<dyn HeroRepository>,

    shutdown: ShutdownCoordinator,
    api_task: tokio::task::JoinHandle<()>,
}

impl ServerHandle {
    /// Build the catalog, bind the listener and start serving.
    pub async fn start(opts: ServerOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let app_cfg = opts.config;
        app_cfg.validate()?;

        info!("Starting Boruto heroes server...");

        let prometheus_handle = if opts.install_metrics && app_cfg.http.enable_metrics {
            prometheus_handle()
        } else {
            None
        };

        // ── Catalog ────────────────────────────────────────────
        let repository: Arc<dyn HeroRepository> = Arc::new(
            InMemoryHeroRepository::with_reference_catalog(app_cfg.catalog.page_size),
        );
        info!(
            "📚 Catalog loaded: {} heroes in {} pages of {}",
            repository.find_all().len(),
            repository.total_pages(),
            repository.page_size()
        );

        // ── REST API server ────────────────────────────────────
        let shutdown = ShutdownCoordinator::new(app_cfg.server.shutdown_timeout);
        let api_router = create_api_router(repository.clone(), &app_cfg, prometheus_handle);

        let listener = tokio::net::TcpListener::bind(app_cfg.server.address()).await?;
        let local_addr = listener.local_addr()?;
        info!("REST API server listening on http://{}", local_addr);
        if app_cfg.http.enable_docs {
            info!("Swagger UI available at http://{}/docs/", local_addr);
        }

        let api_shutdown = shutdown.signal();
        let api_server = axum::serve(listener, api_router).with_graceful_shutdown(async move {
            api_shutdown.wait().await;
            info!("🛑 REST API server received shutdown signal");
        });

        let api_task = tokio::spawn(async move {
            if let Err(e) = api_server.await {
                error!("REST API server error: {}", e);
            }
        });

        info!("🚀 Server started.");

        Ok(Self {
            config: app_cfg,
            local_addr,
            repository,
            shutdown,
            api_task,
        })
    }

    pub fn shutdown_signal(&self) -> ShutdownSignal {
        self.shutdown.signal()
    }

    /// Install OS signal listeners (SIGTERM, SIGINT) that trigger shutdown.
    pub fn install_signal_handler(&self) {
        self.shutdown.start_signal_listener();
    }

    /// Trigger graceful shutdown without waiting for it.
    pub fn trigger_shutdown(&self) {
        self.shutdown.signal().trigger();
    }

    /// Wait for the server to stop, giving in-flight requests at most
    /// `server.shutdown_timeout` seconds once shutdown has been triggered.
    pub async fn wait(self) {
        let timeout = Duration::from_secs(self.shutdown.timeout_secs());
        let signal = self.shutdown.signal();
        let mut api_task = self.api_task;

        tokio::select! {
            result = &mut api_task => {
                log_task_result(result);
                info!("👋 Boruto heroes server shutdown complete");
                return;
            }
            _ = signal.wait() => {}
        }

        info!("⏳ Waiting up to {}s for in-flight requests...", timeout.as_secs());
        match tokio::time::timeout(timeout, &mut api_task).await {
            Ok(result) => log_task_result(result),
            Err(_) => {
                warn!("⚠️ Graceful shutdown timed out after {}s", timeout.as_secs());
                api_task.abort();
            }
        }

        info!("👋 Boruto heroes server shutdown complete");
    }

    /// Trigger shutdown and wait for completion.
    pub async fn shutdown(self) {
        info!("🛑 Shutting down Boruto heroes server...");
        self.trigger_shutdown();
        self.wait().await;
    }

    pub fn is_running(&self) -> bool {
        !self.api_task.is_finished()
    }
}

// ── Helpers ────────────────────────────────────────────────────────

fn log_task_result(result: Result<(), tokio::task::JoinError>) {
    match result {
        Ok(()) => info!("REST API server stopped"),
        Err(e) => error!("REST API server task panicked: {}", e),
    }
}

/// The global Prometheus recorder can only be installed once per process;
/// later starts reuse the first handle.
fn prometheus_handle() -> Option<PrometheusHandle> {
    static PROM_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

    if let Some(handle) = PROM_HANDLE.get() {
        return Some(handle.clone());
    }
    match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => {
            info!("📊 Prometheus metrics recorder installed");
            Some(PROM_HANDLE.get_or_init(|| handle).clone())
        }
        Err(e) => {
            warn!("Prometheus recorder unavailable, /metrics disabled: {}", e);
            None
        }
    }
}

/// Initialize tracing (logging) from the application config.
///
/// `RUST_LOG` wins over `logging.level`. Call once at process startup,
/// before [`ServerHandle::start`].
pub fn init_tracing(config: &AppConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.level));

    let result = match config.logging.format.to_lowercase().as_str() {
        "json" => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        _ => tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init(),
    };

    if let Err(e) = result {
        eprintln!("Tracing already initialized: {}", e);
    }
}
