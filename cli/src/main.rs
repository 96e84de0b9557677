//! Boruto heroes — CLI server
//!
//! ```sh
//! # Run with default config (~/.config/boruto-heroes/config.toml)
//! heroes-service
//!
//! # Custom config path and port
//! heroes-service --config /etc/boruto-heroes/config.toml --port 8081
//!
//! # Validate config without starting
//! heroes-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use boruto_heroes::config::AppConfig;
use boruto_heroes::server::{init_tracing, ServerHandle, ServerOptions};

/// Boruto heroes — read-only REST API over the hero catalog.
#[derive(Parser, Debug)]
#[command(
    name = "heroes-service",
    version,
    about = "Paged listing and name search over the Boruto hero catalog",
    long_about = "Boruto heroes REST API server.\n\n\
                  Default config: ~/.config/boruto-heroes/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "HEROES_CONFIG")]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli
        .config
        .unwrap_or_else(boruto_heroes::default_config_path);

    let mut config = match AppConfig::load(&config_path) {
        Ok(mut cfg) => {
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            init_tracing(&cfg);
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            if cli.check {
                eprintln!("❌ {}", e);
                std::process::exit(1);
            }
            let mut cfg = AppConfig::default();
            if let Some(ref level) = cli.log_level {
                cfg.logging.level = level.clone();
            }
            init_tracing(&cfg);
            error!("{}", e);
            error!("Using default configuration.");
            cfg
        }
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        config.validate()?;
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   Address     : {}", config.server.address());
        println!("   Page size   : {}", config.catalog.page_size);
        println!("   Images dir  : {}", config.http.images_dir.display());
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        install_metrics: true,
    })
    .await?;

    handle.install_signal_handler();
    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
