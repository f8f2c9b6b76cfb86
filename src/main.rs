use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod catalog;
mod config;
mod content_loader;
mod error;
mod formatter;
mod generate;
mod markdown;
mod models;
mod packages;
mod pages;
mod render;
mod routes;
mod seed;
mod state;

use config::Config;
use state::AppState;

#[derive(Parser)]
#[command(name = "edge-blog", version, about = "A small blog server and static site generator")]
struct Cli {
    /// Path to the TOML config file
    #[arg(short, long, global = true, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the site over HTTP (default)
    Serve {
        #[arg(short, long)]
        port: Option<u16>,

        #[arg(long)]
        host: Option<String>,
    },

    /// Pre-render every page to a directory
    Generate {
        #[arg(short, long, default_value = generate::DEFAULT_OUT_DIR)]
        out: PathBuf,
    },

    /// Print the posts in the catalog
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // logging
    let default_filter = if cli.debug { "edge_blog=debug,info" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::load(&cli.config)?;

    let catalog = content_loader::load_catalog(&config.content)
        .await
        .context("failed to load posts")?;

    match cli.command.unwrap_or(Command::Serve { port: None, host: None }) {
        Command::Serve { port, host } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            serve(config, catalog).await?;
        }
        Command::Generate { out } => {
            let state = AppState::new(&config, catalog);
            let written = generate::generate(&state, &out).await?;
            println!("Generated {} files in {}", written, out.display());
        }
        Command::List => {
            for post in catalog.list_all() {
                println!("{}  {}  {}", post.published_at, post.slug, post.title);
            }
        }
    }

    Ok(())
}

async fn serve(config: Config, catalog: catalog::Catalog) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", config.server.host, config.server.port))?;

    let state = Arc::new(AppState::new(&config, catalog));
    let app = routes::router(state, &config.server.static_dir);

    info!(%addr, "listening");
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
