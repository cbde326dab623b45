//! tunebox - a small self-hosted music catalog with playlists and
//! genre-based recommendations

mod api;
mod config;
mod core;
mod db;
mod models;
mod utils;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// tunebox - self-hosted music catalog
#[derive(Parser, Debug)]
#[command(name = "tunebox")]
#[command(version = "0.3.0")]
#[command(about = "A small self-hosted music catalog with playlists and recommendations")]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on
    #[arg(long, default_value_t = 1985)]
    port: u16,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// Path to config directory
    #[arg(long)]
    config: Option<PathBuf>,

    /// Path to the music library to import at startup
    #[arg(long)]
    music: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // initialize logging with filters to suppress noisy dependency warnings
    let log_level = if args.debug { "debug" } else { "info" };
    let filter =
        tracing_subscriber::EnvFilter::new(format!("{},sqlx=warn,lofty=error", log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("tunebox v0.3.0 starting...");

    let paths = config::Paths::init(args.config, args.music)?;
    info!("Config directory: {:?}", paths.config_dir());

    db::setup_sqlite(&paths.app_db_path()).await?;
    db::seed_genres().await?;
    info!("Catalog contains {} songs", db::SongTable::count().await?);

    // initial import runs in the background so the server starts immediately
    if let Some(music_dir) = paths.music_dir().map(PathBuf::from) {
        tokio::spawn(async move {
            info!("Scanning music library at {:?}", music_dir);
            if let Err(e) = core::Importer::scan(&music_dir).await {
                warn!("Initial library scan failed: {}", e);
            }
        });
    } else {
        warn!("No music directory configured. Pass --music or POST /scan to import a catalog.");
    }

    info!("Listening on {}:{}", args.host, args.port);

    actix_web::HttpServer::new(|| {
        actix_web::App::new()
            .wrap(actix_cors::Cors::permissive())
            .configure(api::configure)
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await?;

    Ok(())
}
