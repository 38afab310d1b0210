pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::error::{ApiError, Result as ApiResult};
pub use api::success_response::SuccessResponse;

use gsm_manager::AppState;
use gsm_store::{ProfileStore, SettingsStore, TemplateStore};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = gsm_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = gsm_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting gsm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open the persisted JSON documents
    let data_dir = gsm_config::Config::data_dir()?;
    info!("Data directory: {}", data_dir.display());

    let profiles = ProfileStore::open(&data_dir)?;
    let templates = TemplateStore::open(&data_dir)?;
    let settings = SettingsStore::open(&data_dir)?;
    info!("Loaded {} profile(s)", profiles.all().await.len());

    // Build application state and start the sampler/retention loops
    let app_state = AppState::new(&config, profiles, templates, settings);
    let background = app_state.spawn_background_tasks();

    // Build router
    let app = routes::build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    // Spawned servers stay up; only our own timers stop.
    for task in background {
        task.abort();
    }

    info!("Shutdown complete");
    Ok(())
}
