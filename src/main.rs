// ============================================================================
// CHIRPY - JSON-FILE BACKED MICROBLOG API
// ============================================================================

// - User signup/login with bcrypt password hashing
// - JWT bearer tokens
// - Chirps with length validation and profanity masking
// - Single-file JSON database with atomic saves
// - Static file server with an admin hit counter
// - Structured logging

use chirpy::{AppState, Config, Store, router};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    if let Err(e) = run().await {
        error!("Startup failed: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    // Refuse to serve without a usable database.
    let store = if config.create_db_if_missing {
        Store::init(&config.db_path)?
    } else {
        Store::open(&config.db_path)?
    };
    info!("Using database at {}", store.path().display());

    let state = AppState::new(Arc::new(store), config.jwt_secret.clone());
    let app = router(state, &config.static_root);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    info!("Server running on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET    /api/healthz        - Health check");
    info!("  GET    /admin/metrics      - Fileserver hit count");
    info!("  GET    /api/reset          - Reset hit count");
    info!("  GET    /app/*              - Static files");
    info!("  POST   /api/chirps         - Create chirp");
    info!("  GET    /api/chirps         - List chirps");
    info!("  GET    /api/chirps/:id     - Get specific chirp");
    info!("  POST   /api/users          - Create account");
    info!("  PUT    /api/users          - Update account (auth)");
    info!("  POST   /api/login          - Login");

    axum::serve(listener, app).await?;
    Ok(())
}
