use tracing::info;

use authgate::{AuthService, Config, Database, WebServer};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = authgate::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        authgate::logging::init_console_only(&config.logging.level);
    }

    info!("authgate - user credential and session service");

    let db = match Database::connect(&config.database.path).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to open database {}: {e}", config.database.path);
            std::process::exit(1);
        }
    };

    let auth = AuthService::new(db.into_pool());

    let server = match WebServer::new(&config.server, auth) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to configure server: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = server.run().await {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}
