use blog::api;
use blog::config::{Config, DEFAULT_LOG_FILTER};
use blog::infrastructure::database;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = Config::from_env().expect("Invalid configuration");

    // Connect to database
    tracing::info!("Connecting to database {}", config.database_url);
    let pool = database::connect(&config.database_url, config.max_connections)
        .await
        .expect("Failed to connect to database");

    database::migrate(&pool)
        .await
        .expect("Failed to apply migrations");

    tracing::info!("Database ready");

    let app = api::router(pool);

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app)
        .await
        .expect("Server failed");
}
