use smartfridge::server::{
    config::Config,
    error::Error,
    model::app::AppState,
    router, startup,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("smartfridge=info,tower_http=info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config).await {
        tracing::error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}

async fn serve(config: Config) -> Result<(), Error> {
    let db = startup::connect_to_database(&config).await?;
    let jwt = startup::build_jwt_config(&config);

    let app = router::routes().with_state(AppState { db, jwt });

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .map_err(|e| Error::InternalError(format!("Failed to bind {}: {}", config.bind_address, e)))?;

    tracing::info!(address = %config.bind_address, "Starting server");

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::InternalError(format!("Server error: {}", e)))
}
