use call_queue::{
    config::{Settings, database},
    core::{ActivationGate, QueueService},
    errors::Result,
    http::{self, AppState},
    notify::{LogNotifier, NotificationPort, TwilioNotifier},
};
use dotenvy::dotenv;
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; variables may also come from the environment directly
    dotenv().ok();

    // 3. Settings: optional TOML file, then environment overrides
    let settings = Settings::load().inspect_err(|e| error!("Failed to load settings: {}", e))?;

    // 4. Database and schema
    let db = database::create_connection(&settings.database_url)
        .await
        .inspect_err(|e| error!("Failed to open database: {}", e))?;
    database::create_tables(&db).await?;

    // 5. Notification transport
    let notifier: Arc<dyn NotificationPort> = match settings.twilio.clone() {
        Some(twilio) => Arc::new(TwilioNotifier::new(twilio, settings.notify_timeout())?),
        None => {
            warn!("Twilio credentials not configured; notifications will only be logged.");
            Arc::new(LogNotifier)
        }
    };

    // 6. Queue and HTTP API. The gate always starts closed.
    let queue = QueueService::new(db, ActivationGate::new(), notifier);
    let state = AppState::new(queue, &settings.join_url());
    let app = http::router(state).layer(http::cors_layer(&settings.frontend_url)?);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", settings.port)).await?;
    info!("Server listening on port {}", settings.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
}
