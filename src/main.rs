use std::net::SocketAddr;

use tokio::net::TcpListener;

use binary_squad_analyzer::app::create_app;
use binary_squad_analyzer::logging::{init_logging, LoggingConfig};
use binary_squad_analyzer::state::{AnalyzerSettings, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize logging FIRST
    init_logging(LoggingConfig::from_env())?;

    let state = AppState {
        settings: AnalyzerSettings::from_env(),
    };
    let app = create_app(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 Binary Squad analyzer running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
