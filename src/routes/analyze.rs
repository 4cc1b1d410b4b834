use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use tracing::{error, info, warn};

use crate::errors::AppError;
use crate::models::{AnalysisRequest, AnalysisResult};
use crate::services::analysis_service;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", post(analyze_chart))
}

/// POST /api/analyze - multipart form with an `image` plus the submission
/// fields. Only the image is required; everything else is accepted verbatim
/// and echoed back where relevant.
pub async fn analyze_chart(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalysisResult>, AppError> {
    info!("POST /api/analyze - Receiving chart submission");

    let mut image: Option<Bytes> = None;
    let mut email = String::new();
    let mut asset = String::new();
    let mut expiration = String::new();
    let mut market_type = String::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        error!("Failed to read multipart field: {}", e);
        AppError::Unexpected(anyhow::Error::new(e))
    })? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                image = Some(field.bytes().await.map_err(|e| {
                    error!("Failed to read image bytes: {}", e);
                    AppError::Unexpected(anyhow::Error::new(e))
                })?);
            }
            "email" => email = read_text(field).await?,
            "asset" => asset = read_text(field).await?,
            "expiration" => expiration = read_text(field).await?,
            "marketType" => market_type = read_text(field).await?,
            _ => {}
        }
    }

    let Some(image) = image else {
        warn!("Submission rejected: no chart image attached");
        return Err(AppError::Validation("Imagem não fornecida".to_string()));
    };

    let request = AnalysisRequest {
        image,
        email,
        asset,
        expiration,
        market_type,
    };

    let result = analysis_service::run_analysis(&state.settings, &request).await;
    info!(
        "Analysis for {} completed: {} ({}%)",
        result.asset, result.verdict, result.probability
    );

    Ok(Json(result))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field.text().await.map_err(|e| {
        error!("Failed to read multipart text field: {}", e);
        AppError::Unexpected(anyhow::Error::new(e))
    })
}
