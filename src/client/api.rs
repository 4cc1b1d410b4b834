use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::multipart;
use thiserror::Error;
use tracing::error;
use url::Url;

use crate::client::form::{AnalysisForm, ValidationError};
use crate::models::AnalysisResult;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Invalid(#[from] ValidationError),
    #[error("Erro ao processar a análise. Tente novamente.")]
    Transport(#[source] reqwest::Error),
    #[error("Resposta inválida do servidor. Por favor, tente novamente.")]
    InvalidResponse,
    #[error("{message}")]
    Server { message: String },
}

/// Thin wrapper over reqwest that speaks the analyze endpoint's multipart
/// contract.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http: reqwest::Client,
    base_url: Url,
}

impl AnalysisClient {
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Submits a validated form and decodes the verdict. Server-reported
    /// errors surface their message verbatim; anything that is not JSON is
    /// treated as an invalid response.
    pub async fn submit(&self, form: &AnalysisForm) -> Result<AnalysisResult, ClientError> {
        form.validate()?;
        // validate() guarantees the image and expiration are present
        let image = form.image.as_ref().expect("validated form has an image");
        let expiration = form.expiration.expect("validated form has an expiration");

        let payload = multipart::Form::new()
            .part(
                "image",
                multipart::Part::bytes(image.bytes.clone()).file_name(image.file_name.clone()),
            )
            .text("email", form.email.clone())
            .text("asset", form.asset.clone())
            .text("expiration", expiration.to_string())
            .text("marketType", form.market_type.as_str());

        let url = self
            .base_url
            .join("/api/analyze")
            .map_err(|_| ClientError::InvalidResponse)?;

        let response = self
            .http
            .post(url)
            .header(ACCEPT, "application/json")
            .multipart(payload)
            .send()
            .await
            .map_err(|e| {
                error!("Analysis request failed to send: {}", e);
                ClientError::Transport(e)
            })?;

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.contains("application/json"))
            .unwrap_or(false);
        if !is_json {
            error!("Analysis response was not JSON");
            return Err(ClientError::InvalidResponse);
        }

        let status = response.status();
        let body: serde_json::Value = response.json().await.map_err(ClientError::Transport)?;

        if !status.is_success() {
            let message = body
                .get("error")
                .and_then(|v| v.as_str())
                .unwrap_or("Erro ao processar análise")
                .to_string();
            return Err(ClientError::Server { message });
        }

        serde_json::from_value(body).map_err(|e| {
            error!("Analysis response did not match the expected shape: {}", e);
            ClientError::InvalidResponse
        })
    }
}
