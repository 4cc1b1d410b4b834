use thiserror::Error;

use crate::models::{MarketType, EXPIRATION_MINUTES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Email,
    Asset,
    Expiration,
    Image,
}

/// First failing field wins; errors are never aggregated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub field: FormField,
    pub message: String,
}

impl ValidationError {
    fn new(field: FormField, message: &str) -> Self {
        Self {
            field,
            message: message.to_string(),
        }
    }
}

/// The chart screenshot as selected by the user.
#[derive(Debug, Clone)]
pub struct ChartImage {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisForm {
    pub email: String,
    pub asset: String,
    pub expiration: Option<u32>,
    pub market_type: MarketType,
    pub image: Option<ChartImage>,
}

impl AnalysisForm {
    /// Fails closed, checking fields in the order email, asset, expiration,
    /// image and reporting only the first problem.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.is_empty() {
            return Err(ValidationError::new(
                FormField::Email,
                "Por favor, insira seu e-mail.",
            ));
        }
        if !self.email.contains('@') {
            return Err(ValidationError::new(
                FormField::Email,
                "Por favor, insira um e-mail válido.",
            ));
        }
        if self.asset.is_empty() {
            return Err(ValidationError::new(
                FormField::Asset,
                "Por favor, insira o ativo (par de moedas).",
            ));
        }
        match self.expiration {
            Some(minutes) if EXPIRATION_MINUTES.contains(&minutes) => {}
            _ => {
                return Err(ValidationError::new(
                    FormField::Expiration,
                    "Por favor, selecione o tempo de expiração.",
                ));
            }
        }
        if self.image.is_none() {
            return Err(ValidationError::new(
                FormField::Image,
                "Por favor, envie uma imagem do gráfico antes de iniciar a análise.",
            ));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
