// src/errors.rs
use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Every failure in the analysis pipeline. All variants are terminal for the
/// current request; nothing is retried.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("no image provided in request body")]
    MissingInput,

    #[error("AI gateway API key not configured")]
    MissingApiKey,

    #[error("AI gateway rate limit exceeded")]
    RateLimited,

    #[error("AI gateway credits exhausted")]
    QuotaExceeded,

    #[error("AI gateway returned status {status}")]
    Upstream { status: u16 },

    #[error("could not extract JSON from model reply")]
    Unparsable { raw: String },

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl ResponseError for AnalysisError {
    fn status_code(&self) -> StatusCode {
        match self {
            AnalysisError::MissingInput => StatusCode::BAD_REQUEST,
            AnalysisError::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            AnalysisError::QuotaExceeded => StatusCode::PAYMENT_REQUIRED,
            AnalysisError::MissingApiKey
            | AnalysisError::Upstream { .. }
            | AnalysisError::Unparsable { .. }
            | AnalysisError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AnalysisError::MissingInput => HttpResponse::BadRequest().json(json!({
                "error": "No image provided"
            })),
            AnalysisError::MissingApiKey => HttpResponse::InternalServerError().json(json!({
                "error": "API key not configured"
            })),
            AnalysisError::RateLimited => HttpResponse::TooManyRequests().json(json!({
                "error": "Rate limit exceeded. Please try again later."
            })),
            AnalysisError::QuotaExceeded => HttpResponse::PaymentRequired().json(json!({
                "error": "AI service requires additional credits. Please contact support."
            })),
            // Upstream status and body are logged at the call site, never surfaced.
            AnalysisError::Upstream { .. } => HttpResponse::InternalServerError().json(json!({
                "error": "Failed to analyze image"
            })),
            // The raw reply is the primary debugging signal for prompt drift.
            AnalysisError::Unparsable { raw } => HttpResponse::InternalServerError().json(json!({
                "error": "Failed to parse analysis result",
                "raw_response": raw
            })),
            AnalysisError::Unexpected(details) => HttpResponse::InternalServerError().json(json!({
                "error": "An unexpected error occurred",
                "details": details
            })),
        }
    }
}
