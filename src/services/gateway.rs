// src/services/gateway.rs
use crate::errors::AnalysisError;
use crate::models::DiagnosisResult;
use crate::prompts;
use crate::services::extraction;
use base64::{Engine as _, engine::general_purpose};
use log::{debug, error, info};
use reqwest::{Client, StatusCode};
use serde_json::json;
use std::borrow::Cow;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_MODEL: &str = "gpt-4o";

// The collaborator UI has no cancellation path, so the outbound call must
// have an explicit upper bound.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl GatewayConfig {
    /// Read gateway settings from the process environment. A missing key is
    /// not a startup error; it surfaces per request as a configuration fault.
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }
}

pub struct GatewayService {
    config: GatewayConfig,
    client: Client,
}

impl GatewayService {
    pub fn new(config: GatewayConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self { config, client }
    }

    /// Send one image to the inference endpoint and shape its reply.
    ///
    /// Exactly one outbound call per invocation; every failure tier is
    /// terminal and the caller resubmits if it wants another attempt.
    pub async fn diagnose(&self, image: &str) -> Result<DiagnosisResult, AnalysisError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            error!("OPENAI_API_KEY not configured");
            AnalysisError::MissingApiKey
        })?;

        let image_url = ensure_data_uri(image);

        info!("Analyzing plant image with model {}", self.config.model);

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", api_key))
            .json(&json!({
                "model": self.config.model,
                "messages": [
                    {
                        "role": "system",
                        "content": prompts::DIAGNOSIS_SYSTEM
                    },
                    {
                        "role": "user",
                        "content": [
                            {
                                "type": "text",
                                "text": prompts::DIAGNOSIS_USER
                            },
                            {
                                "type": "image_url",
                                "image_url": {
                                    "url": image_url
                                }
                            }
                        ]
                    }
                ]
            }))
            .send()
            .await
            .map_err(|e| AnalysisError::Unexpected(format!("AI gateway request failed: {}", e)))?;

        let status = response.status();
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                error!("AI gateway rate limit exceeded");
                return Err(AnalysisError::RateLimited);
            }
            StatusCode::PAYMENT_REQUIRED => {
                error!("AI gateway payment required");
                return Err(AnalysisError::QuotaExceeded);
            }
            _ if !status.is_success() => {
                let error_text = response.text().await.unwrap_or_default();
                error!("AI gateway error: {} {}", status, error_text);
                return Err(AnalysisError::Upstream {
                    status: status.as_u16(),
                });
            }
            _ => {}
        }

        let payload: serde_json::Value = response.json().await.map_err(|e| {
            AnalysisError::Unexpected(format!("Failed to read AI gateway response: {}", e))
        })?;

        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .unwrap_or_default();

        debug!("Raw model reply: {}", content);

        let value = extraction::extract_json(content).map_err(|e| {
            error!("Failed to parse model reply: {}", e);
            AnalysisError::Unparsable {
                raw: content.to_string(),
            }
        })?;

        let diagnosis = serde_json::from_value::<DiagnosisResult>(value).map_err(|e| {
            error!("Model reply matched no diagnosis shape: {}", e);
            AnalysisError::Unparsable {
                raw: content.to_string(),
            }
        })?;

        info!("Successfully analyzed plant image");
        Ok(diagnosis)
    }
}

/// Normalize the inbound payload to a data URI. Raw base64 is wrapped the way
/// the gateway expects inline images; anything else is forwarded untouched and
/// left for the upstream to reject.
fn ensure_data_uri(image: &str) -> Cow<'_, str> {
    if image.starts_with("data:") {
        return Cow::Borrowed(image);
    }

    if general_purpose::STANDARD.decode(image).is_ok() {
        Cow::Owned(format!("data:image/jpeg;base64,{}", image))
    } else {
        Cow::Borrowed(image)
    }
}
