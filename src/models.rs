// src/models.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inbound body for the analyze endpoint. The field is optional so the
/// handler can distinguish a missing image from a malformed body.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub image: Option<String>,
}

/// Outcome of one analysis request, exactly one variant per request.
///
/// The model is instructed to reply with one of three flat JSON shapes; the
/// variants are untagged and keyed off their required fields (`disease_name`,
/// `message`, `error`). Advisory fields are optional and unknown keys are kept
/// in `extra`, so a reply that parses is emitted back unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DiagnosisResult {
    Diseased(DiseaseReport),
    Healthy(HealthyReport),
    NoPlantDetected(NoPlantReport),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseReport {
    pub disease_detected: bool,
    pub disease_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub causes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symptoms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub treatments: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_remedies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemical_solutions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prevention: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fertilizer_recommendations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather_precautions: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthyReport {
    pub disease_detected: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub general_care: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoPlantReport {
    pub disease_detected: bool,
    pub error: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
