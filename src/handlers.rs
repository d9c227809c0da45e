// src/handlers.rs
use crate::{AppState, errors::AnalysisError, models::{AnalysisRequest, DiagnosisResult}};
use actix_cors::Cors;
use actix_web::{HttpResponse, ResponseError, web};
use log::{error, info, warn};
use uuid::Uuid;

/// The collaborator caps uploads at 10MB; base64 inflates by ~33% and the
/// JSON envelope adds a little more.
pub const MAX_PAYLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Wildcard CORS so any origin may invoke the service; the middleware also
/// answers OPTIONS preflight with these headers and no body.
pub fn permissive_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec!["authorization", "x-client-info", "apikey", "content-type"])
        .max_age(3600)
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_PAYLOAD_BYTES))
        .service(web::scope("/api/v1").route("/analyze", web::post().to(analyze_plant)))
        .route("/health", web::get().to(health_check));
}

/// POST /api/v1/analyze with body `{"image": <data URI or base64 string>}`.
///
/// Error responses are built here rather than bubbled as actix errors so
/// every body, success or failure, passes through the CORS middleware.
pub async fn analyze_plant(body: web::Bytes, data: web::Data<AppState>) -> HttpResponse {
    let request_id = Uuid::new_v4();

    let request: AnalysisRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            warn!("[{}] invalid request body: {}", request_id, e);
            return AnalysisError::Unexpected(format!("invalid request body: {}", e))
                .error_response();
        }
    };

    let image = match request.image.as_deref().filter(|s| !s.trim().is_empty()) {
        Some(image) => image,
        None => {
            warn!("[{}] no image in request", request_id);
            return AnalysisError::MissingInput.error_response();
        }
    };

    match data.gateway.diagnose(image).await {
        Ok(diagnosis) => {
            match &diagnosis {
                DiagnosisResult::Diseased(report) => info!(
                    "[{}] disease detected: {} (confidence {:?})",
                    request_id, report.disease_name, report.confidence
                ),
                DiagnosisResult::Healthy(_) => info!("[{}] plant appears healthy", request_id),
                DiagnosisResult::NoPlantDetected(_) => {
                    info!("[{}] no plant detected in image", request_id)
                }
            }
            HttpResponse::Ok().json(&diagnosis)
        }
        Err(err) => {
            error!("[{}] analysis failed: {}", request_id, err);
            err.error_response()
        }
    }
}

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "leafscan",
        "version": "0.1.0"
    }))
}
