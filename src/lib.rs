//! Plant-disease analysis service.
//!
//! Accepts an uploaded plant photo as a data URI, forwards it to an external
//! multimodal inference endpoint with a fixed diagnostic prompt, and
//! tolerantly extracts a structured diagnosis from the model's reply.

use std::sync::Arc;

pub mod errors;
pub mod handlers;
pub mod models;
pub mod prompts;
pub mod services;

use services::GatewayService;

#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<GatewayService>,
}
