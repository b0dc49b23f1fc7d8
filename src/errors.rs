// src/errors.rs
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InstaGeniusError {
    #[error("Selected style is not supported yet.")]
    UnsupportedStyle(String),

    #[error("{0}")]
    Generation(String),
}

impl ResponseError for InstaGeniusError {
    fn error_response(&self) -> HttpResponse {
        match self {
            InstaGeniusError::UnsupportedStyle(style) => {
                HttpResponse::NotFound().json(serde_json::json!({
                    "error": "Unsupported style",
                    "style": style,
                    "message": self.to_string()
                }))
            }
            InstaGeniusError::Generation(_) => {
                HttpResponse::ServiceUnavailable().json(serde_json::json!({
                    "error": "AI service error",
                    "message": self.to_string()
                }))
            }
        }
    }
}
