// src/flows/mod.rs
pub mod catalog;
pub mod client;

use crate::errors::InstaGeniusError;
use crate::models::FieldValue;
use async_trait::async_trait;
use std::collections::BTreeMap;

pub use client::ImageClient;

/// The inputs handed to a flow after the registry has projected and
/// renamed the form fields. Keys are the flow's own input names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleInputs {
    pub post_idea: String,
    pub fields: BTreeMap<String, FieldValue>,
}

impl StyleInputs {
    /// Text value for a field, or `""` when unset. Validation runs before
    /// dispatch, so a required field is never actually missing here.
    pub fn text(&self, name: &str) -> &str {
        match self.fields.get(name) {
            Some(FieldValue::Text(t)) => t,
            _ => "",
        }
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(FieldValue::Flag(true)))
    }
}

/// What a flow hands back on success. `image` is a data URI; the caller
/// treats it as an opaque string.
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub image: String,
    pub prompt_used: String,
    pub model: String,
}

/// One backend generation operation. Every style maps to exactly one flow;
/// the registry depends only on this trait, never on a concrete flow.
#[async_trait]
pub trait GenerationFlow: Send + Sync {
    /// Build the style's prompt from `inputs` and perform exactly one
    /// outbound generation call. No retries, no fan-out.
    async fn generate(&self, inputs: &StyleInputs) -> Result<GeneratedImage, InstaGeniusError>;

    /// Flow name for logging.
    fn name(&self) -> &'static str;
}
