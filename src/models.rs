// src/models.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A single style-specific form value. The form mixes free-text fields
/// (color palette, font, niche, ...) with toggles, so the wire value is
/// either a JSON string or a JSON boolean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    pub fn text(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }

    /// A blank string counts as missing; a toggle always counts as set.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(t) => t.trim().is_empty(),
            FieldValue::Flag(_) => false,
        }
    }
}

/// The current values of all input fields in a client's form session.
/// `post_idea` and `style` are always present; every style-specific field
/// lives in `fields`, where an unset field is simply an absent key.
/// Never persisted server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    #[serde(default)]
    pub post_idea: String,
    #[serde(default)]
    pub style: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl FormValues {
    pub fn new(post_idea: &str, style: &str) -> Self {
        Self {
            post_idea: post_idea.to_string(),
            style: style.to_string(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, name: &str, value: FieldValue) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }
}

/// Field name -> error message, one entry per missing required field.
/// Empty map means the form is valid.
pub type ValidationErrors = BTreeMap<String, String>;

/// Outcome of one submission. Replaced wholesale by the next submission;
/// nothing is retained between requests.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum GenerationResult {
    #[serde(rename_all = "camelCase")]
    Success {
        id: Uuid,
        /// Opaque data URI (`data:image/png;base64,...`); never parsed here.
        image: String,
        created_at: DateTime<Utc>,
    },
    Failure {
        message: String,
    },
}

impl GenerationResult {
    pub fn success(image: String) -> Self {
        GenerationResult::Success {
            id: Uuid::new_v4(),
            image,
            created_at: Utc::now(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        GenerationResult::Failure {
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success { .. })
    }
}

/// One entry of `GET /api/v1/styles`: what a form needs to render a style.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSummary {
    pub id: &'static str,
    pub label: &'static str,
    pub required_fields: Vec<&'static str>,
    pub defaults: BTreeMap<&'static str, FieldValue>,
}
