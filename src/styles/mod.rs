// src/styles/mod.rs
//
// The style registry: one immutable table mapping a style id to its
// required fields, its defaults, its field renames, and the flow that
// generates it. Validation, default-reset on style change, and dispatch
// are all driven generically from this table.
use crate::errors::InstaGeniusError;
use crate::flows::catalog::*;
use crate::flows::{GenerationFlow, ImageClient, StyleInputs};
use crate::models::{FieldValue, FormValues, GenerationResult, StyleSummary, ValidationErrors};
use log::{error, info, warn};
use std::collections::HashMap;
use std::sync::Arc;

pub const UNSUPPORTED_STYLE_MESSAGE: &str = "Selected style is not supported yet.";
pub const GENERATION_FALLBACK_MESSAGE: &str = "An error occurred while generating the image.";

const POST_IDEA_MIN_CHARS: usize = 10;
const POST_IDEA_MAX_CHARS: usize = 500;

/// Everything the registry knows about one visual style.
pub struct StyleDescriptor {
    pub id: &'static str,
    pub label: &'static str,
    /// Form fields that must be present and non-blank for this style.
    pub required_fields: Vec<&'static str>,
    /// Pre-filled when the style becomes selected.
    pub defaults: Vec<(&'static str, FieldValue)>,
    /// Form field name -> flow input name, for the fields the flow knows
    /// under a different name. Unlisted fields keep their form name.
    pub field_map: Vec<(&'static str, &'static str)>,
    pub flow: Arc<dyn GenerationFlow>,
}

impl StyleDescriptor {
    /// Project exactly the fields the flow expects out of the form,
    /// applying renames.
    fn project_inputs(&self, form: &FormValues) -> StyleInputs {
        let mut inputs = StyleInputs {
            post_idea: form.post_idea.clone(),
            ..Default::default()
        };
        for name in &self.required_fields {
            if let Some(value) = form.fields.get(*name) {
                let target = self
                    .field_map
                    .iter()
                    .find(|(from, _)| from == name)
                    .map(|(_, to)| *to)
                    .unwrap_or(name);
                inputs.fields.insert(target.to_string(), value.clone());
            }
        }
        inputs
    }
}

pub struct StyleRegistry {
    styles: HashMap<&'static str, StyleDescriptor>,
}

impl StyleRegistry {
    /// Builds the registry with every shipped style wired to its flow.
    pub fn new(client: Arc<ImageClient>) -> Self {
        Self::from_descriptors(builtin_styles(client))
    }

    pub fn from_descriptors(descriptors: Vec<StyleDescriptor>) -> Self {
        let styles = descriptors.into_iter().map(|d| (d.id, d)).collect();
        Self { styles }
    }

    pub fn contains(&self, style_id: &str) -> bool {
        self.styles.contains_key(style_id)
    }

    /// Stable listing for `GET /styles`.
    pub fn summaries(&self) -> Vec<StyleSummary> {
        let mut summaries: Vec<StyleSummary> = self
            .styles
            .values()
            .map(|d| StyleSummary {
                id: d.id,
                label: d.label,
                required_fields: d.required_fields.clone(),
                defaults: d.defaults.iter().cloned().collect(),
            })
            .collect();
        summaries.sort_by_key(|s| s.id);
        summaries
    }

    /// Checks every required field for the style. Empty map means valid.
    /// Pure: identical arguments always yield identical results.
    pub fn validate(&self, style_id: &str, form: &FormValues) -> ValidationErrors {
        let mut errors = ValidationErrors::new();

        let idea_len = form.post_idea.trim().chars().count();
        if idea_len == 0 {
            errors.insert("postIdea".to_string(), "Post idea is required.".to_string());
        } else if !(POST_IDEA_MIN_CHARS..=POST_IDEA_MAX_CHARS).contains(&idea_len) {
            errors.insert(
                "postIdea".to_string(),
                format!(
                    "Post idea must be between {} and {} characters.",
                    POST_IDEA_MIN_CHARS, POST_IDEA_MAX_CHARS
                ),
            );
        }

        if let Some(descriptor) = self.styles.get(style_id) {
            for name in &descriptor.required_fields {
                let missing = form.fields.get(*name).is_none_or(|v| v.is_blank());
                if missing {
                    errors.insert(
                        name.to_string(),
                        format!("{} is required for this style.", field_label(name)),
                    );
                }
            }
        }

        errors
    }

    /// The style-change reset: clears every style-specific field back to
    /// unset, then applies the new style's defaults. The post idea and the
    /// style id itself survive, so nothing from the previous style can leak
    /// into the next validation.
    pub fn apply_style_defaults(
        &self,
        style_id: &str,
        mut form: FormValues,
    ) -> Result<FormValues, InstaGeniusError> {
        let descriptor = self
            .styles
            .get(style_id)
            .ok_or_else(|| InstaGeniusError::UnsupportedStyle(style_id.to_string()))?;

        form.fields.clear();
        form.style = descriptor.id.to_string();
        for (name, value) in &descriptor.defaults {
            form.fields.insert(name.to_string(), value.clone());
        }
        Ok(form)
    }

    /// Runs the style's flow exactly once and folds every outcome into a
    /// `GenerationResult`. Assumes `validate` has already passed; an
    /// unknown style never reaches any flow.
    pub async fn dispatch(&self, style_id: &str, form: &FormValues) -> GenerationResult {
        let Some(descriptor) = self.styles.get(style_id) else {
            warn!("dispatch requested for unknown style '{}'", style_id);
            return GenerationResult::failure(UNSUPPORTED_STYLE_MESSAGE);
        };

        let inputs = descriptor.project_inputs(form);
        info!(
            "dispatching style '{}' to flow '{}'",
            style_id,
            descriptor.flow.name()
        );

        match descriptor.flow.generate(&inputs).await {
            Ok(generated) if !generated.image.is_empty() => {
                info!(
                    "flow '{}' produced an image with model {}",
                    descriptor.flow.name(),
                    generated.model
                );
                GenerationResult::success(generated.image)
            }
            Ok(_) => {
                error!("flow '{}' returned an empty image", descriptor.flow.name());
                GenerationResult::failure(GENERATION_FALLBACK_MESSAGE)
            }
            Err(e) => {
                error!("flow '{}' failed: {}", descriptor.flow.name(), e);
                let message = e.to_string();
                if message.is_empty() {
                    GenerationResult::failure(GENERATION_FALLBACK_MESSAGE)
                } else {
                    GenerationResult::failure(message)
                }
            }
        }
    }
}

/// Human label for a form field, used in validation messages.
fn field_label(name: &str) -> &str {
    match name {
        "colorPalette" => "Color palette",
        "colorTheme" => "Color theme",
        "fontStyle" => "Font style",
        "niche" => "Niche",
        "humanSubject" => "Human subject",
        "website" => "Website",
        "companyName" => "Company name",
        "brandName" => "Brand name",
        "quoteText" => "Quote text",
        "includeTexture" => "Texture preference",
        _ => name,
    }
}

fn builtin_styles(client: Arc<ImageClient>) -> Vec<StyleDescriptor> {
    vec![
        StyleDescriptor {
            id: "bold-minimalist",
            label: "Bold Minimalist",
            required_fields: vec!["colorPalette", "fontStyle"],
            defaults: vec![
                ("colorPalette", FieldValue::text("navy-orange")),
                ("fontStyle", FieldValue::text("modern-sans-serif")),
            ],
            // The flow names its palette input after the accent it drives.
            field_map: vec![("colorPalette", "accentColor")],
            flow: Arc::new(BoldMinimalistFlow {
                client: client.clone(),
            }),
        },
        StyleDescriptor {
            id: "joyful-grid",
            label: "Joyful Grid",
            required_fields: vec![
                "niche",
                "colorTheme",
                "humanSubject",
                "website",
                "companyName",
            ],
            defaults: vec![("colorTheme", FieldValue::text("sunny-yellow"))],
            field_map: vec![],
            flow: Arc::new(JoyfulGridFlow {
                client: client.clone(),
            }),
        },
        StyleDescriptor {
            id: "dark-luxury",
            label: "Dark Luxury",
            required_fields: vec!["colorPalette", "brandName"],
            defaults: vec![("colorPalette", FieldValue::text("black-gold"))],
            field_map: vec![],
            flow: Arc::new(DarkLuxuryFlow {
                client: client.clone(),
            }),
        },
        StyleDescriptor {
            id: "pastel-story",
            label: "Pastel Story",
            required_fields: vec!["colorTheme", "humanSubject"],
            defaults: vec![("colorTheme", FieldValue::text("soft-pink"))],
            field_map: vec![],
            flow: Arc::new(PastelStoryFlow {
                client: client.clone(),
            }),
        },
        StyleDescriptor {
            id: "neon-pop",
            label: "Neon Pop",
            required_fields: vec!["colorPalette", "fontStyle"],
            defaults: vec![
                ("colorPalette", FieldValue::text("cyber-purple")),
                ("fontStyle", FieldValue::text("retro-display")),
            ],
            field_map: vec![],
            flow: Arc::new(NeonPopFlow {
                client: client.clone(),
            }),
        },
        StyleDescriptor {
            id: "photo-quote",
            label: "Photo Quote",
            required_fields: vec!["quoteText", "fontStyle"],
            defaults: vec![("fontStyle", FieldValue::text("elegant-serif"))],
            field_map: vec![],
            flow: Arc::new(PhotoQuoteFlow {
                client: client.clone(),
            }),
        },
        StyleDescriptor {
            id: "retro-collage",
            label: "Retro Collage",
            required_fields: vec!["colorTheme", "niche"],
            defaults: vec![("colorTheme", FieldValue::text("faded-film"))],
            field_map: vec![],
            flow: Arc::new(RetroCollageFlow {
                client: client.clone(),
            }),
        },
        StyleDescriptor {
            id: "organic-earthy",
            label: "Organic Earthy",
            required_fields: vec!["colorPalette", "niche", "includeTexture"],
            defaults: vec![
                ("colorPalette", FieldValue::text("sage-terracotta")),
                ("includeTexture", FieldValue::Flag(true)),
            ],
            field_map: vec![],
            flow: Arc::new(OrganicEarthyFlow {
                client: client.clone(),
            }),
        },
        StyleDescriptor {
            id: "clean-carousel",
            label: "Clean Carousel",
            required_fields: vec!["colorPalette", "fontStyle", "companyName"],
            defaults: vec![
                ("colorPalette", FieldValue::text("ice-blue")),
                ("fontStyle", FieldValue::text("modern-sans-serif")),
            ],
            field_map: vec![],
            flow: Arc::new(CleanCarouselFlow {
                client: client.clone(),
            }),
        },
        StyleDescriptor {
            id: "gradient-glow",
            label: "Gradient Glow",
            required_fields: vec!["colorTheme", "website"],
            defaults: vec![("colorTheme", FieldValue::text("sunset-fade"))],
            field_map: vec![],
            flow: Arc::new(GradientGlowFlow { client }),
        },
    ]
}
