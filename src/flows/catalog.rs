// src/flows/catalog.rs
//
// One flow per visual style. Every flow is the same shape: build the
// style's prompt from its inputs, make one call through the shared
// `ImageClient`. Prompt builders are plain associated functions so they
// can be exercised without a network.
use crate::errors::InstaGeniusError;
use crate::flows::{GeneratedImage, GenerationFlow, ImageClient, StyleInputs};
use async_trait::async_trait;
use std::sync::Arc;

pub struct BoldMinimalistFlow {
    pub client: Arc<ImageClient>,
}

impl BoldMinimalistFlow {
    fn prompt(inputs: &StyleInputs) -> String {
        format!(
            "Create a bold minimalist Instagram post image for this idea: {}. \
             Use a {} accent color against a clean off-white background, large \
             {} typography as the focal point, generous negative space, flat \
             vector shapes only, no photographic elements, square composition.",
            inputs.post_idea,
            inputs.text("accentColor"),
            inputs.text("fontStyle"),
        )
    }
}

#[async_trait]
impl GenerationFlow for BoldMinimalistFlow {
    async fn generate(&self, inputs: &StyleInputs) -> Result<GeneratedImage, InstaGeniusError> {
        self.client.generate_image(&Self::prompt(inputs)).await
    }

    fn name(&self) -> &'static str {
        "bold-minimalist"
    }
}

pub struct JoyfulGridFlow {
    pub client: Arc<ImageClient>,
}

impl JoyfulGridFlow {
    fn prompt(inputs: &StyleInputs) -> String {
        format!(
            "Create a joyful grid-layout Instagram post image for this idea: {}. \
             The brand {} operates in the {} niche. Arrange a playful grid of \
             tiles in a {} color theme, featuring {} smiling candidly in at \
             least one tile, rounded corners, and the website {} in small \
             friendly lettering along the bottom edge.",
            inputs.post_idea,
            inputs.text("companyName"),
            inputs.text("niche"),
            inputs.text("colorTheme"),
            inputs.text("humanSubject"),
            inputs.text("website"),
        )
    }
}

#[async_trait]
impl GenerationFlow for JoyfulGridFlow {
    async fn generate(&self, inputs: &StyleInputs) -> Result<GeneratedImage, InstaGeniusError> {
        self.client.generate_image(&Self::prompt(inputs)).await
    }

    fn name(&self) -> &'static str {
        "joyful-grid"
    }
}

pub struct DarkLuxuryFlow {
    pub client: Arc<ImageClient>,
}

impl DarkLuxuryFlow {
    fn prompt(inputs: &StyleInputs) -> String {
        format!(
            "Create a dark luxury Instagram post image for this idea: {}. \
             Deep charcoal background with a {} palette, subtle metallic \
             accents, dramatic spot lighting, the brand name {} set in \
             understated capitals, premium editorial feel.",
            inputs.post_idea,
            inputs.text("colorPalette"),
            inputs.text("brandName"),
        )
    }
}

#[async_trait]
impl GenerationFlow for DarkLuxuryFlow {
    async fn generate(&self, inputs: &StyleInputs) -> Result<GeneratedImage, InstaGeniusError> {
        self.client.generate_image(&Self::prompt(inputs)).await
    }

    fn name(&self) -> &'static str {
        "dark-luxury"
    }
}

pub struct PastelStoryFlow {
    pub client: Arc<ImageClient>,
}

impl PastelStoryFlow {
    fn prompt(inputs: &StyleInputs) -> String {
        format!(
            "Create a soft pastel storytelling Instagram post image for this \
             idea: {}. Gentle {} washes, hand-drawn illustrative texture, {} \
             as the central character mid-scene, dreamy diffused light, \
             storybook composition with room for a short caption.",
            inputs.post_idea,
            inputs.text("colorTheme"),
            inputs.text("humanSubject"),
        )
    }
}

#[async_trait]
impl GenerationFlow for PastelStoryFlow {
    async fn generate(&self, inputs: &StyleInputs) -> Result<GeneratedImage, InstaGeniusError> {
        self.client.generate_image(&Self::prompt(inputs)).await
    }

    fn name(&self) -> &'static str {
        "pastel-story"
    }
}

pub struct NeonPopFlow {
    pub client: Arc<ImageClient>,
}

impl NeonPopFlow {
    fn prompt(inputs: &StyleInputs) -> String {
        format!(
            "Create a neon pop Instagram post image for this idea: {}. \
             Electric {} glow on near-black, {} display type outlined in \
             light, retro arcade energy, chromatic aberration at the edges, \
             high contrast and saturated highlights.",
            inputs.post_idea,
            inputs.text("colorPalette"),
            inputs.text("fontStyle"),
        )
    }
}

#[async_trait]
impl GenerationFlow for NeonPopFlow {
    async fn generate(&self, inputs: &StyleInputs) -> Result<GeneratedImage, InstaGeniusError> {
        self.client.generate_image(&Self::prompt(inputs)).await
    }

    fn name(&self) -> &'static str {
        "neon-pop"
    }
}

pub struct PhotoQuoteFlow {
    pub client: Arc<ImageClient>,
}

impl PhotoQuoteFlow {
    fn prompt(inputs: &StyleInputs) -> String {
        format!(
            "Create a photographic quote Instagram post image for this idea: \
             {}. A cinematic background photograph softly blurred behind the \
             quote \"{}\" set in {} type, centered, with a thin keyline frame \
             and plenty of breathing room.",
            inputs.post_idea,
            inputs.text("quoteText"),
            inputs.text("fontStyle"),
        )
    }
}

#[async_trait]
impl GenerationFlow for PhotoQuoteFlow {
    async fn generate(&self, inputs: &StyleInputs) -> Result<GeneratedImage, InstaGeniusError> {
        self.client.generate_image(&Self::prompt(inputs)).await
    }

    fn name(&self) -> &'static str {
        "photo-quote"
    }
}

pub struct RetroCollageFlow {
    pub client: Arc<ImageClient>,
}

impl RetroCollageFlow {
    fn prompt(inputs: &StyleInputs) -> String {
        format!(
            "Create a retro collage Instagram post image for this idea: {}. \
             Torn-paper cutouts and halftone textures themed around the {} \
             niche, a {} color treatment with faded film grain, overlapping \
             vintage ephemera, tape and staple details.",
            inputs.post_idea,
            inputs.text("niche"),
            inputs.text("colorTheme"),
        )
    }
}

#[async_trait]
impl GenerationFlow for RetroCollageFlow {
    async fn generate(&self, inputs: &StyleInputs) -> Result<GeneratedImage, InstaGeniusError> {
        self.client.generate_image(&Self::prompt(inputs)).await
    }

    fn name(&self) -> &'static str {
        "retro-collage"
    }
}

pub struct OrganicEarthyFlow {
    pub client: Arc<ImageClient>,
}

impl OrganicEarthyFlow {
    fn prompt(inputs: &StyleInputs) -> String {
        let texture = if inputs.flag("includeTexture") {
            "visible recycled-paper grain and botanical pressings"
        } else {
            "smooth matte surfaces"
        };
        format!(
            "Create an organic, earthy Instagram post image for this idea: {}. \
             A {} palette rooted in the {} niche, {}, hand-lettered accents, \
             natural morning light, unhurried composition.",
            inputs.post_idea,
            inputs.text("colorPalette"),
            inputs.text("niche"),
            texture,
        )
    }
}

#[async_trait]
impl GenerationFlow for OrganicEarthyFlow {
    async fn generate(&self, inputs: &StyleInputs) -> Result<GeneratedImage, InstaGeniusError> {
        self.client.generate_image(&Self::prompt(inputs)).await
    }

    fn name(&self) -> &'static str {
        "organic-earthy"
    }
}

pub struct CleanCarouselFlow {
    pub client: Arc<ImageClient>,
}

impl CleanCarouselFlow {
    fn prompt(inputs: &StyleInputs) -> String {
        format!(
            "Create the cover slide of a clean carousel Instagram post for \
             this idea: {}. Crisp {} panels, {} headline type, a slim progress \
             indicator hinting at more slides, the company name {} anchored \
             top-left, uncluttered corporate-friendly look.",
            inputs.post_idea,
            inputs.text("colorPalette"),
            inputs.text("fontStyle"),
            inputs.text("companyName"),
        )
    }
}

#[async_trait]
impl GenerationFlow for CleanCarouselFlow {
    async fn generate(&self, inputs: &StyleInputs) -> Result<GeneratedImage, InstaGeniusError> {
        self.client.generate_image(&Self::prompt(inputs)).await
    }

    fn name(&self) -> &'static str {
        "clean-carousel"
    }
}

pub struct GradientGlowFlow {
    pub client: Arc<ImageClient>,
}

impl GradientGlowFlow {
    fn prompt(inputs: &StyleInputs) -> String {
        format!(
            "Create a gradient glow Instagram post image for this idea: {}. \
             A smooth {} gradient field with soft bloom, floating glass \
             shapes, gentle depth of field, and the website {} etched subtly \
             near the lower edge.",
            inputs.post_idea,
            inputs.text("colorTheme"),
            inputs.text("website"),
        )
    }
}

#[async_trait]
impl GenerationFlow for GradientGlowFlow {
    async fn generate(&self, inputs: &StyleInputs) -> Result<GeneratedImage, InstaGeniusError> {
        self.client.generate_image(&Self::prompt(inputs)).await
    }

    fn name(&self) -> &'static str {
        "gradient-glow"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldValue;
    use std::collections::BTreeMap;

    fn inputs(post_idea: &str, fields: &[(&str, FieldValue)]) -> StyleInputs {
        StyleInputs {
            post_idea: post_idea.to_string(),
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    #[test]
    fn bold_minimalist_prompt_uses_renamed_accent_color() {
        let prompt = BoldMinimalistFlow::prompt(&inputs(
            "Announce our new productivity app",
            &[
                ("accentColor", FieldValue::text("navy-orange")),
                ("fontStyle", FieldValue::text("modern-sans-serif")),
            ],
        ));
        assert!(prompt.contains("navy-orange accent color"));
        assert!(prompt.contains("modern-sans-serif typography"));
        assert!(prompt.contains("Announce our new productivity app"));
    }

    #[test]
    fn joyful_grid_prompt_includes_every_required_field() {
        let prompt = JoyfulGridFlow::prompt(&inputs(
            "Celebrate our bakery's anniversary",
            &[
                ("niche", FieldValue::text("artisan baking")),
                ("colorTheme", FieldValue::text("sunny-yellow")),
                ("humanSubject", FieldValue::text("a young baker")),
                ("website", FieldValue::text("crumbandco.example")),
                ("companyName", FieldValue::text("Crumb & Co")),
            ],
        ));
        for needle in [
            "artisan baking",
            "sunny-yellow",
            "a young baker",
            "crumbandco.example",
            "Crumb & Co",
        ] {
            assert!(prompt.contains(needle), "missing {needle:?} in prompt");
        }
    }

    #[test]
    fn organic_earthy_prompt_honors_texture_toggle() {
        let with_texture = OrganicEarthyFlow::prompt(&inputs(
            "Introduce our composting workshops",
            &[
                ("colorPalette", FieldValue::text("sage-terracotta")),
                ("niche", FieldValue::text("urban gardening")),
                ("includeTexture", FieldValue::Flag(true)),
            ],
        ));
        assert!(with_texture.contains("recycled-paper grain"));

        let without_texture = OrganicEarthyFlow::prompt(&inputs(
            "Introduce our composting workshops",
            &[
                ("colorPalette", FieldValue::text("sage-terracotta")),
                ("niche", FieldValue::text("urban gardening")),
                ("includeTexture", FieldValue::Flag(false)),
            ],
        ));
        assert!(without_texture.contains("smooth matte surfaces"));
    }
}
