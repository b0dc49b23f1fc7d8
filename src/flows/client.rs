// src/flows/client.rs
use crate::errors::InstaGeniusError;
use crate::flows::GeneratedImage;
use base64::{Engine as _, engine::general_purpose};
use log::debug;
use reqwest::Client;
use serde_json::json;

const IMAGE_MODEL: &str = "dall-e-3";

/// Shared HTTP client for the image backend. Flows differ only in the
/// prompt they build; the outbound call is identical for all of them.
pub struct ImageClient {
    api_key: String,
    client: Client,
}

impl ImageClient {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            client: Client::new(),
        }
    }

    /// One generation call. Returns the image as a
    /// `data:image/png;base64,...` URI.
    pub async fn generate_image(&self, prompt: &str) -> Result<GeneratedImage, InstaGeniusError> {
        debug!("image generation prompt ({} chars)", prompt.len());

        let response = self
            .client
            .post("https://api.openai.com/v1/images/generations")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": IMAGE_MODEL,
                "prompt": prompt,
                "n": 1,
                "size": "1024x1024",
                "quality": "hd",
                "response_format": "b64_json"
            }))
            .send()
            .await
            .map_err(|e| {
                InstaGeniusError::Generation(format!("Image generation request failed: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(InstaGeniusError::Generation(format!(
                "Image generation error: {}",
                error_text
            )));
        }

        let result: serde_json::Value = response.json().await.map_err(|e| {
            InstaGeniusError::Generation(format!("Failed to parse generation response: {}", e))
        })?;

        let b64_json = result["data"][0]["b64_json"]
            .as_str()
            .ok_or_else(|| InstaGeniusError::Generation("No image data in response".to_string()))?;

        // Decode to reject corrupt payloads, then re-encode into the URI.
        let image_data = general_purpose::STANDARD
            .decode(b64_json)
            .map_err(|e| InstaGeniusError::Generation(format!("Failed to decode image: {}", e)))?;

        let image = format!(
            "data:image/png;base64,{}",
            general_purpose::STANDARD.encode(&image_data)
        );

        Ok(GeneratedImage {
            image,
            prompt_used: prompt.to_string(),
            model: IMAGE_MODEL.to_string(),
        })
    }
}
