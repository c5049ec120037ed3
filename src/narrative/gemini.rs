//! Google Gemini client
//!
//! Single generateContent request carrying the comparison instruction plus
//! two full-page screenshots as inline PNG parts.

use std::fs;
use std::path::Path;
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;

use crate::core::{CompareError, Config, Result};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client for the Gemini generateContent API
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from configuration; fails without an API key
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config
            .gemini
            .api_key
            .clone()
            .ok_or(CompareError::MissingApiKey)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.gemini.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key,
            model: config.gemini.model.clone(),
        })
    }

    /// Ask Gemini which of the two screenshots is the better UI/UX
    pub async fn compare_screens(
        &self,
        first: &Path,
        second: &Path,
        category: &str,
    ) -> Result<String> {
        let instruction = comparison_instruction(category);
        let body = serde_json::json!({
            "contents": [{
                "role": "user",
                "parts": [
                    { "text": instruction },
                    inline_image_part(first)?,
                    inline_image_part(second)?,
                ],
            }],
        });

        let url = format!("{}/{}:generateContent", API_BASE, self.model);
        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let error_text = resp.text().await.unwrap_or_default();
            return Err(CompareError::narrative(format!(
                "Gemini API error ({}): {}",
                status, error_text
            )));
        }

        let response_json: serde_json::Value = resp.json().await?;
        response_json["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| CompareError::narrative("No text in Gemini response"))
    }
}

/// Fixed comparison instruction, parameterized by category
fn comparison_instruction(category: &str) -> String {
    format!(
        "On the basis of the two homepage screenshots provided, which website do you \
         think is better in terms of UI/UX? Give reasons as well as recommendations \
         to improve the UI and visual appeal for a {} website.",
        category
    )
}

/// Read a PNG from disk and wrap it as an inline base64 request part
fn inline_image_part(path: &Path) -> Result<serde_json::Value> {
    let bytes = fs::read(path).map_err(|e| {
        CompareError::narrative(format!("Cannot read image {}: {}", path.display(), e))
    })?;

    Ok(serde_json::json!({
        "inline_data": {
            "mime_type": "image/png",
            "data": BASE64.encode(bytes),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_mentions_category() {
        let instruction = comparison_instruction("Ecommerce");
        assert!(instruction.contains("Ecommerce"));
        assert!(instruction.contains("UI/UX"));
    }

    #[test]
    fn test_inline_part_encodes_file_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        fs::write(&path, b"not-really-a-png").unwrap();

        let part = inline_image_part(&path).unwrap();
        assert_eq!(part["inline_data"]["mime_type"], "image/png");
        assert_eq!(
            part["inline_data"]["data"],
            BASE64.encode(b"not-really-a-png")
        );
    }

    #[test]
    fn test_inline_part_missing_file() {
        assert!(inline_image_part(Path::new("no/such/shot.png")).is_err());
    }

    #[test]
    fn test_client_requires_api_key() {
        let mut config = Config::default();
        config.gemini.api_key = None;
        assert!(matches!(
            GeminiClient::from_config(&config),
            Err(CompareError::MissingApiKey)
        ));
    }
}
