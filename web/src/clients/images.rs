use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::WebError;

#[derive(Debug, Serialize)]
struct UploadRequest<'a> {
    data: &'a str,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    image_id: String,
}

/// Client for the image host. Images are addressed by the opaque
/// identifier the host returns on upload.
#[derive(Clone)]
pub struct ImageClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl ImageClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            // Poster uploads can be large.
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            api_key,
        }
    }

    pub async fn upload_base64(&self, data: &str) -> Result<String, WebError> {
        let response = self
            .client
            .post(format!("{}/v1/images", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&UploadRequest { data })
            .send()
            .await
            .map_err(|e| WebError::External(format!("Image host unreachable: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(WebError::External(format!(
                "Image upload failed ({}): {}",
                status, detail
            )));
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| WebError::External(format!("Failed to parse upload response: {}", e)))?;

        Ok(uploaded.image_id)
    }

    /// Delete by identifier. A 404 from the host is treated as success;
    /// the image is gone either way.
    pub async fn delete(&self, image_id: &str) -> Result<(), WebError> {
        let response = self
            .client
            .delete(format!("{}/v1/images/{}", self.base_url, image_id))
            .header("x-api-key", &self.api_key)
            .send()
            .await
            .map_err(|e| WebError::External(format!("Image host unreachable: {}", e)))?;

        if !response.status().is_success() && response.status() != reqwest::StatusCode::NOT_FOUND {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(WebError::External(format!(
                "Image delete failed ({}): {}",
                status, detail
            )));
        }

        Ok(())
    }

    pub fn public_url(&self, image_id: &str) -> String {
        format!("{}/v1/images/{}", self.base_url, image_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_url_shape() {
        let client = ImageClient::new("https://img.example".to_string(), "k".to_string());
        assert_eq!(
            client.public_url("abc123"),
            "https://img.example/v1/images/abc123"
        );
    }
}
