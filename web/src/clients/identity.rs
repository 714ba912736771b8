use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use storage::models::{Domain, Role};

use crate::error::WebError;

#[derive(Debug, Deserialize)]
pub struct VerifiedIdentity {
    pub uid: String,
    pub email: Option<String>,
}

#[derive(Debug, Serialize)]
struct VerifyTokenRequest<'a> {
    token: &'a str,
}

#[derive(Debug, Serialize)]
struct AssignClaimsRequest {
    role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<Domain>,
}

/// Client for the external identity provider: bearer-token verification
/// and custom-claim assignment. Accounts themselves live with the
/// provider; this service only stores the matching profile rows.
#[derive(Clone)]
pub struct IdentityClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl IdentityClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            api_key,
        }
    }

    /// Resolve a bearer token to the identity it belongs to. Rejection by
    /// the provider maps to 401; anything else unexpected is an internal
    /// failure.
    pub async fn verify_token(&self, token: &str) -> Result<VerifiedIdentity, WebError> {
        let response = self
            .client
            .post(format!("{}/v1/tokens/verify", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&VerifyTokenRequest { token })
            .send()
            .await
            .map_err(|e| WebError::External(format!("Identity provider unreachable: {}", e)))?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(WebError::Unauthorized(
                    "Invalid or expired token".to_string(),
                ));
            }
            status if !status.is_success() => {
                let detail = response.text().await.unwrap_or_default();
                return Err(WebError::External(format!(
                    "Identity provider error ({}): {}",
                    status, detail
                )));
            }
            _ => {}
        }

        let identity: VerifiedIdentity = response.json().await.map_err(|e| {
            WebError::External(format!("Failed to parse identity response: {}", e))
        })?;

        Ok(identity)
    }

    /// Attach role/domain custom claims to a provider account so the
    /// frontend can route dashboards without a profile round trip.
    pub async fn assign_role_claim(
        &self,
        uid: &str,
        role: Role,
        domain: Option<Domain>,
    ) -> Result<(), WebError> {
        let response = self
            .client
            .post(format!("{}/v1/users/{}/claims", self.base_url, uid))
            .header("x-api-key", &self.api_key)
            .json(&AssignClaimsRequest { role, domain })
            .send()
            .await
            .map_err(|e| WebError::External(format!("Identity provider unreachable: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(WebError::External(format!(
                "Failed to assign claims ({}): {}",
                status, detail
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> IdentityClient {
        IdentityClient::new(
            "http://localhost:9099".to_string(),
            "test-key".to_string(),
        )
    }

    #[tokio::test]
    #[ignore] // Only run against a live identity emulator
    async fn test_verify_rejects_garbage_token() {
        let result = client().verify_token("not-a-token").await;
        assert!(matches!(result, Err(WebError::Unauthorized(_))));
    }
}
