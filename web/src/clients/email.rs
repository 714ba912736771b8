use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use storage::models::Role;

use crate::error::WebError;

#[derive(Debug, Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: String,
    body: String,
}

/// Client for the transactional email service; used only for invitation
/// delivery.
#[derive(Clone)]
pub struct EmailClient {
    client: Client,
    base_url: String,
    api_key: String,
    sender: String,
}

impl EmailClient {
    pub fn new(base_url: String, api_key: String, sender: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            api_key,
            sender,
        }
    }

    pub async fn send_invitation(
        &self,
        to: &str,
        role: Role,
        access_code: &str,
    ) -> Result<(), WebError> {
        let subject = "Your EdBlazon invitation".to_string();
        let body = format!(
            "You have been invited to join EdBlazon as {}.\n\n\
             Sign up and redeem your access code: {}\n\n\
             The code is single-use.",
            role.as_token(),
            access_code
        );

        let request = SendEmailRequest {
            from: &self.sender,
            to,
            subject,
            body,
        };

        let response = self
            .client
            .post(format!("{}/v1/send", self.base_url))
            .header("x-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| WebError::External(format!("Email service unreachable: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(WebError::External(format!(
                "Invitation email failed ({}): {}",
                status, detail
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Only run against a live email sandbox
    async fn test_send_invitation() {
        let client = EmailClient::new(
            "http://localhost:8025".to_string(),
            "test-key".to_string(),
            "noreply@edblazon.example".to_string(),
        );
        let result = client
            .send_invitation("someone@example.com", Role::Animator, "A2B3C4")
            .await;
        assert!(result.is_ok());
    }
}
