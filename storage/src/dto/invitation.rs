use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Domain, Invitation, InvitationStatus, Role};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InvitationResponse {
    pub invitation_id: Uuid,
    pub email: String,
    pub role: Role,
    pub domain: Option<Domain>,
    pub access_code: String,
    pub invited_by: String,
    pub status: InvitationStatus,
    pub accepted_by: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<Invitation> for InvitationResponse {
    fn from(invitation: Invitation) -> Self {
        Self {
            invitation_id: invitation.invitation_id,
            email: invitation.email,
            role: invitation.role,
            domain: invitation.domain,
            access_code: invitation.access_code,
            invited_by: invitation.invited_by,
            status: invitation.status,
            accepted_by: invitation.accepted_by,
            created_at: invitation.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateInvitationRequest {
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    pub role: Role,
    pub domain: Option<Domain>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RedeemInvitationRequest {
    #[validate(length(equal = 6, message = "Access code must be 6 characters"))]
    pub access_code: String,

    #[validate(length(
        min = 1,
        max = 120,
        message = "Display name must be between 1 and 120 characters"
    ))]
    pub display_name: String,
}

impl RedeemInvitationRequest {
    /// Codes are stored uppercase; accept whatever casing the user typed.
    pub fn normalized_code(&self) -> String {
        self.access_code.trim().to_ascii_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::access_code::CODE_LENGTH;

    #[test]
    fn test_code_normalization() {
        let req = RedeemInvitationRequest {
            access_code: " a2b3c4 ".to_string(),
            display_name: "Priya".to_string(),
        };
        assert_eq!(req.normalized_code(), "A2B3C4");
        assert_eq!(req.normalized_code().len(), CODE_LENGTH);
    }
}
