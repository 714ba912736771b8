use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::{Domain, Role, User};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub uid: String,
    pub display_name: String,
    pub email: String,
    pub role: Role,
    pub domain: Option<Domain>,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            uid: user.uid,
            display_name: user.display_name,
            email: user.email,
            role: user.role,
            domain: user.domain,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// Self-registration; the caller becomes a `student`. Elevated roles only
/// exist through invitations.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterUserRequest {
    #[validate(length(
        min = 1,
        max = 120,
        message = "Display name must be between 1 and 120 characters"
    ))]
    pub display_name: String,

    #[validate(email(message = "A valid email address is required"))]
    pub email: String,

    pub domain: Option<Domain>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRoleRequest {
    pub role: Role,
    pub domain: Option<Domain>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListUsersQuery {
    pub role: Option<Role>,
    pub domain: Option<Domain>,
}
