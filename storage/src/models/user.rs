use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Administrative tiers of the festival, highest authority first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "user_role", rename_all = "snake_case")]
pub enum Role {
    Ga,
    Jga,
    Animator,
    Volunteer,
    Student,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Ga,
        Role::Jga,
        Role::Animator,
        Role::Volunteer,
        Role::Student,
    ];

    /// Numeric rank; lower means higher authority. Animators and volunteers
    /// share a tier.
    pub fn rank(self) -> u8 {
        match self {
            Role::Ga => 0,
            Role::Jga => 1,
            Role::Animator | Role::Volunteer => 2,
            Role::Student => 3,
        }
    }

    /// True iff this role outranks `other`. Irreflexive: no role has
    /// authority over its own tier.
    pub fn has_authority_over(self, other: Role) -> bool {
        self.rank() < other.rank()
    }

    pub fn is_admin(self) -> bool {
        matches!(self, Role::Ga | Role::Jga)
    }

    pub fn as_token(self) -> &'static str {
        match self {
            Role::Ga => "ga",
            Role::Jga => "jga",
            Role::Animator => "animator",
            Role::Volunteer => "volunteer",
            Role::Student => "student",
        }
    }

    pub fn from_token(token: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|r| r.as_token() == token)
    }
}

/// Thematic sub-category of activity, shared by users and events.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "activity_domain", rename_all = "snake_case")]
pub enum Domain {
    Sports,
    Literary,
    PerformingCreativeArts,
    Club,
    Miscellaneous,
}

impl Domain {
    pub const ALL: [Domain; 5] = [
        Domain::Sports,
        Domain::Literary,
        Domain::PerformingCreativeArts,
        Domain::Club,
        Domain::Miscellaneous,
    ];

    pub fn as_token(self) -> &'static str {
        match self {
            Domain::Sports => "sports",
            Domain::Literary => "literary",
            Domain::PerformingCreativeArts => "performing_creative_arts",
            Domain::Club => "club",
            Domain::Miscellaneous => "miscellaneous",
        }
    }

    pub fn from_token(token: &str) -> Option<Domain> {
        Domain::ALL.into_iter().find(|d| d.as_token() == token)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub uid: String,
    pub display_name: String,
    pub email: String,
    pub role: Role,
    pub domain: Option<Domain>,
    pub is_active: bool,
    pub created_at: chrono::NaiveDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ga_outranks_student() {
        assert!(Role::Ga.has_authority_over(Role::Student));
        assert!(!Role::Student.has_authority_over(Role::Ga));
    }

    #[test]
    fn test_authority_is_irreflexive() {
        for role in Role::ALL {
            assert!(!role.has_authority_over(role));
        }
    }

    #[test]
    fn test_animator_and_volunteer_share_a_tier() {
        assert!(!Role::Animator.has_authority_over(Role::Volunteer));
        assert!(!Role::Volunteer.has_authority_over(Role::Animator));
        assert!(Role::Jga.has_authority_over(Role::Animator));
        assert!(Role::Animator.has_authority_over(Role::Student));
    }

    #[test]
    fn test_role_tokens_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_token(role.as_token()), Some(role));
        }
        assert_eq!(Role::from_token("janitor"), None);
    }

    #[test]
    fn test_domain_tokens_round_trip() {
        for domain in Domain::ALL {
            assert_eq!(Domain::from_token(domain.as_token()), Some(domain));
        }
        assert_eq!(Domain::from_token("sport"), None);
    }
}
