use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Fixture, FixtureStatus};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FixtureResponse {
    pub fixture_id: Uuid,
    pub sport: String,
    pub home_team_id: Uuid,
    pub away_team_id: Uuid,
    pub venue: String,
    pub scheduled_at: NaiveDateTime,
    pub status: FixtureStatus,
    pub result: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<Fixture> for FixtureResponse {
    fn from(fixture: Fixture) -> Self {
        Self {
            fixture_id: fixture.fixture_id,
            sport: fixture.sport,
            home_team_id: fixture.home_team_id,
            away_team_id: fixture.away_team_id,
            venue: fixture.venue,
            scheduled_at: fixture.scheduled_at,
            status: fixture.status,
            result: fixture.result,
            created_at: fixture.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFixtureRequest {
    #[validate(length(min = 1, max = 120, message = "Sport is required"))]
    pub sport: String,

    pub home_team_id: Uuid,
    pub away_team_id: Uuid,

    #[validate(length(min = 1, max = 200, message = "Venue is required"))]
    pub venue: String,

    pub scheduled_at: NaiveDateTime,
}

impl CreateFixtureRequest {
    pub fn validate_teams(&self) -> Result<(), String> {
        if self.home_team_id == self.away_team_id {
            return Err("A team cannot play against itself".to_string());
        }
        Ok(())
    }
}

/// Move a fixture through its lifecycle; a result string is only
/// meaningful once the fixture is completed.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateFixtureStatusRequest {
    pub status: FixtureStatus,

    #[validate(length(min = 1, max = 500))]
    pub result: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_fixture_teams_must_differ() {
        let team = Uuid::new_v4();
        let req = CreateFixtureRequest {
            sport: "Football".to_string(),
            home_team_id: team,
            away_team_id: team,
            venue: "North ground".to_string(),
            scheduled_at: NaiveDate::from_ymd_opt(2026, 2, 11)
                .unwrap()
                .and_hms_opt(16, 0, 0)
                .unwrap(),
        };
        assert!(req.validate_teams().is_err());
    }
}
