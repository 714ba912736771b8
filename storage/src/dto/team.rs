use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{PointsEntry, Team};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResponse {
    pub team_id: Uuid,
    pub name: String,
    pub group_name: String,
    pub semester: i32,
    pub total_points: i64,
    pub created_at: NaiveDateTime,
}

impl From<Team> for TeamResponse {
    fn from(team: Team) -> Self {
        Self {
            team_id: team.team_id,
            name: team.name,
            group_name: team.group_name,
            semester: team.semester,
            total_points: team.total_points,
            created_at: team.created_at,
        }
    }
}

/// Team with its full award log, newest last.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeamDetailResponse {
    pub team_id: Uuid,
    pub name: String,
    pub group_name: String,
    pub semester: i32,
    pub total_points: i64,
    pub created_at: NaiveDateTime,
    pub event_points: Vec<PointsEntryResponse>,
}

impl TeamDetailResponse {
    pub fn new(team: Team, entries: Vec<PointsEntry>) -> Self {
        Self {
            team_id: team.team_id,
            name: team.name,
            group_name: team.group_name,
            semester: team.semester,
            total_points: team.total_points,
            created_at: team.created_at,
            event_points: entries.into_iter().map(PointsEntryResponse::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointsEntryResponse {
    pub entry_id: Uuid,
    pub event_id: String,
    pub points: i64,
    pub position: i32,
    pub reason: String,
    pub awarded_by: String,
    pub awarded_at: NaiveDateTime,
}

impl From<PointsEntry> for PointsEntryResponse {
    fn from(entry: PointsEntry) -> Self {
        Self {
            entry_id: entry.entry_id,
            event_id: entry.event_id,
            points: entry.points,
            position: entry.position,
            reason: entry.reason,
            awarded_by: entry.awarded_by,
            awarded_at: entry.awarded_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[validate(length(
        min = 1,
        max = 120,
        message = "Team name must be between 1 and 120 characters"
    ))]
    pub name: String,

    #[validate(length(min = 1, max = 120, message = "Group name is required"))]
    pub group_name: String,

    #[validate(range(min = 1, max = 10, message = "Semester must be between 1 and 10"))]
    pub semester: i32,
}

/// Award (or deduct) points for an event placing. The delta may be
/// negative; a zero award is rejected as meaningless.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AwardPointsRequest {
    #[validate(length(min = 1, max = 120, message = "Event identifier is required"))]
    pub event_id: String,

    pub points: i64,

    #[validate(range(min = 1, message = "Position must be >= 1"))]
    pub position: i32,

    #[validate(length(min = 1, max = 500, message = "Reason is required"))]
    pub reason: String,
}

impl AwardPointsRequest {
    pub fn validate_points(&self) -> Result<(), String> {
        if self.points == 0 {
            return Err("Point delta must be non-zero".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_point_award_is_rejected() {
        let req = AwardPointsRequest {
            event_id: "E1".to_string(),
            points: 0,
            position: 1,
            reason: "tie".to_string(),
        };
        assert!(req.validate_points().is_err());
    }

    #[test]
    fn test_negative_award_is_allowed() {
        let req = AwardPointsRequest {
            event_id: "E1".to_string(),
            points: -5,
            position: 1,
            reason: "penalty".to_string(),
        };
        assert!(req.validate_points().is_ok());
    }
}
