use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::Meeting;
use crate::services::targeting::AttendeeGroup;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MeetingResponse {
    pub meeting_id: Uuid,
    pub title: String,
    pub agenda: String,
    pub venue: String,
    pub scheduled_at: NaiveDateTime,
    pub attendee_groups: Vec<String>,
    pub attendees: Vec<String>,
    pub attendee_count: usize,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

impl From<Meeting> for MeetingResponse {
    fn from(meeting: Meeting) -> Self {
        let attendees = meeting.attendees.0;
        Self {
            meeting_id: meeting.meeting_id,
            title: meeting.title,
            agenda: meeting.agenda,
            venue: meeting.venue,
            scheduled_at: meeting.scheduled_at,
            attendee_groups: meeting.attendee_groups.0,
            attendee_count: attendees.len(),
            attendees,
            created_by: meeting.created_by,
            created_at: meeting.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMeetingRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Agenda is required"))]
    pub agenda: String,

    #[validate(length(min = 1, max = 200, message = "Venue is required"))]
    pub venue: String,

    pub scheduled_at: NaiveDateTime,

    /// Attendee group tokens (`all`, `jga_all`, `jga_sports`, ...).
    #[serde(default)]
    pub groups: Vec<String>,
}

impl CreateMeetingRequest {
    /// Every submitted token must parse to a known group.
    pub fn validate_groups(&self) -> Result<(), String> {
        for token in &self.groups {
            if AttendeeGroup::parse(token).is_none() {
                return Err(format!("Unknown attendee group: {token}"));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMeetingRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 5000))]
    pub agenda: Option<String>,

    #[validate(length(min = 1, max = 200))]
    pub venue: Option<String>,

    pub scheduled_at: Option<NaiveDateTime>,

    /// Replacement group tokens; attendees are re-resolved when present.
    pub groups: Option<Vec<String>>,
}

impl UpdateMeetingRequest {
    pub fn validate_groups(&self) -> Result<(), String> {
        let Some(groups) = &self.groups else {
            return Ok(());
        };
        for token in groups {
            if AttendeeGroup::parse(token).is_none() {
                return Err(format!("Unknown attendee group: {token}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(groups: Vec<&str>) -> CreateMeetingRequest {
        CreateMeetingRequest {
            title: "Domain sync".to_string(),
            agenda: "Fixture planning".to_string(),
            venue: "Room 12".to_string(),
            scheduled_at: NaiveDate::from_ymd_opt(2026, 2, 9)
                .unwrap()
                .and_hms_opt(18, 0, 0)
                .unwrap(),
            groups: groups.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn test_known_groups_pass() {
        assert!(request(vec!["all"]).validate_groups().is_ok());
        assert!(
            request(vec!["jga_all", "animator_sports"])
                .validate_groups()
                .is_ok()
        );
    }

    #[test]
    fn test_unknown_group_is_rejected() {
        assert!(request(vec!["jga_all", "referees"]).validate_groups().is_err());
    }
}
