use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Domain, Event};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EventResponse {
    pub event_id: Uuid,
    pub title: String,
    pub description: String,
    pub domain: Domain,
    pub venue: String,
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    pub image_id: Option<String>,
    pub image_url: Option<String>,
    pub created_by: String,
    pub created_at: NaiveDateTime,
}

impl EventResponse {
    /// Build from the stored row plus the resolved public image URL.
    pub fn new(event: Event, image_url: Option<String>) -> Self {
        Self {
            event_id: event.event_id,
            title: event.title,
            description: event.description,
            domain: event.domain,
            venue: event.venue,
            starts_at: event.starts_at,
            ends_at: event.ends_at,
            image_id: event.image_id,
            image_url,
            created_by: event.created_by,
            created_at: event.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEventRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Description is required"))]
    pub description: String,

    pub domain: Domain,

    #[validate(length(min = 1, max = 200, message = "Venue is required"))]
    pub venue: String,

    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,

    /// Base64 poster image, uploaded to the image host on creation.
    pub image_base64: Option<String>,
}

impl CreateEventRequest {
    pub fn validate_schedule(&self) -> Result<(), String> {
        if self.ends_at <= self.starts_at {
            return Err("Event must end after it starts".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,

    #[validate(length(min = 1, max = 5000))]
    pub description: Option<String>,

    pub domain: Option<Domain>,

    #[validate(length(min = 1, max = 200))]
    pub venue: Option<String>,

    pub starts_at: Option<NaiveDateTime>,
    pub ends_at: Option<NaiveDateTime>,

    /// Replacement poster; the previous image is deleted from the host.
    pub image_base64: Option<String>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct ListEventsQuery {
    pub domain: Option<Domain>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn request(starts_h: u32, ends_h: u32) -> CreateEventRequest {
        let day = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();
        CreateEventRequest {
            title: "Quiz finals".to_string(),
            description: "General quiz".to_string(),
            domain: Domain::Literary,
            venue: "Main hall".to_string(),
            starts_at: day.and_hms_opt(starts_h, 0, 0).unwrap(),
            ends_at: day.and_hms_opt(ends_h, 0, 0).unwrap(),
            image_base64: None,
        }
    }

    #[test]
    fn test_schedule_must_be_ordered() {
        assert!(request(10, 12).validate_schedule().is_ok());
        assert!(request(12, 10).validate_schedule().is_err());
        assert!(request(10, 10).validate_schedule().is_err());
    }
}
