use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{FinanceRequest, FinanceStatus};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FinanceResponse {
    pub request_id: Uuid,
    pub title: String,
    pub description: String,
    pub amount_cents: i64,
    pub status: FinanceStatus,
    pub requested_by: String,
    pub reviewed_by: Option<String>,
    pub review_note: Option<String>,
    pub created_at: NaiveDateTime,
    pub reviewed_at: Option<NaiveDateTime>,
}

impl From<FinanceRequest> for FinanceResponse {
    fn from(request: FinanceRequest) -> Self {
        Self {
            request_id: request.request_id,
            title: request.title,
            description: request.description,
            amount_cents: request.amount_cents,
            status: request.status,
            requested_by: request.requested_by,
            reviewed_by: request.reviewed_by,
            review_note: request.review_note,
            created_at: request.created_at,
            reviewed_at: request.reviewed_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateFinanceRequest {
    #[validate(length(
        min = 1,
        max = 200,
        message = "Title must be between 1 and 200 characters"
    ))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Description is required"))]
    pub description: String,

    #[validate(range(min = 1, message = "Amount must be positive"))]
    pub amount_cents: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn to_status(self) -> FinanceStatus {
        match self {
            ReviewDecision::Approve => FinanceStatus::Approved,
            ReviewDecision::Reject => FinanceStatus::Rejected,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct ReviewFinanceRequest {
    pub decision: ReviewDecision,

    #[validate(length(max = 1000))]
    pub note: Option<String>,
}
