use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "finance_status", rename_all = "snake_case")]
pub enum FinanceStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FinanceRequest {
    pub request_id: Uuid,
    pub title: String,
    pub description: String,
    pub amount_cents: i64,
    pub status: FinanceStatus,
    pub requested_by: String,
    pub reviewed_by: Option<String>,
    pub review_note: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub reviewed_at: Option<chrono::NaiveDateTime>,
}
