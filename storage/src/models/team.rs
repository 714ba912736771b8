use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub team_id: Uuid,
    pub name: String,
    pub group_name: String,
    pub semester: i32,
    pub total_points: i64,
    pub created_at: chrono::NaiveDateTime,
}

/// One row of a team's append-only award log. `Team::total_points` is the
/// running sum over these rows; both are written in the same transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PointsEntry {
    pub entry_id: Uuid,
    pub team_id: Uuid,
    pub event_id: String,
    pub points: i64,
    pub position: i32,
    pub reason: String,
    pub awarded_by: String,
    pub awarded_at: chrono::NaiveDateTime,
}
