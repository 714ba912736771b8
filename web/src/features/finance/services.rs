use storage::dto::finance::{CreateFinanceRequest, FinanceResponse, ReviewFinanceRequest};
use storage::models::{FinanceStatus, Role, User};
use storage::repository::finance::FinanceRepository;
use storage::repository::notification::NotificationRepository;
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::state::AppState;

/// Animators and above may ask for money; students may not.
pub async fn create_request(
    state: &AppState,
    user: &User,
    req: &CreateFinanceRequest,
) -> WebResult<FinanceResponse> {
    if user.role == Role::Student {
        return Err(WebError::Forbidden(
            "Students cannot submit finance requests".to_string(),
        ));
    }

    let repo = FinanceRepository::new(state.db.pool());
    let request = repo.create(req, &user.uid).await?;

    Ok(FinanceResponse::from(request))
}

pub async fn list_requests(state: &AppState, user: &User) -> WebResult<Vec<FinanceResponse>> {
    let repo = FinanceRepository::new(state.db.pool());

    let requests = if user.role.is_admin() {
        repo.list_all().await?
    } else {
        repo.list_by_requester(&user.uid).await?
    };

    Ok(requests.into_iter().map(FinanceResponse::from).collect())
}

pub async fn get_request(state: &AppState, user: &User, id: Uuid) -> WebResult<FinanceResponse> {
    let repo = FinanceRepository::new(state.db.pool());
    let request = repo.find_by_id(id).await?;

    if !user.role.is_admin() && request.requested_by != user.uid {
        return Err(WebError::Forbidden(
            "Only the requester or an administrator can view this request".to_string(),
        ));
    }

    Ok(FinanceResponse::from(request))
}

pub async fn review_request(
    state: &AppState,
    reviewer: &User,
    id: Uuid,
    req: &ReviewFinanceRequest,
) -> WebResult<FinanceResponse> {
    let repo = FinanceRepository::new(state.db.pool());
    let reviewed = repo
        .review(id, req.decision.to_status(), &reviewer.uid, req.note.as_deref())
        .await?;

    let outcome = match reviewed.status {
        FinanceStatus::Approved => "approved",
        FinanceStatus::Rejected => "rejected",
        FinanceStatus::Pending => "pending",
    };

    let notifications = NotificationRepository::new(state.db.pool());
    notifications
        .insert_for(
            &[reviewed.requested_by.clone()],
            &format!("Finance request {}", outcome),
            &format!("Your request \"{}\" was {}.", reviewed.title, outcome),
            "finance",
        )
        .await?;

    Ok(FinanceResponse::from(reviewed))
}

pub async fn delete_request(state: &AppState, user: &User, id: Uuid) -> WebResult<()> {
    let repo = FinanceRepository::new(state.db.pool());
    repo.delete_pending(id, &user.uid).await?;

    Ok(())
}
