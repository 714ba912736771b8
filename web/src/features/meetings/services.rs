use storage::dto::meeting::{CreateMeetingRequest, MeetingResponse, UpdateMeetingRequest};
use storage::models::{Role, User};
use storage::repository::meeting::MeetingRepository;
use storage::repository::notification::NotificationRepository;
use storage::repository::user::UserRepository;
use storage::services::targeting::AttendeeGroup;
use uuid::Uuid;

use crate::error::{WebError, WebResult};
use crate::state::AppState;

/// Schedule a meeting: expand the group tokens to concrete attendees,
/// store both, and notify every attendee.
pub async fn create_meeting(
    state: &AppState,
    convener: &User,
    req: &CreateMeetingRequest,
) -> WebResult<MeetingResponse> {
    let groups = AttendeeGroup::parse_all(&req.groups);

    let users = UserRepository::new(state.db.pool());
    let attendees = users.find_uids_in_groups(&groups).await?;

    let repo = MeetingRepository::new(state.db.pool());
    let meeting = repo.create(req, attendees, &convener.uid).await?;

    let notifications = NotificationRepository::new(state.db.pool());
    notifications
        .insert_for(
            &meeting.attendees.0,
            &format!("Meeting: {}", meeting.title),
            &format!(
                "{} at {}. Agenda: {}",
                meeting.scheduled_at, meeting.venue, meeting.agenda
            ),
            "meeting",
        )
        .await?;

    tracing::info!(
        meeting = %meeting.meeting_id,
        attendees = meeting.attendees.0.len(),
        "Meeting scheduled"
    );

    Ok(MeetingResponse::from(meeting))
}

pub async fn list_for_user(state: &AppState, user: &User) -> WebResult<Vec<MeetingResponse>> {
    let repo = MeetingRepository::new(state.db.pool());
    let meetings = repo.list_for_user(&user.uid).await?;

    Ok(meetings.into_iter().map(MeetingResponse::from).collect())
}

pub async fn get_meeting(state: &AppState, user: &User, id: Uuid) -> WebResult<MeetingResponse> {
    let repo = MeetingRepository::new(state.db.pool());
    let meeting = repo.find_by_id(id).await?;

    let is_attendee = meeting.attendees.0.iter().any(|uid| uid == &user.uid);
    if !is_attendee && meeting.created_by != user.uid && !user.role.is_admin() {
        return Err(WebError::Forbidden(
            "Not an attendee or the convener of this meeting".to_string(),
        ));
    }

    Ok(MeetingResponse::from(meeting))
}

/// Only the convener may edit. Changed group tokens re-resolve the
/// attendee list; newly added attendees are notified.
pub async fn update_meeting(
    state: &AppState,
    user: &User,
    id: Uuid,
    req: &UpdateMeetingRequest,
) -> WebResult<MeetingResponse> {
    let repo = MeetingRepository::new(state.db.pool());
    let existing = repo.find_by_id(id).await?;

    if existing.created_by != user.uid {
        return Err(WebError::Forbidden(
            "Only the convener may update a meeting".to_string(),
        ));
    }

    let attendees = match &req.groups {
        Some(tokens) => {
            let groups = AttendeeGroup::parse_all(tokens);
            let users = UserRepository::new(state.db.pool());
            Some(users.find_uids_in_groups(&groups).await?)
        }
        None => None,
    };

    let newly_added: Vec<String> = match &attendees {
        Some(resolved) => resolved
            .iter()
            .filter(|uid| !existing.attendees.0.contains(uid))
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    let meeting = repo.update(id, &existing, req, attendees).await?;

    let notifications = NotificationRepository::new(state.db.pool());
    notifications
        .insert_for(
            &newly_added,
            &format!("Meeting: {}", meeting.title),
            &format!(
                "{} at {}. Agenda: {}",
                meeting.scheduled_at, meeting.venue, meeting.agenda
            ),
            "meeting",
        )
        .await?;

    Ok(MeetingResponse::from(meeting))
}

pub async fn delete_meeting(state: &AppState, user: &User, id: Uuid) -> WebResult<()> {
    let repo = MeetingRepository::new(state.db.pool());
    let meeting = repo.find_by_id(id).await?;

    if meeting.created_by != user.uid && user.role != Role::Ga {
        return Err(WebError::Forbidden(
            "Only the convener or a GA may cancel a meeting".to_string(),
        ));
    }

    repo.delete(id).await?;

    Ok(())
}
