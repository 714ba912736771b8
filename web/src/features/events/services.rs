use storage::dto::event::{
    CreateEventRequest, EventResponse, ListEventsQuery, UpdateEventRequest,
};
use storage::models::{Event, User};
use storage::repository::event::EventRepository;
use uuid::Uuid;

use crate::error::WebResult;
use crate::state::AppState;

fn to_response(state: &AppState, event: Event) -> EventResponse {
    let image_url = event
        .image_id
        .as_deref()
        .map(|id| state.images.public_url(id));
    EventResponse::new(event, image_url)
}

pub async fn list_events(state: &AppState, query: &ListEventsQuery) -> WebResult<Vec<EventResponse>> {
    let repo = EventRepository::new(state.db.pool());
    let events = repo.list(query.domain).await?;

    Ok(events
        .into_iter()
        .map(|event| to_response(state, event))
        .collect())
}

pub async fn get_event(state: &AppState, id: Uuid) -> WebResult<EventResponse> {
    let repo = EventRepository::new(state.db.pool());
    let event = repo.find_by_id(id).await?;

    Ok(to_response(state, event))
}

pub async fn create_event(
    state: &AppState,
    user: &User,
    req: &CreateEventRequest,
) -> WebResult<EventResponse> {
    let image_id = match &req.image_base64 {
        Some(data) => Some(state.images.upload_base64(data).await?),
        None => None,
    };

    let repo = EventRepository::new(state.db.pool());
    let event = repo.create(req, image_id.as_deref(), &user.uid).await?;

    Ok(to_response(state, event))
}

pub async fn update_event(
    state: &AppState,
    id: Uuid,
    req: &UpdateEventRequest,
) -> WebResult<EventResponse> {
    let repo = EventRepository::new(state.db.pool());
    let existing = repo.find_by_id(id).await?;

    let image_id = match &req.image_base64 {
        Some(data) => {
            let new_id = state.images.upload_base64(data).await?;
            if let Some(old_id) = &existing.image_id {
                // The replaced poster is best-effort cleanup; the new one
                // is already live.
                if let Err(e) = state.images.delete(old_id).await {
                    tracing::warn!("Failed to delete replaced image {}: {}", old_id, e);
                }
            }
            Some(new_id)
        }
        None => existing.image_id.clone(),
    };

    let event = repo.update(id, &existing, req, image_id).await?;

    Ok(to_response(state, event))
}

pub async fn delete_event(state: &AppState, id: Uuid) -> WebResult<()> {
    let repo = EventRepository::new(state.db.pool());
    let event = repo.delete(id).await?;

    if let Some(image_id) = &event.image_id {
        if let Err(e) = state.images.delete(image_id).await {
            tracing::warn!("Failed to delete image {} for removed event: {}", image_id, e);
        }
    }

    Ok(())
}
