use anyhow::Context;
use axum::Router;
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod clients;
mod config;
mod error;
mod features;
mod middleware;
mod response;
mod state;

use clients::email::EmailClient;
use clients::identity::IdentityClient;
use clients::images::ImageClient;
use config::Config;
use state::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::users::handlers::register,
        features::users::handlers::list_users,
        features::users::handlers::get_me,
        features::users::handlers::get_user,
        features::users::handlers::update_role,
        features::users::handlers::deactivate_user,
        features::invitations::handlers::create_invitation,
        features::invitations::handlers::list_invitations,
        features::invitations::handlers::redeem_invitation,
        features::invitations::handlers::revoke_invitation,
        features::events::handlers::list_events,
        features::events::handlers::get_event,
        features::events::handlers::create_event,
        features::events::handlers::update_event,
        features::events::handlers::delete_event,
        features::sports::handlers::list_teams,
        features::sports::handlers::create_team,
        features::sports::handlers::get_team,
        features::sports::handlers::delete_team,
        features::sports::handlers::award_points,
        features::sports::handlers::list_fixtures,
        features::sports::handlers::create_fixture,
        features::sports::handlers::get_fixture,
        features::sports::handlers::update_fixture_status,
        features::sports::handlers::delete_fixture,
        features::finance::handlers::create_request,
        features::finance::handlers::list_requests,
        features::finance::handlers::get_request,
        features::finance::handlers::review_request,
        features::finance::handlers::delete_request,
        features::chat::handlers::list_messages,
        features::chat::handlers::send_message,
        features::announcements::handlers::create_announcement,
        features::announcements::handlers::list_announcements,
        features::announcements::handlers::delete_announcement,
        features::meetings::handlers::create_meeting,
        features::meetings::handlers::list_meetings,
        features::meetings::handlers::get_meeting,
        features::meetings::handlers::update_meeting,
        features::meetings::handlers::delete_meeting,
        features::notifications::handlers::list_notifications,
        features::notifications::handlers::mark_read,
        features::notifications::handlers::mark_all_read,
        features::notifications::handlers::delete_notification,
    ),
    components(
        schemas(
            storage::models::user::Role,
            storage::models::user::Domain,
            storage::models::fixture::FixtureStatus,
            storage::models::finance::FinanceStatus,
            storage::models::invitation::InvitationStatus,
            storage::dto::user::UserResponse,
            storage::dto::user::RegisterUserRequest,
            storage::dto::user::UpdateRoleRequest,
            storage::dto::invitation::InvitationResponse,
            storage::dto::invitation::CreateInvitationRequest,
            storage::dto::invitation::RedeemInvitationRequest,
            storage::dto::event::EventResponse,
            storage::dto::event::CreateEventRequest,
            storage::dto::event::UpdateEventRequest,
            storage::dto::team::TeamResponse,
            storage::dto::team::TeamDetailResponse,
            storage::dto::team::PointsEntryResponse,
            storage::dto::team::CreateTeamRequest,
            storage::dto::team::AwardPointsRequest,
            storage::dto::fixture::FixtureResponse,
            storage::dto::fixture::CreateFixtureRequest,
            storage::dto::fixture::UpdateFixtureStatusRequest,
            storage::dto::finance::FinanceResponse,
            storage::dto::finance::CreateFinanceRequest,
            storage::dto::finance::ReviewFinanceRequest,
            storage::dto::finance::ReviewDecision,
            storage::dto::chat::ChatMessageResponse,
            storage::dto::chat::SendMessageRequest,
            storage::dto::announcement::AnnouncementResponse,
            storage::dto::announcement::CreateAnnouncementRequest,
            storage::dto::meeting::MeetingResponse,
            storage::dto::meeting::CreateMeetingRequest,
            storage::dto::meeting::UpdateMeetingRequest,
            storage::dto::notification::NotificationResponse,
            storage::dto::common::PaginationMeta,
        )
    ),
    tags(
        (name = "users", description = "Accounts and role management"),
        (name = "invitations", description = "Access-code invitations"),
        (name = "events", description = "Festival events"),
        (name = "sports", description = "Teams, leaderboard and fixtures"),
        (name = "finance", description = "Finance requests"),
        (name = "chat", description = "Team chat channels"),
        (name = "announcements", description = "Targeted announcements"),
        (name = "meetings", description = "Meetings with resolved attendee groups"),
        (name = "notifications", description = "Per-user notifications"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting SECONS API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let state = AppState {
        db,
        identity: IdentityClient::new(config.identity_base_url.clone(), config.identity_api_key.clone()),
        images: ImageClient::new(config.image_base_url.clone(), config.image_api_key.clone()),
        email: EmailClient::new(
            config.email_base_url.clone(),
            config.email_api_key.clone(),
            config.email_sender.clone(),
        ),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/users", features::users::routes::routes(state.clone()))
        .nest(
            "/api/invitations",
            features::invitations::routes::routes(state.clone()),
        )
        .nest("/api/events", features::events::routes::routes(state.clone()))
        .nest(
            "/api/teams",
            features::sports::routes::team_routes(state.clone()),
        )
        .nest(
            "/api/fixtures",
            features::sports::routes::fixture_routes(state.clone()),
        )
        .nest("/api/finance", features::finance::routes::routes(state.clone()))
        .nest("/api/chat", features::chat::routes::routes(state.clone()))
        .nest(
            "/api/announcements",
            features::announcements::routes::routes(state.clone()),
        )
        .nest(
            "/api/meetings",
            features::meetings::routes::routes(state.clone()),
        )
        .nest(
            "/api/notifications",
            features::notifications::routes::routes(state.clone()),
        )
        .layer(cors)
        .with_state(state);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .context("Failed to bind listener")?;
    axum::serve(listener, app).await?;

    Ok(())
}
