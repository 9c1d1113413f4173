use std::sync::Arc;

use chrono::Utc;
use rocket::{serde::json::Json, State};
use tracing::{info, warn};
use trophy_board_server::{
    github::GithubClient,
    messages::MessageLoader,
    store::SessionStore,
    types::{ErrorResponse, ProfileResponse, SessionResponse},
};

use super::ApiError;

#[utoipa::path(context_path = "/api/users", responses(
    (status = 200, description = "Profile with achievement cards", body = ProfileResponse),
    (status = 404, description = "Unknown username", body = ErrorResponse)
))]
#[get("/<username>")]
async fn lookup_profile(
    username: &str,
    github: &State<Arc<GithubClient>>,
    store: &State<Arc<SessionStore>>,
    messages: &State<Arc<MessageLoader>>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let token = store.begin_lookup();

    let profile = match github.fetch_profile(username).await {
        Ok(profile) => profile,
        Err(e) => {
            warn!("Profile lookup for {username} failed: {e}");
            return Err(ApiError::profile(e, messages));
        }
    };

    // Full recompute of the unlocked-set on every successful fetch.
    let unlocked = shared::evaluate(&profile, Utc::now());

    match store.commit(token, profile.clone(), unlocked.clone()).await {
        Ok(true) => {}
        // A newer lookup won the session slot; this caller still gets
        // the data it asked for.
        Ok(false) => info!("Discarding stale lookup result for {username}"),
        Err(e) => rocket::error!("Failed to persist session for {username}: {e:#}"),
    }

    Ok(Json(ProfileResponse::new(
        profile,
        unlocked,
        messages.profile_loaded(username),
    )))
}

#[utoipa::path(context_path = "/api", responses(
    (status = 200, description = "Last persisted session, empty when none", body = SessionResponse)
))]
#[get("/session")]
async fn get_session(store: &State<Arc<SessionStore>>) -> Json<SessionResponse> {
    let session = store.session().await;
    Json(SessionResponse::new(session.profile, session.unlocked))
}

pub fn stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("Installing profile entrypoints", |rocket| async {
        rocket
            .mount("/api/users", rocket::routes![lookup_profile])
            .mount("/api", rocket::routes![get_session])
    })
}
