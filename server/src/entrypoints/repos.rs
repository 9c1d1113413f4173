use std::str::FromStr;
use std::sync::Arc;

use rocket::{serde::json::Json, State};
use shared::{sort_repos, SortMode};
use tracing::warn;
use trophy_board_server::{
    github::GithubClient,
    messages::MessageLoader,
    types::{ErrorResponse, RepoResponse},
};

use super::ApiError;

#[utoipa::path(context_path = "/api/users", responses(
    (status = 200, description = "Up to 30 repositories in the requested order", body = Vec<RepoResponse>),
    (status = 422, description = "Unknown sort mode", body = ErrorResponse)
))]
#[get("/<username>/repos?<sort>")]
async fn list_repos(
    username: &str,
    sort: Option<&str>,
    github: &State<Arc<GithubClient>>,
    messages: &State<Arc<MessageLoader>>,
) -> Result<Json<Vec<RepoResponse>>, ApiError> {
    let mode = match sort {
        None => SortMode::default(),
        Some(value) => SortMode::from_str(value).map_err(|_| ApiError::unknown_sort(value))?,
    };

    let repos = match github.fetch_repos(username).await {
        Ok(repos) => repos,
        Err(e) => {
            warn!("Repository fetch for {username} failed: {e}");
            return Err(ApiError::repos(e, messages));
        }
    };

    let repos = sort_repos(repos, mode);
    Ok(Json(repos.into_iter().map(RepoResponse::from).collect()))
}

pub fn stage() -> rocket::fairing::AdHoc {
    rocket::fairing::AdHoc::on_ignite("Installing repository entrypoints", |rocket| async {
        rocket.mount("/api/users", rocket::routes![list_repos])
    })
}
