use std::sync::Arc;

use octocrab::Octocrab;
use shared::{Profile, Repository};
use tracing::instrument;

use crate::{error::FetchError, metrics::MetricsClient};

/// One fixed page of repositories; the upstream truncates beyond this
/// window and no client-side pagination is performed.
pub const REPOS_PER_PAGE: u8 = 30;

pub struct GithubClient {
    octocrab: Octocrab,
    metrics: Arc<MetricsClient>,
}

impl GithubClient {
    /// A token is optional: anonymous reads of the public API work, the
    /// token only raises the rate limit.
    pub fn new(github_token: Option<String>, metrics: Arc<MetricsClient>) -> anyhow::Result<Self> {
        let mut builder = Octocrab::builder();
        if let Some(token) = github_token {
            builder = builder.personal_token(token);
        }

        Ok(Self {
            octocrab: builder.build()?,
            metrics,
        })
    }

    /// Fetches the public profile for `username` and maps the consumed
    /// fields verbatim, without range validation.
    #[instrument(skip(self))]
    pub async fn fetch_profile(&self, username: &str) -> Result<Profile, FetchError> {
        let route = format!("/users/{username}");
        let result: Result<Profile, octocrab::Error> =
            self.octocrab.get(route, None::<&()>).await;
        self.metrics.add_read_request("profile", result.is_ok());

        result.map_err(|e| FetchError::classify_profile(e, username))
    }

    /// Fetches the most-recently-updated page of public repositories.
    #[instrument(skip(self))]
    pub async fn fetch_repos(&self, username: &str) -> Result<Vec<Repository>, FetchError> {
        let route = format!("/users/{username}/repos?sort=updated&per_page={REPOS_PER_PAGE}");
        let result: Result<Vec<Repository>, octocrab::Error> =
            self.octocrab.get(route, None::<&()>).await;
        self.metrics.add_read_request("repos", result.is_ok());

        result.map_err(FetchError::classify_repos)
    }
}
