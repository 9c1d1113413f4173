use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// One public repository as returned by `GET /users/{username}/repos`.
/// Held only in transient view state, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    #[serde(rename = "html_url")]
    pub url: String,
    #[serde(rename = "stargazers_count", default)]
    pub stars: u32,
    #[serde(rename = "forks_count", default)]
    pub forks: u32,
    #[serde(rename = "watchers_count", default)]
    pub watchers: u32,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(rename = "private", default)]
    pub is_private: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    #[default]
    Updated,
    Stars,
    Name,
}

/// Re-sorts the already-fetched collection without refetching. The sort
/// is stable, so ties keep their input order.
pub fn sort_repos(mut repos: Vec<Repository>, mode: SortMode) -> Vec<Repository> {
    match mode {
        SortMode::Updated => repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at)),
        SortMode::Stars => repos.sort_by(|a, b| b.stars.cmp(&a.stars)),
        SortMode::Name => repos.sort_by_key(|r| r.name.to_lowercase()),
    }
    repos
}
