use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod achievement;
mod repo;
mod timeformat;

pub use achievement::*;
pub use repo::*;
pub use timeformat::*;

pub type GithubHandle = String;

/// Snapshot of a user's public account statistics at last fetch time.
///
/// Deserialized verbatim from the GitHub `/users/{username}` payload.
/// Counters are kept signed and unvalidated: whatever the API returns
/// passes through as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub login: GithubHandle,
    pub avatar_url: String,
    #[serde(default)]
    pub public_repos: i64,
    #[serde(default)]
    pub followers: i64,
    #[serde(default)]
    pub following: i64,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn account_age_days(&self, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_days()
    }
}
