use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::{progress_of, relative_date, AchievementId, Profile, Repository, CATALOG};
use utoipa::ToSchema;

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileInfo {
    pub login: String,
    pub avatar_url: String,
    pub public_repos: i64,
    pub followers: i64,
    pub following: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileInfo {
    fn from(profile: Profile) -> Self {
        Self {
            login: profile.login,
            avatar_url: profile.avatar_url,
            public_repos: profile.public_repos,
            followers: profile.followers,
            following: profile.following,
            created_at: profile.created_at,
        }
    }
}

/// One achievement card: static display metadata plus the state computed
/// for the current profile. Progress is exactly 100 iff unlocked.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct AchievementState {
    pub id: String,
    pub name: String,
    pub description: String,
    pub unlocked: bool,
    pub progress: u8,
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    pub profile: ProfileInfo,
    pub achievements: Vec<AchievementState>,
    pub unlocked_count: u32,
    pub message: String,
}

impl ProfileResponse {
    pub fn new(profile: Profile, unlocked: Vec<AchievementId>, message: String) -> Self {
        let achievements = achievement_states(&profile, &unlocked);
        Self {
            profile: profile.into(),
            achievements,
            unlocked_count: unlocked.len() as u32,
            message,
        }
    }
}

/// The restored session served at dashboard startup. Never an error: an
/// empty session is a valid answer.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct SessionResponse {
    pub profile: Option<ProfileInfo>,
    pub achievements: Vec<AchievementState>,
    pub unlocked_count: u32,
}

impl SessionResponse {
    pub fn new(profile: Option<Profile>, unlocked: Vec<AchievementId>) -> Self {
        let achievements = profile
            .as_ref()
            .map(|p| achievement_states(p, &unlocked))
            .unwrap_or_default();
        Self {
            profile: profile.map(Into::into),
            unlocked_count: unlocked.len() as u32,
            achievements,
        }
    }
}

fn achievement_states(profile: &Profile, unlocked: &[AchievementId]) -> Vec<AchievementState> {
    CATALOG
        .iter()
        .map(|a| AchievementState {
            id: a.id.to_string(),
            name: a.name.to_string(),
            description: a.description.to_string(),
            unlocked: unlocked.iter().any(|u| u == a.id),
            progress: progress_of(a.id, profile, unlocked),
        })
        .collect()
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct RepoResponse {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: Option<String>,
    pub url: String,
    pub stars: u32,
    pub forks: u32,
    pub watchers: u32,
    pub language: Option<String>,
    pub updated_at: DateTime<Utc>,
    pub updated: String,
    pub topics: Vec<String>,
    pub is_private: bool,
}

impl From<Repository> for RepoResponse {
    fn from(repo: Repository) -> Self {
        let updated = format!("Updated {}", relative_date(repo.updated_at, Utc::now()));
        Self {
            id: repo.id,
            name: repo.name,
            full_name: repo.full_name,
            description: repo.description,
            url: repo.url,
            stars: repo.stars,
            forks: repo.forks,
            watchers: repo.watchers,
            language: repo.language,
            updated_at: repo.updated_at,
            updated,
            topics: repo.topics,
            is_private: repo.is_private,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
