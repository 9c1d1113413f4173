use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// User-facing toast texts, loaded from a TOML file so the wording can
/// change without a rebuild. Templates may reference `{user}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageLoader {
    pub profile_not_found: String,
    pub profile_fetch_failed: String,
    pub profile_network_error: String,
    pub profile_loaded: String,
    pub repos_fetch_failed: String,
    pub repos_network_error: String,
}

impl MessageLoader {
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let file = fs::read_to_string(path)?;
        Ok(toml::from_str(&file)?)
    }

    fn format(template: &str, user: &str) -> String {
        template.replace("{user}", user)
    }

    pub fn profile_loaded(&self, user: &str) -> String {
        Self::format(&self.profile_loaded, user)
    }

    pub fn profile_toast(&self, err: &FetchError) -> String {
        match err {
            FetchError::NotFound { username } => Self::format(&self.profile_not_found, username),
            FetchError::ServerError { .. } => self.profile_fetch_failed.clone(),
            FetchError::Network => self.profile_network_error.clone(),
        }
    }

    pub fn repos_toast(&self, err: &FetchError) -> String {
        match err {
            FetchError::Network => self.repos_network_error.clone(),
            _ => self.repos_fetch_failed.clone(),
        }
    }
}
