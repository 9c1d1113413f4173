use thiserror::Error;

/// Failure taxonomy for outbound GitHub reads. All variants are terminal
/// for the invocation: nothing is retried and no stored state is touched
/// by a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Profile lookups only: the username does not exist upstream.
    #[error("GitHub user `{username}` was not found")]
    NotFound { username: String },
    /// Any non-success status that is not a profile 404.
    #[error("GitHub returned an unexpected response, try again later")]
    ServerError { status: Option<u16> },
    /// Transport-level failure before any status was obtained.
    #[error("could not reach GitHub, check your connection")]
    Network,
}

impl FetchError {
    /// Classification for the profile lookup, where 404 is meaningful.
    pub fn from_profile_status(status: u16, username: &str) -> Self {
        if status == 404 {
            Self::NotFound {
                username: username.to_string(),
            }
        } else {
            Self::ServerError {
                status: Some(status),
            }
        }
    }

    pub fn classify_profile(err: octocrab::Error, username: &str) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => {
                Self::from_profile_status(source.status_code.as_u16(), username)
            }
            _ => Self::Network,
        }
    }

    /// The repository listing deliberately makes no NotFound distinction;
    /// an unknown username surfaces however the upstream answers, and any
    /// error status collapses into ServerError.
    pub fn classify_repos(err: octocrab::Error) -> Self {
        match err {
            octocrab::Error::GitHub { source, .. } => Self::ServerError {
                status: Some(source.status_code.as_u16()),
            },
            _ => Self::Network,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::ServerError { .. } => "server_error",
            Self::Network => "network_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_404_carries_the_username() {
        let err = FetchError::from_profile_status(404, "doesnotexist123456");
        assert_eq!(
            err,
            FetchError::NotFound {
                username: "doesnotexist123456".to_string()
            }
        );
        assert!(err.to_string().contains("doesnotexist123456"));
    }

    #[test]
    fn other_statuses_are_server_errors() {
        for status in [403, 500, 502] {
            assert_eq!(
                FetchError::from_profile_status(status, "octocat"),
                FetchError::ServerError {
                    status: Some(status)
                }
            );
        }
    }

    #[test]
    fn kinds_are_stable_identifiers() {
        assert_eq!(
            FetchError::from_profile_status(404, "a").kind(),
            "not_found"
        );
        assert_eq!(FetchError::from_profile_status(500, "a").kind(), "server_error");
        assert_eq!(FetchError::Network.kind(), "network_error");
    }
}
