use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use shared::{AchievementId, Profile};
use tokio::sync::RwLock;
use tracing::warn;

/// The two persisted slots of the dashboard: the current profile record
/// and the unlocked-achievement-id sequence computed from it. Both are
/// replaced wholesale on every successful lookup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub profile: Option<Profile>,
    pub unlocked: Vec<AchievementId>,
}

/// Sequence token for one profile lookup. Only the response carrying the
/// latest issued token for the slot is ever applied; a stale completion
/// is discarded instead of overwriting newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupToken(u64);

/// Explicit session state with an init-from-disk restore step and
/// save-on-write, instead of ambient mutable globals.
pub struct SessionStore {
    path: PathBuf,
    state: RwLock<Session>,
    latest_lookup: AtomicU64,
}

impl SessionStore {
    /// Restores the last session from `path`; an absent or unreadable
    /// file starts an empty session.
    pub fn load(path: PathBuf) -> Self {
        let state = match std::fs::read(&path) {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(session) => session,
                Err(e) => {
                    warn!("Discarding corrupt session file {}: {e}", path.display());
                    Session::default()
                }
            },
            Err(_) => Session::default(),
        };

        Self {
            path,
            state: RwLock::new(state),
            latest_lookup: AtomicU64::new(0),
        }
    }

    pub async fn session(&self) -> Session {
        self.state.read().await.clone()
    }

    /// Issues the sequence token for a new lookup, superseding all
    /// tokens issued earlier.
    pub fn begin_lookup(&self) -> LookupToken {
        LookupToken(self.latest_lookup.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Applies a finished lookup: both slots are replaced (the
    /// unlocked-set is a full recompute, never a merge) and written to
    /// disk. Returns `false` without storing anything when a newer
    /// lookup was issued after `token`.
    pub async fn commit(
        &self,
        token: LookupToken,
        profile: Profile,
        unlocked: Vec<AchievementId>,
    ) -> anyhow::Result<bool> {
        let mut state = self.state.write().await;
        if token.0 != self.latest_lookup.load(Ordering::SeqCst) {
            return Ok(false);
        }

        state.profile = Some(profile);
        state.unlocked = unlocked;
        self.save(&state)?;

        Ok(true)
    }

    fn save(&self, session: &Session) -> anyhow::Result<()> {
        let bytes = serde_json::to_vec_pretty(session)?;
        std::fs::write(&self.path, bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("trophy-board-{name}-{}.json", std::process::id()))
    }

    fn profile(login: &str) -> Profile {
        Profile {
            login: login.to_string(),
            avatar_url: format!("https://github.com/{login}.png"),
            public_repos: 10,
            followers: 20,
            following: 1,
            created_at: Utc::now() - Duration::days(730),
        }
    }

    #[tokio::test]
    async fn restores_what_was_committed() {
        let path = temp_path("roundtrip");
        let store = SessionStore::load(path.clone());
        let token = store.begin_lookup();
        let unlocked = vec!["yolo".to_string(), "pull-shark".to_string()];
        assert!(store
            .commit(token, profile("octocat"), unlocked.clone())
            .await
            .unwrap());

        let restored = SessionStore::load(path.clone());
        let session = restored.session().await;
        assert_eq!(session.profile.unwrap().login, "octocat");
        assert_eq!(session.unlocked, unlocked);

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn stale_lookup_is_discarded() {
        let path = temp_path("stale");
        let store = SessionStore::load(path.clone());

        let stale = store.begin_lookup();
        let fresh = store.begin_lookup();

        assert!(store
            .commit(fresh, profile("fresh"), vec!["yolo".to_string()])
            .await
            .unwrap());
        // the older request finishes after the newer one was applied
        assert!(!store.commit(stale, profile("stale"), vec![]).await.unwrap());

        let session = store.session().await;
        assert_eq!(session.profile.unwrap().login, "fresh");
        assert_eq!(session.unlocked, vec!["yolo".to_string()]);

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn failed_lookup_leaves_prior_state_untouched() {
        let path = temp_path("failure");
        let store = SessionStore::load(path.clone());
        let token = store.begin_lookup();
        store
            .commit(token, profile("octocat"), vec!["yolo".to_string()])
            .await
            .unwrap();

        // A failed fetch never reaches commit; issuing the token alone
        // must not change the stored session.
        let _abandoned = store.begin_lookup();

        let session = store.session().await;
        assert_eq!(session.profile.unwrap().login, "octocat");
        assert_eq!(session.unlocked.len(), 1);

        std::fs::remove_file(path).ok();
    }

    #[tokio::test]
    async fn committed_set_replaces_instead_of_merging() {
        let path = temp_path("replace");
        let store = SessionStore::load(path.clone());

        let first = store.begin_lookup();
        store
            .commit(
                first,
                profile("octocat"),
                vec!["yolo".to_string(), "quickdraw".to_string()],
            )
            .await
            .unwrap();

        let second = store.begin_lookup();
        store
            .commit(second, profile("newbie"), vec![])
            .await
            .unwrap();

        let session = store.session().await;
        assert_eq!(session.profile.unwrap().login, "newbie");
        assert!(session.unlocked.is_empty());

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_file_starts_an_empty_session() {
        let store = SessionStore::load(temp_path("does-not-exist"));
        let session = store.state.try_read().unwrap().clone();
        assert_eq!(session, Session::default());
    }
}
