use chrono::{DateTime, Utc};

use crate::Profile;

pub type AchievementId = String;

/// One entry of the static achievement catalog. The catalog is fixed at
/// build time and never mutated at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// The simulated achievement catalog. The unlock thresholds and progress
/// denominators below are placeholder simulations, not GitHub's real
/// criteria, and are kept as literal fixtures.
pub const CATALOG: &[Achievement] = &[
    Achievement {
        id: "yolo",
        name: "YOLO",
        description: "Merged a pull request without a review",
    },
    Achievement {
        id: "quickdraw",
        name: "Quickdraw",
        description: "Closed an issue or a pull request within 5 minutes of opening",
    },
    Achievement {
        id: "open-sourcerer",
        name: "Open Sourcerer",
        description: "Had pull requests merged in multiple public repositories",
    },
    Achievement {
        id: "heart-on-sleeve",
        name: "Heart On Your Sleeve",
        description: "Reacted to something on GitHub with a heart emoji",
    },
    Achievement {
        id: "pair-extraordinaire",
        name: "Pair Extraordinaire",
        description: "Coauthored commits on merged pull requests",
    },
    Achievement {
        id: "pull-shark",
        name: "Pull Shark",
        description: "Opened pull requests that have been merged",
    },
    Achievement {
        id: "starstruck",
        name: "Starstruck",
        description: "Created a repository that has many stars",
    },
    Achievement {
        id: "galaxy-brain",
        name: "Galaxy Brain",
        description: "Answered discussions with accepted answers",
    },
];

pub fn achievement(id: &str) -> Option<&'static Achievement> {
    CATALOG.iter().find(|a| a.id == id)
}

const DAYS_PER_YEAR: i64 = 365;

/// Computes the full unlocked-set for a profile. Pure function of the
/// profile counters and `now`; rules are additive and non-exclusive.
/// The result replaces any previously stored set, it is never merged.
pub fn evaluate(profile: &Profile, now: DateTime<Utc>) -> Vec<AchievementId> {
    let mut unlocked = Vec::new();
    let mut unlock = |id: &str| unlocked.push(id.to_string());

    if profile.public_repos >= 2 {
        unlock("yolo");
        unlock("quickdraw");
    }
    if profile.public_repos >= 5 {
        unlock("open-sourcerer");
        unlock("heart-on-sleeve");
    }
    if profile.followers >= 10 {
        unlock("pair-extraordinaire");
    }
    if profile.account_age_days(now) > DAYS_PER_YEAR {
        unlock("pull-shark");
    }

    unlocked
}

/// Progress towards an achievement, in percent.
///
/// An unlocked achievement is always exactly 100. A locked one gets a
/// linear ratio against a fixed per-id denominator, floored at 99 so an
/// overshooting ratio never reads as "complete" while still locked.
pub fn progress_of(id: &str, profile: &Profile, unlocked: &[AchievementId]) -> u8 {
    if unlocked.iter().any(|u| u == id) {
        return 100;
    }

    let repos = profile.public_repos.max(0) as u64;
    let followers = profile.followers.max(0) as u64;

    let percent = match id {
        "pull-shark" => repos * 100 / 2,
        "starstruck" => followers * 100 / 16,
        "open-sourcerer" => repos * 100 / 3,
        "pair-extraordinaire" => followers * 100 / 10,
        _ => {
            if repos > 0 {
                25
            } else {
                0
            }
        }
    };

    percent.min(99) as u8
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn profile(public_repos: i64, followers: i64, age_days: i64) -> Profile {
        Profile {
            login: "octocat".to_string(),
            avatar_url: "https://github.com/octocat.png".to_string(),
            public_repos,
            followers,
            following: 0,
            created_at: Utc::now() - Duration::days(age_days),
        }
    }

    #[test]
    fn five_repos_unlocks_both_repo_tiers() {
        let unlocked = evaluate(&profile(5, 0, 10), Utc::now());
        for id in ["yolo", "quickdraw", "open-sourcerer", "heart-on-sleeve"] {
            assert!(unlocked.iter().any(|u| u == id), "missing {id}");
        }
    }

    #[test]
    fn fresh_empty_account_unlocks_nothing() {
        let unlocked = evaluate(&profile(1, 9, 365), Utc::now());
        assert!(unlocked.is_empty());
    }

    #[test]
    fn two_year_old_active_account_unlocks_six() {
        let p = profile(10, 20, 730);
        let unlocked = evaluate(&p, Utc::now());
        assert_eq!(
            unlocked,
            vec![
                "yolo",
                "quickdraw",
                "open-sourcerer",
                "heart-on-sleeve",
                "pair-extraordinaire",
                "pull-shark"
            ]
        );
        assert_eq!(unlocked.len(), 6);
    }

    #[test]
    fn unlocked_set_is_subset_of_catalog() {
        let unlocked = evaluate(&profile(100, 100, 10_000), Utc::now());
        for id in &unlocked {
            assert!(achievement(id).is_some(), "{id} not in catalog");
        }
    }

    #[test]
    fn unlocked_progress_is_always_full() {
        let p = profile(0, 0, 0);
        let unlocked = vec!["starstruck".to_string()];
        assert_eq!(progress_of("starstruck", &p, &unlocked), 100);
    }

    #[test]
    fn starstruck_progress_is_linear_in_followers() {
        assert_eq!(progress_of("starstruck", &profile(0, 8, 0), &[]), 50);
    }

    #[test]
    fn pull_shark_progress_clamps_to_99() {
        assert_eq!(progress_of("pull-shark", &profile(1, 0, 0), &[]), 50);
        // raw ratio would be 200%
        assert_eq!(progress_of("pull-shark", &profile(4, 0, 0), &[]), 99);
    }

    #[test]
    fn default_progress_depends_on_having_any_repo() {
        assert_eq!(progress_of("yolo", &profile(1, 0, 0), &[]), 25);
        assert_eq!(progress_of("yolo", &profile(0, 0, 0), &[]), 0);
    }

    #[test]
    fn negative_counters_read_as_zero_progress() {
        assert_eq!(progress_of("open-sourcerer", &profile(-3, 0, 0), &[]), 0);
        assert_eq!(progress_of("yolo", &profile(-3, 0, 0), &[]), 0);
    }
}
