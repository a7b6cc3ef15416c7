use tracing::{info, warn};

use crate::database::activities_repo::{self, InsertOutcome, RemoveOutcome};
use crate::database::ActivityStore;
use crate::error::ActivityError;
use crate::models::ActivityMap;

/// Whether `max_participants` is a hard cap on signup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignupPolicy {
    pub enforce_capacity: bool,
}

pub async fn list_activities(store: &ActivityStore) -> ActivityMap {
    activities_repo::list_activities(store).await
}

pub async fn sign_up(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
    policy: SignupPolicy,
) -> Result<String, ActivityError> {
    let email = require_email(email)?;

    let outcome =
        activities_repo::insert_participant(store, activity_name, email, policy.enforce_capacity)
            .await;
    let result = match outcome {
        InsertOutcome::Inserted => Ok(format!("Signed up {} for {}", email, activity_name)),
        InsertOutcome::ActivityMissing => Err(ActivityError::NotFound {
            activity: activity_name.to_string(),
        }),
        InsertOutcome::AlreadyPresent => Err(ActivityError::AlreadySignedUp {
            activity: activity_name.to_string(),
            email: email.to_string(),
        }),
        InsertOutcome::Full => Err(ActivityError::ActivityFull {
            activity: activity_name.to_string(),
        }),
    };

    match &result {
        Ok(_) => info!(activity = %activity_name, email = %email, "signup_ok"),
        Err(e) => warn!(activity = %activity_name, email = %email, error = %e, "signup_rejected"),
    }
    result
}

pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let email = require_email(email)?;

    let result = match activities_repo::remove_participant(store, activity_name, email).await {
        RemoveOutcome::Removed => Ok(format!("Unregistered {} from {}", email, activity_name)),
        RemoveOutcome::ActivityMissing => Err(ActivityError::NotFound {
            activity: activity_name.to_string(),
        }),
        RemoveOutcome::NotPresent => Err(ActivityError::NotSignedUp {
            activity: activity_name.to_string(),
            email: email.to_string(),
        }),
    };

    match &result {
        Ok(_) => info!(activity = %activity_name, email = %email, "unregister_ok"),
        Err(e) => warn!(activity = %activity_name, email = %email, error = %e, "unregister_rejected"),
    }
    result
}

fn require_email(email: &str) -> Result<&str, ActivityError> {
    if email.is_empty() {
        return Err(ActivityError::MissingEmail);
    }
    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::activity_store::seed_activities;

    #[tokio::test]
    async fn test_sign_up_adds_member() {
        let store = ActivityStore::seeded();
        let before = list_activities(&store).await["Math Club"].participants.len();

        let msg = sign_up(&store, "Math Club", "new@mergington.edu", SignupPolicy::default())
            .await
            .unwrap();
        assert!(msg.contains("new@mergington.edu"));
        assert!(msg.contains("Math Club"));

        let activities = list_activities(&store).await;
        let after = &activities["Math Club"];
        assert_eq!(after.participants.len(), before + 1);
        assert!(after.has_participant("new@mergington.edu"));
    }

    #[tokio::test]
    async fn test_sign_up_twice_conflicts() {
        let store = ActivityStore::seeded();
        let policy = SignupPolicy::default();
        sign_up(&store, "Drama Club", "dup@mergington.edu", policy)
            .await
            .unwrap();
        let err = sign_up(&store, "Drama Club", "dup@mergington.edu", policy)
            .await
            .unwrap_err();
        assert!(matches!(err, ActivityError::AlreadySignedUp { .. }));
    }

    #[tokio::test]
    async fn test_email_compared_verbatim() {
        let store = ActivityStore::seeded();
        let policy = SignupPolicy::default();
        let msg = sign_up(&store, "Art Club", " pad@mergington.edu", policy)
            .await
            .unwrap();
        assert_eq!(msg, "Signed up  pad@mergington.edu for Art Club");

        sign_up(&store, "Art Club", "pad@mergington.edu", policy)
            .await
            .unwrap();
        let activities = list_activities(&store).await;
        let art = &activities["Art Club"];
        assert!(art.has_participant(" pad@mergington.edu"));
        assert!(art.has_participant("pad@mergington.edu"));

        unregister(&store, "Art Club", "pad@mergington.edu")
            .await
            .unwrap();
        let activities = list_activities(&store).await;
        assert!(activities["Art Club"].has_participant(" pad@mergington.edu"));
    }

    #[tokio::test]
    async fn test_blank_email_rejected() {
        let store = ActivityStore::seeded();
        let err = sign_up(&store, "Art Club", "", SignupPolicy::default())
            .await
            .unwrap_err();
        assert_eq!(err, ActivityError::MissingEmail);
        let err = unregister(&store, "Art Club", "").await.unwrap_err();
        assert_eq!(err, ActivityError::MissingEmail);
    }

    #[tokio::test]
    async fn test_unknown_activity_not_found() {
        let store = ActivityStore::seeded();
        let err = sign_up(&store, "Nonexistent Club", "a@mergington.edu", SignupPolicy::default())
            .await
            .unwrap_err();
        assert!(matches!(err, ActivityError::NotFound { .. }));
        let err = unregister(&store, "Nonexistent Club", "a@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, ActivityError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_unregister_member_and_non_member() {
        let store = ActivityStore::seeded();
        let msg = unregister(&store, "Chess Club", "michael@mergington.edu")
            .await
            .unwrap();
        assert!(msg.starts_with("Unregistered"));
        assert!(!list_activities(&store).await["Chess Club"].has_participant("michael@mergington.edu"));

        let err = unregister(&store, "Chess Club", "michael@mergington.edu")
            .await
            .unwrap_err();
        assert!(matches!(err, ActivityError::NotSignedUp { .. }));
    }

    #[tokio::test]
    async fn test_capacity_policy() {
        let mut map = seed_activities();
        let chess = map.get_mut("Chess Club").unwrap();
        chess.max_participants = chess.participants.len() as u32;
        let store = ActivityStore::from_activities(map);

        let strict = SignupPolicy {
            enforce_capacity: true,
        };
        let err = sign_up(&store, "Chess Club", "late@mergington.edu", strict)
            .await
            .unwrap_err();
        assert!(matches!(err, ActivityError::ActivityFull { .. }));

        sign_up(&store, "Chess Club", "late@mergington.edu", SignupPolicy::default())
            .await
            .unwrap();
    }
}
