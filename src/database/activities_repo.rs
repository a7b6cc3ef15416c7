use crate::database::activity_store::ActivityStore;
use crate::models::ActivityMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    ActivityMissing,
    AlreadyPresent,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    ActivityMissing,
    NotPresent,
}

pub async fn list_activities(store: &ActivityStore) -> ActivityMap {
    store.inner().read().await.clone()
}

#[cfg(test)]
pub async fn load_activity(store: &ActivityStore, name: &str) -> Option<crate::models::Activity> {
    store.inner().read().await.get(name).cloned()
}

/// Membership check and insert run under one write guard.
pub async fn insert_participant(
    store: &ActivityStore,
    name: &str,
    email: &str,
    enforce_capacity: bool,
) -> InsertOutcome {
    let mut activities = store.inner().write().await;
    let Some(activity) = activities.get_mut(name) else {
        return InsertOutcome::ActivityMissing;
    };
    if activity.has_participant(email) {
        return InsertOutcome::AlreadyPresent;
    }
    if enforce_capacity && activity.is_full() {
        return InsertOutcome::Full;
    }
    activity.participants.push(email.to_string());
    InsertOutcome::Inserted
}

pub async fn remove_participant(store: &ActivityStore, name: &str, email: &str) -> RemoveOutcome {
    let mut activities = store.inner().write().await;
    let Some(activity) = activities.get_mut(name) else {
        return RemoveOutcome::ActivityMissing;
    };
    let before = activity.participants.len();
    activity.participants.retain(|p| p != email);
    if activity.participants.len() == before {
        RemoveOutcome::NotPresent
    } else {
        RemoveOutcome::Removed
    }
}
