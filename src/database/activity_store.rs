use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{Activity, ActivityMap};

/// Shared handle to the in-memory activity directory.
///
/// Cloning is cheap; all clones see the same roster. Nothing is persisted,
/// a restart brings back the seeded roster.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    inner: Arc<RwLock<ActivityMap>>,
}

impl ActivityStore {
    #[cfg(test)]
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_activities(activities: ActivityMap) -> Self {
        Self {
            inner: Arc::new(RwLock::new(activities)),
        }
    }

    /// The Mergington High School roster loaded at process start.
    pub fn seeded() -> Self {
        Self::from_activities(seed_activities())
    }

    pub(crate) fn inner(&self) -> &RwLock<ActivityMap> {
        &self.inner
    }
}

pub fn seed_activities() -> ActivityMap {
    let mut map = ActivityMap::new();
    map.insert(
        "Chess Club".to_string(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
    );
    map.insert(
        "Programming Class".to_string(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    map.insert(
        "Gym Class".to_string(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
    );
    map.insert(
        "Basketball Team".to_string(),
        Activity::new(
            "Practice drills and play in the inter-school league",
            "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
            15,
        )
        .with_participants(&["liam@mergington.edu"]),
    );
    map.insert(
        "Soccer Club".to_string(),
        Activity::new(
            "Train together and play friendly matches on weekends",
            "Wednesdays, 3:30 PM - 5:30 PM",
            22,
        )
        .with_participants(&["noah@mergington.edu", "ava@mergington.edu"]),
    );
    map.insert(
        "Art Club".to_string(),
        Activity::new(
            "Explore painting, drawing and sculpture",
            "Mondays, 3:30 PM - 5:00 PM",
            18,
        )
        .with_participants(&["mia@mergington.edu"]),
    );
    map.insert(
        "Drama Club".to_string(),
        Activity::new(
            "Rehearse and perform in the school plays",
            "Thursdays, 4:00 PM - 6:00 PM",
            20,
        )
        .with_participants(&["isabella@mergington.edu", "lucas@mergington.edu"]),
    );
    map.insert(
        "Math Club".to_string(),
        Activity::new(
            "Solve challenging problems and prepare for math competitions",
            "Tuesdays, 3:30 PM - 4:30 PM",
            10,
        )
        .with_participants(&["ethan@mergington.edu"]),
    );
    map.insert(
        "Debate Team".to_string(),
        Activity::new(
            "Build public speaking skills and compete in debate tournaments",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
        )
        .with_participants(&["charlotte@mergington.edu", "amelia@mergington.edu"]),
    );
    map
}
