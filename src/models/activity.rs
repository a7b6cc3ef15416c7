use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Activity name -> activity record. Ordered so listings are stable.
pub type ActivityMap = BTreeMap<String, Activity>;

/// One extracurricular offering and its current roster.
///
/// The activity name is the key in [`ActivityMap`] and is not repeated here,
/// which keeps the JSON shape of `GET /activities` a plain name -> record object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Student emails; unique within one activity.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, emails: &[&str]) -> Self {
        for email in emails {
            if !self.has_participant(email) {
                self.participants.push(email.to_string());
            }
        }
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_participants_skips_duplicates() {
        let a = Activity::new("Chess", "Fridays", 4).with_participants(&[
            "a@mergington.edu",
            "b@mergington.edu",
            "a@mergington.edu",
        ]);
        assert_eq!(a.participants.len(), 2);
        assert!(a.has_participant("b@mergington.edu"));
        assert!(!a.has_participant("c@mergington.edu"));
    }

    #[test]
    fn test_spots_left_saturates() {
        let mut a = Activity::new("Tiny", "Never", 1).with_participants(&["a@mergington.edu"]);
        assert_eq!(a.spots_left(), 0);
        assert!(a.is_full());

        // Rosters can exceed capacity when the cap is not enforced.
        a.participants.push("b@mergington.edu".to_string());
        assert_eq!(a.spots_left(), 0);
    }

    #[test]
    fn test_serializes_four_fields() {
        let a = Activity::new("Debate", "Thursdays", 10).with_participants(&["x@mergington.edu"]);
        let v = serde_json::to_value(&a).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert_eq!(obj["max_participants"], 10);
        assert_eq!(obj["participants"][0], "x@mergington.edu");
    }
}
