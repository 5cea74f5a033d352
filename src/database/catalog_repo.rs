use indexmap::IndexMap;

use parking_lot::RwLock;

use crate::models::ActivityRecord;

/// Result of a membership write against the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantUpdate {
    ActivityMissing,
    Unchanged,
    Applied,
}

/// In-memory activity store. Lives as long as its owner; nothing is
/// written to disk.
#[derive(Debug, Default)]
pub struct ActivityCatalog {
    activities: RwLock<IndexMap<String, ActivityRecord>>,
}

impl ActivityCatalog {
    pub fn new(activities: IndexMap<String, ActivityRecord>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub fn list(&self) -> IndexMap<String, ActivityRecord> {
        self.activities.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<ActivityRecord> {
        self.activities.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.activities.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.read().is_empty()
    }

    pub fn add_participant(&self, activity: &str, email: &str) -> ParticipantUpdate {
        let mut activities = self.activities.write();
        let Some(record) = activities.get_mut(activity) else {
            return ParticipantUpdate::ActivityMissing;
        };
        if record.has_participant(email) {
            return ParticipantUpdate::Unchanged;
        }
        record.participants.push(email.to_string());
        ParticipantUpdate::Applied
    }

    pub fn remove_participant(&self, activity: &str, email: &str) -> ParticipantUpdate {
        let mut activities = self.activities.write();
        let Some(record) = activities.get_mut(activity) else {
            return ParticipantUpdate::ActivityMissing;
        };
        let before = record.participants.len();
        record.participants.retain(|p| p != email);
        if record.participants.len() == before {
            ParticipantUpdate::Unchanged
        } else {
            ParticipantUpdate::Applied
        }
    }
}

pub fn seed_activities() -> IndexMap<String, ActivityRecord> {
    let seed = [
        (
            "Chess Club",
            ActivityRecord::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            )
            .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
        ),
        (
            "Programming Class",
            ActivityRecord::new(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
            )
            .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
        ),
        (
            "Gym Class",
            ActivityRecord::new(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
            )
            .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
        ),
        (
            "Basketball Team",
            ActivityRecord::new(
                "Competitive basketball training and games",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                15,
            ),
        ),
        (
            "Swimming Club",
            ActivityRecord::new(
                "Swimming training and water sports",
                "Mondays and Wednesdays, 3:30 PM - 5:00 PM",
                20,
            ),
        ),
        (
            "Art Studio",
            ActivityRecord::new(
                "Express creativity through painting and drawing",
                "Wednesdays, 3:30 PM - 5:00 PM",
                15,
            ),
        ),
        (
            "Drama Club",
            ActivityRecord::new(
                "Theater arts and performance training",
                "Tuesdays, 4:00 PM - 6:00 PM",
                25,
            ),
        ),
        (
            "Debate Team",
            ActivityRecord::new(
                "Learn public speaking and argumentation skills",
                "Thursdays, 3:30 PM - 5:00 PM",
                16,
            ),
        ),
        (
            "Science Club",
            ActivityRecord::new(
                "Hands-on experiments and scientific exploration",
                "Fridays, 3:30 PM - 5:00 PM",
                20,
            ),
        ),
    ];

    seed.into_iter()
        .map(|(name, record)| (name.to_string(), record))
        .collect()
}
