use serde::Serialize;

// One catalog entry. `participants` keeps signup order; duplicates are
// rejected by the service layer, not here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityRecord {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl ActivityRecord {
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    pub fn with_participants(mut self, emails: &[&str]) -> Self {
        self.participants = emails.iter().map(|e| e.to_string()).collect();
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}
