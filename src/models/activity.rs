use serde::{Deserialize, Serialize};

// One extracurricular offering. The roster keeps signup order but never holds
// the same email twice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn from_view(name: impl Into<String>, view: ActivityView) -> Self {
        Self {
            name: name.into(),
            description: view.description,
            schedule: view.schedule,
            max_participants: view.max_participants,
            participants: view.participants,
        }
    }

    pub fn is_enrolled(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Remaining capacity. Saturates at zero when the roster is over capacity.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.participants.len()).unwrap_or(u32::MAX);
        self.max_participants.saturating_sub(taken)
    }

    pub fn to_view(&self) -> ActivityView {
        ActivityView {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants.clone(),
        }
    }
}

/// JSON shape of an activity as listed by `GET /activities` and as stored in
/// seed files. The name is the key of the enclosing map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Success body for roster changes: `{"message": ...}`.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmationBody {
    pub message: String,
}
