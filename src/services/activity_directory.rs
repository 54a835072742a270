use std::collections::BTreeMap;

use thiserror::Error;
use tracing::warn;

use crate::models::{Activity, ActivityView};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity '{0}' not found")]
    NotFound(String),

    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },

    #[error("{email} is not signed up for this activity")]
    NotSignedUp { activity: String, email: String },
}

/// In-memory catalog of activities keyed by name.
///
/// Activities are fixed once the directory is built; only their rosters change.
#[derive(Debug, Clone, Default)]
pub struct ActivityDirectory {
    activities: BTreeMap<String, Activity>,
}

impl ActivityDirectory {
    pub fn new(activities: impl IntoIterator<Item = Activity>) -> Self {
        let activities = activities
            .into_iter()
            .map(|a| (a.name.clone(), a))
            .collect();
        Self { activities }
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    pub fn list_activities(&self) -> BTreeMap<String, ActivityView> {
        self.activities
            .iter()
            .map(|(name, activity)| (name.clone(), activity.to_view()))
            .collect()
    }

    pub fn signup(&mut self, activity_name: &str, email: &str) -> Result<String, DirectoryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::NotFound(activity_name.to_string()))?;

        if activity.is_enrolled(email) {
            return Err(DirectoryError::AlreadySignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        }

        activity.participants.push(email.to_string());

        // Capacity is advisory: the signup stands, but make the overflow visible.
        if activity.participants.len() > activity.max_participants as usize {
            warn!(
                activity = %activity_name,
                enrolled = activity.participants.len(),
                max_participants = activity.max_participants,
                "activity over capacity"
            );
        }

        Ok(format!("Signed up {} for {}", email, activity_name))
    }

    pub fn unsubscribe(
        &mut self,
        activity_name: &str,
        email: &str,
    ) -> Result<String, DirectoryError> {
        let activity = self
            .activities
            .get_mut(activity_name)
            .ok_or_else(|| DirectoryError::NotFound(activity_name.to_string()))?;

        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(DirectoryError::NotSignedUp {
                activity: activity_name.to_string(),
                email: email.to_string(),
            });
        };

        activity.participants.remove(pos);
        Ok(format!("Unsubscribed {} from {}", email, activity_name))
    }
}
