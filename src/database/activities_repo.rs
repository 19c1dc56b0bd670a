use indexmap::IndexMap;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::Activity;

pub type ActivityMap = IndexMap<String, Activity>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Participant not found")]
    ParticipantNotFound,
}

/// In-memory activity directory.
///
/// Lookups and mutations of a participant list happen under one write lock,
/// so concurrent signups and removals never overwrite each other.
#[derive(Debug, Default)]
pub struct ActivityDirectory {
    activities: RwLock<ActivityMap>,
}

impl ActivityDirectory {
    pub fn new(activities: ActivityMap) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    pub async fn list_activities(&self) -> ActivityMap {
        self.activities.read().await.clone()
    }

    #[cfg(test)]
    pub async fn load_activity(&self, name: &str) -> Option<Activity> {
        self.activities.read().await.get(name).cloned()
    }

    /// Appends `email` to the roster. Repeated signups append again.
    pub async fn add_participant(&self, name: &str, email: &str) -> Result<usize, DirectoryError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(DirectoryError::ActivityNotFound)?;
        activity.participants.push(email.to_string());
        Ok(activity.participants.len())
    }

    /// Removes the first occurrence of `email` from the roster.
    pub async fn remove_participant(
        &self,
        name: &str,
        email: &str,
    ) -> Result<usize, DirectoryError> {
        let mut activities = self.activities.write().await;
        let activity = activities
            .get_mut(name)
            .ok_or(DirectoryError::ActivityNotFound)?;
        let idx = activity
            .participants
            .iter()
            .position(|p| p == email)
            .ok_or(DirectoryError::ParticipantNotFound)?;
        activity.participants.remove(idx);
        Ok(activity.participants.len())
    }
}
