use parking_lot::RwLock;
use std::sync::Arc;

use crate::database::seed::seed_activities;
use crate::errors::{ActivityError, ActivityResult};
use crate::models::{Activity, ActivityDirectoryView};

/// In-memory activity directory shared by every request handler.
///
/// Cloning yields another handle to the same table. Signup and unregister hold the
/// write lock across the membership check and the mutation.
#[derive(Debug, Clone, Default)]
pub struct ActivityStore {
    activities: Arc<RwLock<Vec<Activity>>>,
}

impl ActivityStore {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self {
            activities: Arc::new(RwLock::new(dedup_by_name(activities))),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub fn list(&self) -> ActivityDirectoryView {
        ActivityDirectoryView {
            activities: self.activities.read().clone(),
        }
    }

    pub fn signup(&self, activity_name: &str, email: &str) -> ActivityResult<()> {
        let mut activities = self.activities.write();
        let activity = find_mut(&mut activities, activity_name)?;
        if activity.has_participant(email) {
            return Err(ActivityError::AlreadySignedUp);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn unregister(&self, activity_name: &str, email: &str) -> ActivityResult<()> {
        let mut activities = self.activities.write();
        let activity = find_mut(&mut activities, activity_name)?;
        let Some(idx) = activity.participants.iter().position(|p| p == email) else {
            return Err(ActivityError::NotRegistered);
        };
        activity.participants.remove(idx);
        Ok(())
    }

}

fn find_mut<'a>(activities: &'a mut [Activity], name: &str) -> ActivityResult<&'a mut Activity> {
    activities
        .iter_mut()
        .find(|a| a.name == name)
        .ok_or(ActivityError::NotFound)
}

// First entry wins.
fn dedup_by_name(activities: Vec<Activity>) -> Vec<Activity> {
    let mut out: Vec<Activity> = Vec::with_capacity(activities.len());
    for activity in activities {
        if !out.iter().any(|a| a.name == activity.name) {
            out.push(activity);
        }
    }
    out
}
