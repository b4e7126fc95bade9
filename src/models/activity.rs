use serde::{Serialize, Serializer};

/// An extracurricular offering with its roster.
///
/// `name` is the directory key, so it is left out of the serialized body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Activity {
    #[serde(skip)]
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
        participants: &[&str],
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Point-in-time copy of the directory, serialized as `{name: activity}` in directory order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityDirectoryView {
    pub activities: Vec<Activity>,
}

impl Serialize for ActivityDirectoryView {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.activities.iter().map(|a| (&a.name, a)))
    }
}
