use serde::{Deserialize, Serialize};

/// The gamification-relevant slice of a user profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    /// Cumulative experience points, never negative in storage
    #[serde(default)]
    pub xp: i64,
    /// In-app currency balance
    #[serde(default)]
    pub money: i64,
}

impl Profile {
    /// Display name assembled from the profile's name parts
    pub fn full_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{} {}", first, last),
            (Some(first), None) => first.clone(),
            (None, Some(last)) => last.clone(),
            (None, None) => self.id.clone(),
        }
    }
}
