//! Habit entity definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a habit, unique within one user's habit list.
///
/// Ids are chosen by the client. Historical log entries keep referring to
/// an id even after the habit is removed or renamed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(String);

impl HabitId {
    /// Creates a habit id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HabitId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for HabitId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A habit the user checks off every day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitDefinition {
    /// Unique identifier within the owning user.
    pub id: HabitId,
    /// Human readable title.
    pub title: String,
}

impl HabitDefinition {
    /// Creates a new habit definition.
    pub fn new(id: impl Into<HabitId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }

    /// Returns true if the title is empty or whitespace only.
    pub fn has_blank_title(&self) -> bool {
        self.title.trim().is_empty()
    }
}

/// Habits every new user starts the challenge with.
pub const DEFAULT_HABITS: [(&str, &str); 5] = [
    ("h1", "Drink 4L Water"),
    ("h2", "45min Workout"),
    ("h3", "Read 10 Pages"),
    ("h4", "No Junk Food"),
    ("h5", "Take Progress Pic"),
];

/// Builds the default habit list.
pub fn default_habits() -> Vec<HabitDefinition> {
    DEFAULT_HABITS
        .iter()
        .map(|(id, title)| HabitDefinition::new(*id, *title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_habits() {
        let habits = default_habits();
        assert_eq!(habits.len(), 5);
        assert_eq!(habits[0].id.as_str(), "h1");
        assert_eq!(habits[4].title, "Take Progress Pic");
    }

    #[test]
    fn test_blank_title() {
        assert!(HabitDefinition::new("h1", "").has_blank_title());
        assert!(HabitDefinition::new("h1", "   \t").has_blank_title());
        assert!(!HabitDefinition::new("h1", " Run ").has_blank_title());
    }

    #[test]
    fn test_habit_id_serializes_as_plain_string() {
        let habit = HabitDefinition::new("h7", "Stretch");
        let json = serde_json::to_value(&habit).unwrap();
        assert_eq!(json, serde_json::json!({"id": "h7", "title": "Stretch"}));
    }
}
