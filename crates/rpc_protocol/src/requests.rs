//! API request types.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateHabitsRequest {
    pub habits: Vec<Habit>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleHabitRequest {
    pub habit_id: String,
    pub is_checked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogWeightRequest {
    /// Number input fields submit their value as a string, so both forms
    /// are accepted.
    #[serde(deserialize_with = "number_or_numeric_string")]
    pub weight: f64,
}

fn number_or_numeric_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrString {
        Number(f64),
        Text(String),
    }

    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(value) => Ok(value),
        NumberOrString::Text(text) => text
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("weight is not a number: {text:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_request_uses_client_field_names() {
        let request: ToggleHabitRequest =
            serde_json::from_str(r#"{"habitId":"h2","isChecked":true}"#).unwrap();
        assert_eq!(request.habit_id, "h2");
        assert!(request.is_checked);
    }

    #[test]
    fn test_habit_without_title_defaults_to_empty() {
        let request: UpdateHabitsRequest =
            serde_json::from_str(r#"{"habits":[{"id":"h1"},{"id":"h2","title":"Run"}]}"#)
                .unwrap();
        assert_eq!(request.habits[0].title, "");
        assert_eq!(request.habits[1].title, "Run");
    }

    #[test]
    fn test_weight_accepts_number_or_numeric_string() {
        let number: LogWeightRequest = serde_json::from_str(r#"{"weight":82.5}"#).unwrap();
        assert_eq!(number.weight, 82.5);

        let text: LogWeightRequest = serde_json::from_str(r#"{"weight":" 82.5"}"#).unwrap();
        assert_eq!(text.weight, 82.5);

        let negative: LogWeightRequest = serde_json::from_str(r#"{"weight":"-3"}"#).unwrap();
        assert_eq!(negative.weight, -3.0);

        assert!(serde_json::from_str::<LogWeightRequest>(r#"{"weight":"heavy"}"#).is_err());
        assert!(serde_json::from_str::<LogWeightRequest>(r#"{"weight":null}"#).is_err());
    }
}
