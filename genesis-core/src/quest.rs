use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ApiError;

/// The directive the backend generated for the current economy cycle.
///
/// The shape is owned by the backend and is not validated here. Unknown fields
/// are ignored, missing ones render empty and scalar values render as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    #[serde(rename = "_id", default, deserialize_with = "scalar_text")]
    pub id: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub title: String,
    #[serde(rename = "type", default, deserialize_with = "scalar_text")]
    pub kind: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub flavor_text: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub objective: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub reward: String,
    #[serde(default, deserialize_with = "scalar_text")]
    pub generated_at: String,
}

impl Quest {
    /// Parse a quest object from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a JSON object.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Self::from_value(serde_json::from_str(json)?)
    }

    fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        if !value.is_object() {
            return Err(serde::de::Error::custom(format!(
                "expected a quest object, found {value}"
            )));
        }
        serde_json::from_value(value)
    }

    /// Badge text shown under the title, e.g. `Gold Sink Protocol`.
    #[must_use]
    pub fn protocol_label(&self) -> String {
        format!("{} Protocol", self.kind)
    }

    /// Footer line identifying the stored record and its cycle.
    #[must_use]
    pub fn registry_line(&self) -> String {
        format!("Registry ID: {} • Cycle: {}", self.id, self.generated_at)
    }
}

/// Interpret the body of `GET /current-quest`.
///
/// `null` means the backend has not stored a quest yet. An object that only
/// carries an `error` string is the backend reporting its own failure.
///
/// # Errors
///
/// Returns `ApiError::Decode` for malformed JSON or a non-object body and
/// `ApiError::Backend` when the backend answered with an error object.
pub fn parse_current_quest(body: &str) -> Result<Option<Quest>, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    if value.is_null() {
        return Ok(None);
    }
    if value.get("title").is_none()
        && let Some(reason) = value.get("error").and_then(Value::as_str)
    {
        return Err(ApiError::Backend(reason.to_string()));
    }
    Ok(Some(Quest::from_value(value)?))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

fn scalar_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        Some(Scalar::Text(text)) => text,
        Some(Scalar::Number(number)) => number.to_string(),
        Some(Scalar::Flag(flag)) => flag.to_string(),
        None => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINT: &str = r#"{
        "title": "Reclaim the Mint",
        "type": "Economic",
        "flavor_text": "The royal presses run hot.",
        "objective": "Stabilize inflation",
        "reward": "500 gold",
        "_id": "q1",
        "generated_at": "cycle-7"
    }"#;

    #[test]
    fn parses_all_seven_fields() {
        let quest = Quest::from_json(MINT).expect("quest parses");
        assert_eq!(quest.title, "Reclaim the Mint");
        assert_eq!(quest.kind, "Economic");
        assert_eq!(quest.flavor_text, "The royal presses run hot.");
        assert_eq!(quest.objective, "Stabilize inflation");
        assert_eq!(quest.reward, "500 gold");
        assert_eq!(quest.id, "q1");
        assert_eq!(quest.generated_at, "cycle-7");
    }

    #[test]
    fn labels_format_type_and_registry() {
        let quest = Quest::from_json(MINT).expect("quest parses");
        assert_eq!(quest.protocol_label(), "Economic Protocol");
        assert_eq!(quest.registry_line(), "Registry ID: q1 • Cycle: cycle-7");
    }

    #[test]
    fn numeric_markers_and_missing_ids_are_tolerated() {
        let quest = Quest::from_json(
            r#"{"title":"T","type":"Stimulus","flavor_text":"F","objective":"O","reward":"R","generated_at":1718000000,"extra":true}"#,
        )
        .expect("quest parses");
        assert_eq!(quest.id, "");
        assert_eq!(quest.generated_at, "1718000000");
    }

    #[test]
    fn partial_record_renders_with_empty_fields() {
        let quest = parse_current_quest(
            r#"{"title":"Reclaim the Mint","type":"Economic","objective":"Stabilize inflation","reward":"500 gold","_id":"q1","generated_at":"cycle-7"}"#,
        )
        .expect("partial record parses")
        .expect("record present");
        assert_eq!(quest.title, "Reclaim the Mint");
        assert_eq!(quest.flavor_text, "");
        assert_eq!(quest.reward, "500 gold");
    }

    #[test]
    fn numeric_reward_renders_as_text() {
        let quest = Quest::from_json(
            r#"{"title":"Reclaim the Mint","type":"Economic","flavor_text":"F","objective":"O","reward":500,"_id":7,"generated_at":"cycle-7"}"#,
        )
        .expect("numeric reward parses");
        assert_eq!(quest.reward, "500");
        assert_eq!(quest.id, "7");
    }

    #[test]
    fn null_and_flag_values_render_as_text() {
        let quest = Quest::from_json(r#"{"title":null,"reward":true}"#).expect("quest parses");
        assert_eq!(quest.title, "");
        assert_eq!(quest.reward, "true");
    }

    #[test]
    fn current_quest_null_means_no_record() {
        assert_eq!(parse_current_quest("null").expect("null parses"), None);
    }

    #[test]
    fn current_quest_error_object_is_backend_failure() {
        let err = parse_current_quest(r#"{"error": "Database not connected"}"#)
            .expect_err("backend error");
        assert!(matches!(err, ApiError::Backend(ref reason) if reason == "Database not connected"));
    }

    #[test]
    fn current_quest_garbage_is_decode_failure() {
        assert!(matches!(
            parse_current_quest("<html>502</html>"),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            parse_current_quest(r#"["Reclaim the Mint"]"#),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(
            parse_current_quest(r#""Reclaim the Mint""#),
            Err(ApiError::Decode(_))
        ));
        // Nested values are not renderable text
        assert!(matches!(
            parse_current_quest(r#"{"title":{"en":"Reclaim the Mint"}}"#),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn unrelated_object_renders_as_empty_record() {
        let quest = parse_current_quest(r#"{"status": "Genesis System Online"}"#)
            .expect("object parses")
            .expect("record present");
        assert_eq!(quest, Quest::default());
    }

    #[test]
    fn current_quest_object_parses_record() {
        let quest = parse_current_quest(MINT)
            .expect("record parses")
            .expect("record present");
        assert_eq!(quest.id, "q1");
    }
}
