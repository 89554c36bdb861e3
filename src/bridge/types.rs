//! Wire types for the bridge's `/llm` endpoint.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Request body sent to the bridge.
#[derive(Debug, Serialize)]
pub struct LlmRequest<'a> {
    pub prompt: &'a str,
}

/// One HTTP call the bridge made on behalf of a prompt.
///
/// The bridge owns these records, so fields are taken as-is: a missing field
/// becomes an empty string, and non-string scalars keep their JSON text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Action {
    #[serde(default, deserialize_with = "loose_text")]
    pub method: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub endpoint: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub status: String,
}

impl Action {
    pub fn new(
        method: impl Into<String>,
        endpoint: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            method: method.into(),
            endpoint: endpoint.into(),
            status: status.into(),
        }
    }
}

/// Response body returned by the bridge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LlmResponse {
    /// The prompt as the bridge received it.
    #[serde(default, deserialize_with = "optional_text")]
    pub prompt: Option<String>,
    /// `None` when the bridge reported nothing (absent, `null` or another
    /// falsy value). An empty list is still `Some`.
    #[serde(default, deserialize_with = "truthy_actions")]
    pub actions: Option<Vec<Action>>,
}

impl LlmResponse {
    /// Parses a response body.
    ///
    /// A `null` body is rejected. Any other non-object body carries no
    /// actions and parses as an empty response.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        match serde_json::from_str::<Value>(body)? {
            Value::Null => Err(serde_json::Error::custom("response body is null")),
            value @ Value::Object(_) => Self::deserialize(value),
            _ => Ok(Self::default()),
        }
    }
}

fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        _ => None,
    })
}

fn truthy_actions<'de, D>(deserializer: D) -> Result<Option<Vec<Action>>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .map(action_item)
            .collect::<Result<Vec<_>, _>>()
            .map(Some)
            .map_err(D::Error::custom),
        value if is_falsy(&value) => Ok(None),
        other => Err(D::Error::custom(format!(
            "expected a list of actions, found {other}"
        ))),
    }
}

/// Objects decode field by field. Other scalars carry no fields and render
/// blank. A `null` entry is unusable.
fn action_item(item: Value) -> Result<Action, serde_json::Error> {
    match item {
        Value::Object(_) => Action::deserialize(item),
        Value::Null => Err(serde_json::Error::custom("action entry is null")),
        _ => Ok(Action::default()),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_prompt_only() {
        let body = serde_json::to_string(&LlmRequest {
            prompt: "turn on the lamp",
        })
        .unwrap();
        assert_eq!(body, r#"{"prompt":"turn on the lamp"}"#);
    }

    #[test]
    fn test_parse_bridge_response() {
        let response = LlmResponse::from_json(
            r#"{"prompt":"lamp on","actions":[{"endpoint":"/devices/1","method":"PATCH","status":"success"}]}"#,
        )
        .unwrap();

        assert_eq!(response.prompt.as_deref(), Some("lamp on"));
        assert_eq!(
            response.actions,
            Some(vec![Action::new("PATCH", "/devices/1", "success")])
        );
    }

    #[test]
    fn test_absent_and_null_actions_are_none() {
        assert_eq!(LlmResponse::from_json("{}").unwrap().actions, None);
        assert_eq!(
            LlmResponse::from_json(r#"{"actions":null}"#).unwrap().actions,
            None
        );
    }

    #[test]
    fn test_falsy_scalar_actions_are_none() {
        for body in [
            r#"{"actions":false}"#,
            r#"{"actions":0}"#,
            r#"{"actions":""}"#,
        ] {
            assert_eq!(LlmResponse::from_json(body).unwrap().actions, None, "{body}");
        }
    }

    #[test]
    fn test_empty_actions_list_is_some() {
        let response = LlmResponse::from_json(r#"{"actions":[]}"#).unwrap();
        assert_eq!(response.actions, Some(vec![]));
    }

    #[test]
    fn test_truthy_non_list_actions_is_an_error() {
        assert!(LlmResponse::from_json(r#"{"actions":"yes"}"#).is_err());
        assert!(LlmResponse::from_json(r#"{"actions":{"method":"GET"}}"#).is_err());
    }

    #[test]
    fn test_action_fields_are_not_validated() {
        let response =
            LlmResponse::from_json(r#"{"actions":[{"method":"GET","status":404}]}"#).unwrap();
        assert_eq!(
            response.actions,
            Some(vec![Action::new("GET", "", "404")])
        );
    }

    #[test]
    fn test_scalar_action_entries_have_blank_fields() {
        let response = LlmResponse::from_json(r#"{"actions":["x",1,true]}"#).unwrap();
        assert_eq!(response.actions, Some(vec![Action::default(); 3]));
    }

    #[test]
    fn test_null_action_entry_is_an_error() {
        let err = LlmResponse::from_json(r#"{"actions":[null]}"#).unwrap_err();
        assert!(err.to_string().contains("action entry is null"));
    }

    #[test]
    fn test_non_object_body_has_no_actions() {
        assert_eq!(LlmResponse::from_json("[1,2]").unwrap(), LlmResponse::default());
        assert_eq!(LlmResponse::from_json("42").unwrap(), LlmResponse::default());
    }

    #[test]
    fn test_null_or_invalid_body_is_an_error() {
        assert!(LlmResponse::from_json("null").is_err());
        assert!(LlmResponse::from_json("LLM error: boom").is_err());
        assert!(LlmResponse::from_json("").is_err());
    }
}
