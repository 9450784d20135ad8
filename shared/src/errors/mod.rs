//! The normalized failure shape every remote call resolves to

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Generic message shown when neither the server nor the transport said anything useful
pub const FALLBACK_MESSAGE: &str = "Terjadi kesalahan. Silakan coba lagi.";

/// Field-keyed validation messages, as returned by the server under `errors`
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Broad category of a failed request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiErrorKind {
    /// No response arrived (offline, DNS, timeout)
    Transport,
    /// Non-2xx response
    #[default]
    Server,
    /// HTTP 401
    Unauthorized,
    /// Response carried a field-keyed `errors` map (usually 422)
    Validation,
    /// 2xx response whose body could not be decoded
    Decode,
}

/// Normalized API error
///
/// Only the HTTP access layer (and transport doubles in tests) builds these.
/// The serialized form is `{ success: false, message, errors? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Always `false`
    pub success: bool,

    /// Best available human-readable message
    pub message: String,

    /// Per-field validation messages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,

    /// HTTP status, absent for transport failures
    #[serde(skip)]
    pub status: Option<u16>,

    #[serde(skip)]
    pub kind: ApiErrorKind,
}

impl ApiError {
    /// Normalize a failed exchange.
    ///
    /// Message preference: server body `message`, then `transport_message`,
    /// then [`FALLBACK_MESSAGE`].
    pub fn normalize(status: Option<u16>, body: Option<&Value>, transport_message: Option<&str>) -> Self {
        let server_message = body
            .and_then(|b| b.get("message"))
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty());

        let message = server_message
            .or_else(|| transport_message.map(str::trim).filter(|m| !m.is_empty()))
            .unwrap_or(FALLBACK_MESSAGE)
            .to_string();

        let errors = body.and_then(|b| b.get("errors")).and_then(parse_field_errors);

        let kind = match status {
            Some(401) => ApiErrorKind::Unauthorized,
            _ if errors.is_some() => ApiErrorKind::Validation,
            Some(422) => ApiErrorKind::Validation,
            Some(_) => ApiErrorKind::Server,
            None => ApiErrorKind::Transport,
        };

        Self {
            success: false,
            message,
            errors,
            status,
            kind,
        }
    }

    /// A request that never got a response
    pub fn transport(detail: Option<&str>) -> Self {
        Self::normalize(None, None, detail)
    }

    /// A 2xx response whose body was not what the caller expected
    pub fn decode(status: u16) -> Self {
        Self {
            success: false,
            message: FALLBACK_MESSAGE.to_string(),
            errors: None,
            status: Some(status),
            kind: ApiErrorKind::Decode,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind == ApiErrorKind::Unauthorized
    }

    pub fn is_validation(&self) -> bool {
        self.kind == ApiErrorKind::Validation
    }

    pub fn is_transport(&self) -> bool {
        self.kind == ApiErrorKind::Transport
    }

    /// Messages for a single form field
    pub fn field_errors(&self, field: &str) -> Option<&[String]> {
        self.errors
            .as_ref()
            .and_then(|errors| errors.get(field))
            .map(Vec::as_slice)
    }

    /// First validation message in field order, if any
    pub fn first_field_error(&self) -> Option<&str> {
        self.errors
            .as_ref()?
            .values()
            .flat_map(|messages| messages.iter())
            .next()
            .map(String::as_str)
    }
}

fn parse_field_errors(value: &Value) -> Option<FieldErrors> {
    let object = value.as_object()?;
    let mut errors = FieldErrors::new();
    for (field, messages) in object {
        let list: Vec<String> = match messages {
            Value::Array(items) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            Value::String(message) => vec![message.clone()],
            _ => continue,
        };
        if !list.is_empty() {
            errors.insert(field.clone(), list);
        }
    }
    (!errors.is_empty()).then_some(errors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_message_wins() {
        let body = json!({ "status": false, "message": "Email atau password salah" });
        let error = ApiError::normalize(Some(400), Some(&body), Some("Request failed with status code 400"));
        assert_eq!(error.message, "Email atau password salah");
        assert_eq!(error.kind, ApiErrorKind::Server);
        assert!(!error.success);
    }

    #[test]
    fn test_transport_message_when_body_is_silent() {
        let body = json!({ "message": "   " });
        let error = ApiError::normalize(Some(500), Some(&body), Some("Request failed with status code 500"));
        assert_eq!(error.message, "Request failed with status code 500");
    }

    #[test]
    fn test_fallback_for_transport_failure() {
        let error = ApiError::transport(None);
        assert_eq!(error.message, FALLBACK_MESSAGE);
        assert!(error.is_transport());
        assert_eq!(error.status, None);
    }

    #[test]
    fn test_unauthorized_kind() {
        let error = ApiError::normalize(Some(401), Some(&json!({ "message": "Unauthenticated." })), None);
        assert!(error.is_unauthorized());
        assert_eq!(error.status, Some(401));
    }

    #[test]
    fn test_validation_map_is_preserved() {
        let body = json!({
            "message": "The given data was invalid.",
            "errors": {
                "email": ["The email has already been taken."],
                "no_telp": "The no telp field is required."
            }
        });
        let error = ApiError::normalize(Some(422), Some(&body), None);
        assert!(error.is_validation());
        assert_eq!(
            error.field_errors("email"),
            Some(&["The email has already been taken.".to_string()][..])
        );
        assert_eq!(error.field_errors("no_telp").map(|m| m.len()), Some(1));
        assert_eq!(error.first_field_error(), Some("The email has already been taken."));
    }

    #[test]
    fn test_serialized_shape() {
        let error = ApiError::normalize(Some(404), Some(&json!({ "message": "Order tidak ditemukan" })), None);
        let value = serde_json::to_value(&error).unwrap();
        assert_eq!(value, json!({ "success": false, "message": "Order tidak ditemukan" }));
    }
}
