//! Decoding raw response bodies into the canonical envelope.

use bk_shared::Envelope;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::{DomainError, DomainResult};

/// Decode a response body into an [`Envelope`].
///
/// An empty body (JSON `null`) is an accepted envelope without data.
pub fn decode<T: DeserializeOwned>(body: Value) -> DomainResult<Envelope<T>> {
    if body.is_null() {
        return Ok(Envelope::accepted());
    }
    Ok(serde_json::from_value(body)?)
}

/// Result-shaped access to an [`Envelope`]
pub trait EnvelopeExt<T>: Sized {
    /// `Err(Rejected)` when the status flag is false
    fn into_result(self) -> DomainResult<Envelope<T>>;

    /// Payload of an accepted envelope; `MissingData` when there is none
    fn require_data(self, context: &str) -> DomainResult<T>;
}

impl<T> EnvelopeExt<T> for Envelope<T> {
    fn into_result(self) -> DomainResult<Envelope<T>> {
        if self.ok {
            Ok(self)
        } else {
            Err(DomainError::rejected(self.message))
        }
    }

    fn require_data(self, context: &str) -> DomainResult<T> {
        self.into_result()?
            .data
            .ok_or_else(|| DomainError::missing(context))
    }
}

/// List payload: a bare array or a paginator object wrapping one
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum ListPayload<T> {
    Plain(Vec<T>),
    Paged { data: Vec<T> },
}

impl<T> ListPayload<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            ListPayload::Plain(items) => items,
            ListPayload::Paged { data } => data,
        }
    }
}

/// Decode a list endpoint; a missing or null `data` is an empty list
pub(crate) fn decode_list<T: DeserializeOwned>(body: Value) -> DomainResult<Envelope<Vec<T>>> {
    let envelope = decode::<ListPayload<T>>(body)?.into_result()?;
    Ok(envelope.map(ListPayload::into_vec))
}

/// Decode a mutation that may answer with the refreshed list.
///
/// `Ok(None)` means the server accepted the change but sent no list.
pub(crate) fn decode_optional_list<T: DeserializeOwned>(body: Value) -> DomainResult<Option<Vec<T>>> {
    let envelope = decode::<Value>(body)?.into_result()?;
    match envelope.data {
        Some(data @ Value::Array(_)) => Ok(Some(serde_json::from_value(data)?)),
        Some(Value::Object(ref map)) if map.get("data").is_some_and(Value::is_array) => {
            let payload: ListPayload<T> = serde_json::from_value(Value::Object(map.clone()))?;
            Ok(Some(payload.into_vec()))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rejected_envelope_carries_server_message() {
        let envelope = decode::<Value>(json!({ "status": false, "message": "Email sudah terdaftar" })).unwrap();
        match envelope.into_result() {
            Err(DomainError::Rejected { message }) => assert_eq!(message, "Email sudah terdaftar"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_require_data_on_empty_success() {
        let envelope = decode::<Value>(json!({ "success": true })).unwrap();
        assert!(matches!(
            envelope.require_data("profile"),
            Err(DomainError::MissingData { .. })
        ));
    }

    #[test]
    fn test_list_shapes() {
        let plain: Envelope<Vec<i64>> = decode_list(json!({ "data": [1, 2] })).unwrap();
        assert_eq!(plain.data, Some(vec![1, 2]));

        let paged: Envelope<Vec<i64>> =
            decode_list(json!({ "status": "success", "data": { "current_page": 1, "data": [3] } })).unwrap();
        assert_eq!(paged.data, Some(vec![3]));

        let empty: Envelope<Vec<i64>> = decode_list(json!({ "status": true, "data": null })).unwrap();
        assert_eq!(empty.data.unwrap_or_default(), Vec::<i64>::new());
    }

    #[test]
    fn test_empty_body_is_accepted_without_data() {
        let envelope = decode::<Value>(Value::Null).unwrap().into_result().unwrap();
        assert!(envelope.data.is_none());

        let list: Option<Vec<i64>> = decode_optional_list(Value::Null).unwrap();
        assert_eq!(list, None);

        assert!(matches!(
            decode::<Value>(Value::Null).unwrap().require_data("profile"),
            Err(DomainError::MissingData { .. })
        ));
    }

    #[test]
    fn test_optional_list() {
        let list: Option<Vec<i64>> = decode_optional_list(json!({ "status": true, "data": [1] })).unwrap();
        assert_eq!(list, Some(vec![1]));

        let single: Option<Vec<i64>> =
            decode_optional_list(json!({ "status": true, "data": { "id": 1 } })).unwrap();
        assert_eq!(single, None);
    }
}
