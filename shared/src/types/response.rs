//! Canonical response envelope
//!
//! Endpoints flag success three different ways: `status: true`,
//! `status: "success"`, or `success: true`. [`Envelope`] folds all of them
//! into one `ok` flag at the decoding boundary so service code never
//! inspects the raw shape.

use serde::{Deserialize, Deserializer};

use super::common::lenient;

#[derive(Deserialize)]
#[serde(untagged)]
enum StatusFlag {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl StatusFlag {
    fn is_ok(&self) -> bool {
        match self {
            StatusFlag::Bool(flag) => *flag,
            StatusFlag::Number(n) => *n == 1,
            StatusFlag::Text(text) => matches!(
                text.trim().to_ascii_lowercase().as_str(),
                "success" | "ok" | "true"
            ),
        }
    }
}

#[derive(Deserialize)]
struct RawEnvelope<T> {
    status: Option<StatusFlag>,
    success: Option<bool>,
    message: Option<String>,
    data: Option<T>,
    token: Option<String>,
    #[serde(default, deserialize_with = "lenient::option_u64")]
    total: Option<u64>,
}

/// One response shape for every endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope<T> {
    /// Whether the server reported success. Missing flags count as success.
    pub ok: bool,
    pub message: Option<String>,
    pub data: Option<T>,
    /// Bearer token (login and register only)
    pub token: Option<String>,
    /// Result count (search only)
    pub total: Option<u64>,
}

impl<T> Envelope<T> {
    pub fn success(data: T) -> Self {
        Self {
            ok: true,
            message: None,
            data: Some(data),
            token: None,
            total: None,
        }
    }

    /// Accepted with nothing to report, as for a `204 No Content`
    pub fn accepted() -> Self {
        Self {
            ok: true,
            message: None,
            data: None,
            token: None,
            total: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: Some(message.into()),
            data: None,
            token: None,
            total: None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Envelope<U>
    where
        F: FnOnce(T) -> U,
    {
        Envelope {
            ok: self.ok,
            message: self.message,
            data: self.data.map(f),
            token: self.token,
            total: self.total,
        }
    }
}

impl<T> From<RawEnvelope<T>> for Envelope<T> {
    fn from(raw: RawEnvelope<T>) -> Self {
        let ok = match (&raw.status, raw.success) {
            (Some(flag), _) => flag.is_ok(),
            (None, Some(success)) => success,
            (None, None) => true,
        };
        let token = raw.token.filter(|t| !t.trim().is_empty());
        Self {
            ok,
            message: raw.message,
            data: raw.data,
            token,
            total: raw.total,
        }
    }
}

impl<'de, T> Deserialize<'de> for Envelope<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawEnvelope::<T>::deserialize(deserializer).map(Envelope::from)
    }
}
