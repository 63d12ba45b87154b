//! Soft-failure return value for upstream calls.
//!
//! A non-2xx answer from the API is not an `Err`: the dispatcher hands back
//! `Reply::Failed` so callers decide whether it matters. Transport and decode
//! problems still surface as `MediumError`.

use serde::Serialize;
use serde_json::Value;

use crate::{MediumError, Result};

/// Description of a non-success HTTP response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiFailure {
    pub endpoint: String,
    pub status: u16,
    /// Human-readable summary, e.g. `Error fetching /user/abc: 404 Not Found`
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ApiFailure {
    pub fn new(endpoint: &str, status: u16, status_text: &str, body: Option<String>) -> Self {
        Self {
            endpoint: endpoint.to_string(),
            status,
            message: format!("Error fetching {}: {}", endpoint, status_text),
            body: body.filter(|b| !b.is_empty()),
        }
    }
}

/// Outcome of one dispatched request
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T = Value> {
    Data(T),
    Failed(ApiFailure),
}

impl<T> Reply<T> {
    pub fn is_failed(&self) -> bool {
        matches!(self, Reply::Failed(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            Reply::Data(data) => Some(data),
            Reply::Failed(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&ApiFailure> {
        match self {
            Reply::Data(_) => None,
            Reply::Failed(failure) => Some(failure),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Reply<U> {
        match self {
            Reply::Data(data) => Reply::Data(f(data)),
            Reply::Failed(failure) => Reply::Failed(failure),
        }
    }

    /// Like `map`, for conversions that can themselves fail
    pub fn try_map<U>(self, f: impl FnOnce(T) -> Result<U>) -> Result<Reply<U>> {
        match self {
            Reply::Data(data) => f(data).map(Reply::Data),
            Reply::Failed(failure) => Ok(Reply::Failed(failure)),
        }
    }

    /// Turn a soft failure into `MediumError::Api` for `?`-style callers
    pub fn into_result(self) -> Result<T> {
        match self {
            Reply::Data(data) => Ok(data),
            Reply::Failed(failure) => Err(MediumError::Api(failure.message)),
        }
    }
}

impl Reply<Value> {
    /// Project a single string field out of a successful body
    pub fn project(self, field: &str, endpoint: &str) -> Result<Reply<String>> {
        self.try_map(|body| {
            body.get(field)
                .and_then(Value::as_str)
                .map(str::to_string)
                .ok_or_else(|| {
                    MediumError::Parse(format!(
                        "response from {} has no string field `{}`",
                        endpoint, field
                    ))
                })
        })
    }
}
