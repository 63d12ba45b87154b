//! Endpoint path plus query parameters for a single GET.
//!
//! Empty values never reach the wire: `None` and values whose string form is
//! empty are skipped when the request is built, and setting the same name
//! twice keeps only the last value.

use medium_core::{MediumError, Result};
use reqwest::Url;

/// Conversion into a query-string value
pub trait QueryValue {
    fn to_query_value(&self) -> String;
}

impl QueryValue for str {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl QueryValue for String {
    fn to_query_value(&self) -> String {
        self.clone()
    }
}

impl QueryValue for bool {
    fn to_query_value(&self) -> String {
        self.to_string()
    }
}

impl<T: QueryValue + ?Sized> QueryValue for &T {
    fn to_query_value(&self) -> String {
        (**self).to_query_value()
    }
}

macro_rules! numeric_query_value {
    ($($ty:ty),*) => {
        $(impl QueryValue for $ty {
            fn to_query_value(&self) -> String {
                self.to_string()
            }
        })*
    };
}

numeric_query_value!(u8, u16, u32, u64, usize, i32, i64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    path: String,
    params: Vec<(String, String)>,
}

impl Request {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: Vec::new(),
        }
    }

    pub fn param(mut self, name: &str, value: impl QueryValue) -> Self {
        let value = value.to_query_value();
        if value.is_empty() {
            return self;
        }
        self.params.retain(|(existing, _)| existing != name);
        self.params.push((name.to_string(), value));
        self
    }

    pub fn opt<V: QueryValue>(self, name: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(name, value),
            None => self,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn params(&self) -> &[(String, String)] {
        &self.params
    }

    /// Names of the recorded parameters, for logging
    pub fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Absolute URL for this request against `base_url`
    pub fn url(&self, base_url: &str) -> Result<Url> {
        let raw = format!("{}{}", base_url.trim_end_matches('/'), self.path);
        let mut url = Url::parse(&raw)
            .map_err(|e| MediumError::InvalidInput(format!("bad URL {}: {}", raw, e)))?;

        if !self.params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(self.params.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        }

        Ok(url)
    }
}
