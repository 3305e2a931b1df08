//! List query filters.

use std::fmt::Display;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

use crate::constants::MAX_WINDOW;

/// Optional constraints for listing users.
///
/// Every field is optional and absent fields impose no restriction. Empty
/// values, a zero `limit` and a zero `offset` count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(
    feature = "openapi",
    derive(utoipa::IntoParams),
    into_params(parameter_in = Query)
)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    /// Case-sensitive substring of the name
    pub name: Option<String>,
    /// Case-sensitive substring of the email
    pub email: Option<String>,
    /// Inclusive lower age bound
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_age: Option<i32>,
    /// Inclusive upper age bound
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_age: Option<i32>,
    /// Maximum number of records to return
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<u64>,
    /// Number of records to skip in the ordered result
    #[serde(default, deserialize_with = "empty_as_none")]
    pub offset: Option<u64>,
}

impl UserFilter {
    /// Name needle, if one constrains the query
    pub fn name_needle(&self) -> Option<&str> {
        self.name.as_deref().filter(|s| !s.is_empty())
    }

    /// Email needle, if one constrains the query
    pub fn email_needle(&self) -> Option<&str> {
        self.email.as_deref().filter(|s| !s.is_empty())
    }

    /// Limit to apply, if any, capped at `MAX_WINDOW`
    pub fn effective_limit(&self) -> Option<u64> {
        self.limit
            .filter(|&limit| limit > 0)
            .map(|limit| limit.min(MAX_WINDOW))
    }

    /// Offset to apply (zero when absent), capped at `MAX_WINDOW`
    pub fn effective_offset(&self) -> u64 {
        self.offset.unwrap_or(0).min(MAX_WINDOW)
    }

    /// Filter builder: name substring
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Filter builder: email substring
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Filter builder: inclusive age range, either bound optional
    pub fn with_age_range(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.min_age = min;
        self.max_age = max;
        self
    }

    /// Filter builder: window over the ordered result
    pub fn with_page(mut self, limit: Option<u64>, offset: Option<u64>) -> Self {
        self.limit = limit;
        self.offset = offset;
        self
    }
}

/// Number that may arrive as text; an empty string means absent.
///
/// Query strings carry every value as text, JSON bodies carry numbers.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<N> {
        Number(N),
        Text(String),
    }

    match Option::<Raw<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Ok(None)
            } else {
                text.parse().map(Some).map_err(de::Error::custom)
            }
        }
    }
}
