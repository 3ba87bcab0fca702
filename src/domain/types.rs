//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs should carry these wrappers instead of raw primitives so that
//! identifiers, text values and numeric constraints are enforced at the
//! boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// A numeric value required to be positive was zero.
    #[error("{0} must be greater than zero")]
    NonPositiveNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// URL validation failed.
    #[error("{0} must be a valid URL")]
    InvalidUrl(&'static str),
    /// Timestamp was not a valid RFC 3339 / ISO-8601 value.
    #[error("{0} must be an ISO-8601 timestamp")]
    InvalidTimestamp(&'static str),
    /// Two records of the same kind share an identifier.
    #[error("duplicate {0} id: {1}")]
    DuplicateId(&'static str, String),
    /// A category uses a name reserved for the "no filter" sentinel.
    #[error("category name `{0}` is reserved")]
    ReservedName(String),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

/// Accessors and conversions shared by all string-backed newtypes.
macro_rules! string_newtype_impls {
    ($name:ident) => {
        impl $name {
            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::ops::Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }
        }

        string_newtype_impls!($name);
    };
}

macro_rules! url_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed URL and validates its format.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = trim_and_require_non_empty(value, $field)?;
                if !trimmed.as_str().validate_url() {
                    return Err(TypeConstraintError::InvalidUrl($field));
                }
                Ok(Self(trimmed))
            }
        }

        string_newtype_impls!($name);
    };
}

non_empty_string_newtype!(ArticleId, "Stable identifier of an article.", "article id");
non_empty_string_newtype!(
    CategoryId,
    "Stable identifier of a category.",
    "category id"
);
non_empty_string_newtype!(
    CategoryName,
    "Category display name, also used as the matching key for articles.",
    "category"
);
non_empty_string_newtype!(ArticleTitle, "Article headline.", "title");
non_empty_string_newtype!(AuthorName, "Article byline.", "author");

url_string_newtype!(ImageUrl, "Article cover image URL.", "image url");

/// Estimated reading time in whole minutes.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "u32", into = "u32")]
pub struct ReadTime(u32);

impl ReadTime {
    /// Creates a reading time, rejecting zero minutes.
    pub fn new(minutes: u32) -> Result<Self, TypeConstraintError> {
        if minutes > 0 {
            Ok(Self(minutes))
        } else {
            Err(TypeConstraintError::NonPositiveNumber("read time"))
        }
    }

    pub const fn minutes(self) -> u32 {
        self.0
    }
}

impl Display for ReadTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} min read", self.0)
    }
}

impl TryFrom<u32> for ReadTime {
    type Error = TypeConstraintError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ReadTime> for u32 {
    fn from(value: ReadTime) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_identifiers() {
        let id = ArticleId::new("  42 ").unwrap();
        assert_eq!(id.as_str(), "42");
        assert_eq!(id, "42");
    }

    #[test]
    fn rejects_blank_category_names() {
        let err = CategoryName::new("   ").unwrap_err();
        assert_eq!(err, TypeConstraintError::EmptyString("category"));
    }

    #[test]
    fn validates_image_urls() {
        assert!(ImageUrl::new("https://images.example.com/cover.jpeg").is_ok());
        let err = ImageUrl::new("cover.jpeg").unwrap_err();
        assert_eq!(err, TypeConstraintError::InvalidUrl("image url"));
    }

    #[test]
    fn read_time_rejects_zero() {
        assert_eq!(
            ReadTime::new(0).unwrap_err(),
            TypeConstraintError::NonPositiveNumber("read time")
        );
        assert_eq!(ReadTime::new(5).unwrap().to_string(), "5 min read");
    }

    #[test]
    fn deserializing_validates_values() {
        let parsed: Result<ArticleId, _> = serde_json::from_str("\"  \"");
        assert!(parsed.is_err());
        let parsed: ArticleId = serde_json::from_str("\"7\"").unwrap();
        assert_eq!(parsed, "7");
    }
}
