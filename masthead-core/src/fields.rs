//! Validated field types.
//!
//! Each newtype can only be built through its `parse` constructor (or the
//! equivalent `TryFrom` impls), so holding one is proof the value passed the
//! length rule for its field. Lengths are counted in characters, not bytes.
//!
//! | field          | rule            | error             |
//! |----------------|-----------------|-------------------|
//! | author name    | at least 1      | `InvalidName`     |
//! | magazine name  | 2 to 16         | `InvalidName`     |
//! | category       | at least 1      | `InvalidCategory` |
//! | article title  | 5 to 50         | `InvalidTitle`    |

use std::fmt;
use std::ops::{Deref, RangeInclusive};

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Accepted magazine name lengths, in characters.
pub const MAGAZINE_NAME_LEN: RangeInclusive<usize> = 2..=16;

/// Accepted article title lengths, in characters.
pub const TITLE_LEN: RangeInclusive<usize> = 5..=50;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Shared plumbing for the string newtypes below.
macro_rules! validated_string {
    ($name:ident) => {
        impl $name {
            /// Borrow the validated value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Unwrap into the underlying `String`.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = ValidationError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

/// An author's name. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorName(String);

impl AuthorName {
    /// Validate and wrap an author name.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidName`] if `value` is empty.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::InvalidName {
                len: 0,
                expected: "a non-empty string",
            });
        }
        Ok(Self(value))
    }
}

validated_string!(AuthorName);

/// A magazine's name, 2 to 16 characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MagazineName(String);

impl MagazineName {
    /// Validate and wrap a magazine name.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidName`] if the length falls outside
    /// [`MAGAZINE_NAME_LEN`].
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let len = char_len(&value);
        if !MAGAZINE_NAME_LEN.contains(&len) {
            return Err(ValidationError::InvalidName {
                len,
                expected: "between 2 and 16 characters",
            });
        }
        Ok(Self(value))
    }
}

validated_string!(MagazineName);

/// A magazine's category. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(String);

impl Category {
    /// Validate and wrap a category.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidCategory`] if `value` is empty.
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::InvalidCategory);
        }
        Ok(Self(value))
    }
}

validated_string!(Category);

/// An article title, 5 to 50 characters long.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Title(String);

impl Title {
    /// Validate and wrap an article title.
    ///
    /// # Errors
    /// Returns [`ValidationError::InvalidTitle`] if the length falls outside
    /// [`TITLE_LEN`].
    pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let len = char_len(&value);
        if !TITLE_LEN.contains(&len) {
            return Err(ValidationError::InvalidTitle { len });
        }
        Ok(Self(value))
    }
}

validated_string!(Title);
