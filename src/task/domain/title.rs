//! Validated task title type.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum title length in characters, matching the `VARCHAR(200)` column.
const MAX_TITLE_CHARS: usize = 200;

/// Validated task title.
///
/// A title is never empty and never exceeds 200 characters. The original
/// text is preserved as supplied; validation only rejects, it does not
/// normalise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskTitle(String);

impl TaskTitle {
    /// Creates a validated task title.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the value is empty, or
    /// [`TaskDomainError::TitleTooLong`] when it exceeds 200 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();

        if raw.is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        let char_count = raw.chars().count();
        if char_count > MAX_TITLE_CHARS {
            return Err(TaskDomainError::TitleTooLong(char_count));
        }

        Ok(Self(raw))
    }

    /// Returns the title as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskTitle {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
