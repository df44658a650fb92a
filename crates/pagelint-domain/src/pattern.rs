use crate::error::AuditError;
use regex::Regex;
use std::fmt;

/// Compiled violation pattern, fixed per audit.
///
/// Case sensitivity is whatever the author wrote; use `(?i)` for case-insensitive matching.
#[derive(Clone, Debug)]
pub struct MatchPattern {
    regex: Regex,
}

impl MatchPattern {
    pub fn new(pattern: &str) -> Result<Self, AuditError> {
        let regex = Regex::new(pattern).map_err(|source| AuditError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Pattern matching `text` verbatim (regex metacharacters escaped).
    pub fn literal(text: &str) -> Result<Self, AuditError> {
        Self::new(&regex::escape(text))
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl PartialEq for MatchPattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for MatchPattern {}

impl fmt::Display for MatchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/", self.as_str())
    }
}
