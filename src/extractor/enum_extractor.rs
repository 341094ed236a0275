use crate::error::{GenEnumError, Result};
use regex::Regex;

/// `enum`, one whitespace char, an ASCII identifier, one whitespace char, `{`,
/// then the shortest non-empty run of anything up to the first `}`.
///
/// Braces are not balanced: a `}` nested in the body ends the match.
pub const ENUM_PATTERN: &str = r"(?s)enum\s[0-9A-Za-z_]+\s\{.+?\}";

pub struct EnumExtractor {
    pattern: Regex,
    prefix: String,
}

impl EnumExtractor {
    pub fn new(declaration_prefix: &str) -> Result<Self> {
        let pattern = Regex::new(ENUM_PATTERN).map_err(|e| GenEnumError::Config {
            message: format!("Invalid enum pattern: {}", e),
        })?;

        Ok(Self {
            pattern,
            prefix: declaration_prefix.trim().to_string(),
        })
    }

    /// Every non-overlapping enum block in `content`, in source order, each
    /// prefixed with the declaration keyword.
    pub fn extract(&self, content: &str) -> Vec<String> {
        self.pattern
            .find_iter(content)
            .map(|m| format!("{} {}", self.prefix, m.as_str()))
            .collect()
    }
}
