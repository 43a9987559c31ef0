use crate::error::CoreError;
use std::fmt::Display;

/// A validated short code identifier for a shortened URL.
///
/// Short codes must be 1-32 characters long and contain only ASCII letters,
/// ASCII digits or basic Cyrillic letters (`а`-`я`, `А`-`Я`).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ShortCode(String);

const MIN_LENGTH: usize = 1;
/// Longest accepted short code, in characters.
pub const MAX_LENGTH: usize = 32;

impl ShortCode {
    /// Creates a new `ShortCode` after validating the input.
    pub fn new(code: impl Into<String>) -> std::result::Result<Self, CoreError> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (e.g. ID generators that are guaranteed to produce valid output).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns `true` if `c` may appear in a short code.
    pub fn is_code_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || matches!(c, 'а'..='я' | 'А'..='Я')
    }

    /// Generates the full shortened URL based on the provided base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> std::result::Result<(), CoreError> {
        let length = code.chars().count();
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
            return Err(CoreError::InvalidShortCode(format!(
                "length must be between {} and {}, got {}",
                MIN_LENGTH, MAX_LENGTH, length
            )));
        }

        if !code.chars().all(Self::is_code_char) {
            return Err(CoreError::InvalidShortCode(format!(
                "must contain only letters or digits: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
