#![forbid(unsafe_code)]

/// Natural identifier of a managed document: the source file's base name.
///
/// Keys end up in the `filename` column and in JSON payloads, so the usual
/// path/control-character escapes are rejected up front instead of at the
/// store boundary.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DocKey(String);

impl DocKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn try_new(value: impl Into<String>) -> Result<Self, DocKeyError> {
        let value = value.into();
        validate_key(&value)?;
        Ok(Self(value))
    }
}

impl std::fmt::Display for DocKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocKeyError {
    Empty,
    TooLong,
    ContainsSeparator { ch: char, index: usize },
    ContainsControl { index: usize },
}

impl std::fmt::Display for DocKeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "key must not be empty"),
            Self::TooLong => write!(f, "key exceeds 255 bytes"),
            Self::ContainsSeparator { ch, index } => {
                write!(f, "key contains path separator {ch:?} at byte {index}")
            }
            Self::ContainsControl { index } => {
                write!(f, "key contains control character at byte {index}")
            }
        }
    }
}

impl std::error::Error for DocKeyError {}

fn validate_key(value: &str) -> Result<(), DocKeyError> {
    if value.trim().is_empty() {
        return Err(DocKeyError::Empty);
    }
    if value.len() > 255 {
        return Err(DocKeyError::TooLong);
    }
    for (index, ch) in value.char_indices() {
        if matches!(ch, '/' | '\\') {
            return Err(DocKeyError::ContainsSeparator { ch, index });
        }
        if ch.is_control() {
            return Err(DocKeyError::ContainsControl { index });
        }
    }
    Ok(())
}
