//! Error types shared by the navigation core.
use thiserror::Error;

/// Navigation failures. None of these are fatal; callers log them and keep
/// handling input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NavError {
    #[error("already at the final level")]
    PastFinal,
    #[error("already at the first level")]
    BeforeStart,
    #[error("level not found: {0}")]
    UnknownLevel(String),
}

/// Fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields(Vec<ContactField>),
}

/// Errors raised while loading embedded JSON data.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid date '{value}' in {what}")]
    Date { what: &'static str, value: String },
}
