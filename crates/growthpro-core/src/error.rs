use thiserror::Error;

/// A required request field that was missing or blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    Name,
    Location,
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequiredField::Name => write!(f, "name"),
            RequiredField::Location => write!(f, "location"),
        }
    }
}

/// The only failure the classifier and generators can produce: a request
/// whose name or location is empty once trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Business name is required")]
    MissingName,

    #[error("Location is required")]
    MissingLocation,
}

impl ValidationError {
    #[must_use]
    pub fn field(&self) -> RequiredField {
        match self {
            ValidationError::MissingName => RequiredField::Name,
            ValidationError::MissingLocation => RequiredField::Location,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
