use crate::ValidationError;

/// A validated `(name, location)` pair, both trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessQuery {
    name: String,
    location: String,
}

impl BusinessQuery {
    /// # Errors
    ///
    /// Returns [`ValidationError`] if either value is empty after trimming.
    /// The name is checked first.
    pub fn new(name: &str, location: &str) -> Result<Self, ValidationError> {
        Self::from_parts(Some(name), Some(location))
    }

    /// Like [`BusinessQuery::new`] but treats a missing value the same as an
    /// empty one, which is how absent JSON fields and query params arrive.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if either value is missing or blank.
    pub fn from_parts(
        name: Option<&str>,
        location: Option<&str>,
    ) -> Result<Self, ValidationError> {
        let name = name
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingName)?;
        let location = location
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ValidationError::MissingLocation)?;

        Ok(Self {
            name: name.to_owned(),
            location: location.to_owned(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RequiredField;

    #[test]
    fn trims_both_fields() {
        let q = BusinessQuery::new("  Joe's Pizza ", "\tNYC\n").unwrap();
        assert_eq!(q.name(), "Joe's Pizza");
        assert_eq!(q.location(), "NYC");
    }

    #[test]
    fn empty_name_fails() {
        let err = BusinessQuery::new("", "NYC").unwrap_err();
        assert_eq!(err, ValidationError::MissingName);
        assert_eq!(err.field(), RequiredField::Name);
    }

    #[test]
    fn empty_location_fails() {
        let err = BusinessQuery::new("Joe's Pizza", "").unwrap_err();
        assert_eq!(err, ValidationError::MissingLocation);
        assert_eq!(err.field(), RequiredField::Location);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        assert_eq!(
            BusinessQuery::new("   ", "NYC").unwrap_err(),
            ValidationError::MissingName
        );
    }

    #[test]
    fn missing_parts_fail() {
        assert_eq!(
            BusinessQuery::from_parts(None, Some("NYC")).unwrap_err(),
            ValidationError::MissingName
        );
        assert_eq!(
            BusinessQuery::from_parts(Some("Joe's"), None).unwrap_err(),
            ValidationError::MissingLocation
        );
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(
            ValidationError::MissingName.to_string(),
            "Business name is required"
        );
        assert_eq!(
            ValidationError::MissingLocation.to_string(),
            "Location is required"
        );
    }
}
