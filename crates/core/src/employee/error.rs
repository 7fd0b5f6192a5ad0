use thiserror::Error;

/// Errors raised while validating an employee request body.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("Invalid field value: {0}")]
    InvalidField(String),
}

/// Errors raised while building a search filter from query parameters.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("No valid search criteria provided.")]
    NoCriteria,
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_display_lists_fields() {
        let error = ValidationError::MissingFields(vec!["Minit", "Salary"]);
        assert_eq!(error.to_string(), "Missing required fields: Minit, Salary");
    }

    #[test]
    fn test_search_error_display() {
        assert_eq!(
            SearchError::NoCriteria.to_string(),
            "No valid search criteria provided."
        );
        assert_eq!(
            SearchError::InvalidValue {
                field: "Super_ssn",
                value: "abc".to_string()
            }
            .to_string(),
            "Invalid value for Super_ssn: abc"
        );
    }
}
