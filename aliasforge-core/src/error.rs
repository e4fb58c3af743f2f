//! Validation errors raised before any candidate is generated

use crate::api::Style;
use thiserror::Error;

/// Input problems detected while tokenizing a [`NameProfile`](crate::NameProfile)
///
/// Validation fails fast: no partial word list is ever produced for an
/// invalid profile.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A name field required by the selected style was not supplied
    #[error("{field} is required for the {style} style")]
    MissingField {
        /// Human-readable field name
        field: &'static str,
        /// Style that requires the field
        style: Style,
    },

    /// A field was supplied but contains no ASCII letters or digits
    #[error("{field} '{value}' contains no usable letters or digits")]
    EmptyField {
        /// Human-readable field name
        field: &'static str,
        /// The raw value as supplied
        value: String,
    },

    /// The year is not exactly four digits
    #[error("year '{0}' is not a four-digit year")]
    InvalidYear(String),

    /// The date of birth matches none of the accepted formats
    #[error("date of birth '{0}' is not YYYY/MM/DD, YYYY-MM-DD or a four-digit year")]
    InvalidDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_display() {
        let error = ValidationError::MissingField {
            field: "surname",
            style: Style::Chinese,
        };
        assert_eq!(error.to_string(), "surname is required for the Chinese style");
    }

    #[test]
    fn test_empty_field_display() {
        let error = ValidationError::EmptyField {
            field: "alias",
            value: "???".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "alias '???' contains no usable letters or digits"
        );
    }

    #[test]
    fn test_date_errors_display() {
        assert_eq!(
            ValidationError::InvalidYear("01".to_string()).to_string(),
            "year '01' is not a four-digit year"
        );
        assert!(ValidationError::InvalidDate("15/10/2001".to_string())
            .to_string()
            .contains("YYYY/MM/DD"));
    }
}
