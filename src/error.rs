//! Error types for the timesheet audit engine.
//!
//! The engine itself never fails on row-level anomalies (bad currency,
//! missing columns, blank fields all degrade to defaults). The errors here
//! belong to the boundaries around it: configuration files, uploads, CSV
//! tokenizing and file discovery.

use thiserror::Error;

/// The main error type for the timesheet audit engine.
///
/// # Example
///
/// ```
/// use timesheet_audit::error::AuditError;
///
/// let error = AuditError::MissingUpload {
///     field: "timesheets".to_string(),
/// };
/// assert_eq!(error.to_string(), "Missing file field 'timesheets'");
/// ```
#[derive(Debug, Error)]
pub enum AuditError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A required upload field was absent from the request.
    #[error("Missing file field '{field}'")]
    MissingUpload {
        /// The multipart field name that was expected.
        field: String,
    },

    /// An upload field was present but carried an empty filename.
    #[error("Empty filename for '{field}'")]
    EmptyFilename {
        /// The multipart field name with the empty filename.
        field: String,
    },

    /// The CSV text could not be tokenized.
    #[error("Error processing CSV '{source_name}': {message}")]
    CsvParse {
        /// The file or field the CSV text came from.
        source_name: String,
        /// A description of the tokenizer failure.
        message: String,
    },

    /// No CSV file matching the prefix was found for discovery.
    #[error("No CSV files found starting with '{prefix}'")]
    NoMatchingFile {
        /// The filename prefix that was searched for.
        prefix: String,
    },

    /// A file could not be read.
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// The path that failed to read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl AuditError {
    /// Returns true for errors caused by what the client sent, as opposed to
    /// server-side configuration problems.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AuditError::MissingUpload { .. }
                | AuditError::EmptyFilename { .. }
                | AuditError::CsvParse { .. }
        )
    }
}

/// A type alias for Results that return AuditError.
pub type AuditResult<T> = Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = AuditError::ConfigNotFound {
            path: "/missing/audit.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/audit.yaml"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = AuditError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_empty_filename_displays_field() {
        let error = AuditError::EmptyFilename {
            field: "scheduled".to_string(),
        };
        assert_eq!(error.to_string(), "Empty filename for 'scheduled'");
    }

    #[test]
    fn test_csv_parse_displays_source_and_message() {
        let error = AuditError::CsvParse {
            source_name: "timesheets".to_string(),
            message: "bad quoting".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Error processing CSV 'timesheets': bad quoting"
        );
    }

    #[test]
    fn test_no_matching_file_displays_prefix() {
        let error = AuditError::NoMatchingFile {
            prefix: "Report - timesheets - ".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "No CSV files found starting with 'Report - timesheets - '"
        );
    }

    #[test]
    fn test_input_errors_are_classified() {
        assert!(
            AuditError::MissingUpload {
                field: "timesheets".to_string()
            }
            .is_input_error()
        );
        assert!(
            !AuditError::ConfigNotFound {
                path: "x".to_string()
            }
            .is_input_error()
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<AuditError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_missing_upload() -> AuditResult<()> {
            Err(AuditError::MissingUpload {
                field: "scheduled".to_string(),
            })
        }

        fn propagates_error() -> AuditResult<()> {
            returns_missing_upload()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
