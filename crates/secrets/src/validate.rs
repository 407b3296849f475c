//! Required-field validation for credentials records

use beeutil_core::{CredentialsRecord, Result, SecretsError};

/// Check that `record` carries every required field.
///
/// Only presence is checked; values are not inspected. The error lists every
/// missing field, not just the first.
pub fn validate(record: &CredentialsRecord) -> Result<()> {
    let missing = record.missing_required();
    if missing.is_empty() {
        return Ok(());
    }

    tracing::debug!(missing = ?missing, "Credentials record failed validation");
    Err(SecretsError::validation(missing))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_record_passes() {
        let record: CredentialsRecord = [
            ("aws_key", "k"),
            ("aws_secret", "s"),
            ("aws_bucket", "b"),
            ("aws_region", "r"),
        ]
        .into_iter()
        .collect();
        assert!(validate(&record).is_ok());
    }

    #[test]
    fn test_empty_values_still_count_as_present() {
        let record: CredentialsRecord = [
            ("aws_key", ""),
            ("aws_secret", ""),
            ("aws_bucket", ""),
            ("aws_region", ""),
        ]
        .into_iter()
        .collect();
        assert!(validate(&record).is_ok());
    }

    #[test]
    fn test_lists_every_missing_field() {
        let record: CredentialsRecord = [("aws_key", "k")].into_iter().collect();
        let err = validate(&record).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(
            err.missing_fields(),
            ["aws_secret", "aws_bucket", "aws_region"]
        );
        let msg = err.to_string();
        assert!(msg.contains("aws_secret"));
        assert!(msg.contains("aws_bucket"));
        assert!(msg.contains("aws_region"));
        assert!(!msg.contains("aws_key"));
    }

    #[test]
    fn test_empty_record_misses_all_four() {
        let err = validate(&CredentialsRecord::new()).unwrap_err();
        assert_eq!(err.missing_fields().len(), 4);
    }
}
