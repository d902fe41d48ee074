use thiserror::Error;

/// Errors that can occur during relname core operations.
///
/// Parsing itself never fails; these cover catalog construction and
/// tracker identifier lookup.
#[derive(Debug, Error)]
pub enum RelnameError {
    /// A regex pattern failed to compile (should not happen with static patterns).
    #[error("regex compilation error: {0}")]
    RegexError(#[from] regex::Error),

    /// The tracker identifier does not match any known alias.
    #[error("unknown tracker identifier: {tracker:?}")]
    UnknownTracker {
        /// The identifier as supplied by the caller.
        tracker: String,
    },
}

/// Result type alias for relname operations.
pub type Result<T> = std::result::Result<T, RelnameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = RelnameError::UnknownTracker {
            tracker: "nope".into(),
        };
        assert_eq!(err.to_string(), "unknown tracker identifier: \"nope\"");
    }

    #[test]
    fn regex_error_converts() {
        let bad = regex::Regex::new("(unclosed").unwrap_err();
        let err: RelnameError = bad.into();
        assert!(err.to_string().starts_with("regex compilation error"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RelnameError>();
    }
}
