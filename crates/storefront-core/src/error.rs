//! Error types for Storefront

use thiserror::Error;

/// Main error type for catalog retrieval
///
/// The UI collapses every variant into one fixed user-facing message; the
/// variants exist so the diagnostic log can tell a dead network apart from
/// a body that stopped being JSON.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Request never produced a usable response (connection failure,
    /// timeout, or a non-success HTTP status)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Response body could not be decoded as a product array
    #[error("Malformed catalog response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_parse() {
        let json_err = serde_json::from_str::<Vec<u64>>("not json").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(format!("{}", err).starts_with("Malformed catalog response:"));
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<Vec<u64>>("{").unwrap_err();
        let err: CatalogError = json_err.into();
        assert!(matches!(err, CatalogError::Parse(_)));
    }
}
