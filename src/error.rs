//! User-visible search errors

use thiserror::Error;

/// The two failures a search can surface. `Display` is the text shown on the card.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Blank or whitespace-only input; no request is made
    #[error("Please enter a valid location.")]
    EmptyInput,
    /// Transport failure, non-2xx status, or an unreadable body
    #[error("City not found. Please try again.")]
    FetchFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SearchError::EmptyInput.to_string(),
            "Please enter a valid location."
        );
        assert_eq!(
            SearchError::FetchFailed.to_string(),
            "City not found. Please try again."
        );
    }
}
