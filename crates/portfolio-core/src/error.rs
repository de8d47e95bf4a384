//! Error types for the portfolio model

use thiserror::Error;

use crate::contact::ContactError;

/// Main error type for portfolio content and form handling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    /// A navigation link points at an anchor no section renders
    #[error("Navigation anchor not found: #{0}")]
    UnknownAnchor(String),

    /// A section id appears more than once on the page
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),

    /// Contact form could not be turned into a mail request
    #[error("Contact form error: {0}")]
    Contact(#[from] ContactError),
}

/// Result alias for portfolio operations
pub type Result<T> = std::result::Result<T, PortfolioError>;
