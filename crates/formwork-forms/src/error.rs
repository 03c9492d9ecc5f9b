//! Error types for the form tree.

use formwork_dom::DomError;
use serde_json::error::Category;
use thiserror::Error;

use crate::fields::InputKind;

/// Form-specific errors.
///
/// A field failing validation is not an error; it shows up as
/// `is_valid() == false` plus the invalid marker class.
#[derive(Debug, Error)]
pub enum FormError {
    /// Options passed to a constructor were malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An explicit or configured pattern does not compile.
    #[error("invalid validation pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The field kind has no default pattern and none was supplied.
    #[error("field {id}: no validation pattern for input kind '{kind}'")]
    MissingPattern { id: String, kind: InputKind },

    /// Malformed JSON text.
    #[error("failed to parse JSON: {0}")]
    Json(#[source] serde_json::Error),

    /// The host rejected an element operation.
    #[error(transparent)]
    Dom(#[from] DomError),
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::Configuration(err.to_string()),
            Category::Io | Category::Syntax | Category::Eof => Self::Json(err),
        }
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;
