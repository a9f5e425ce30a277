//! Error Types
//!
//! Remote errors (transport, parse, `success:false`) and validation errors
//! raised before any request is sent.

use thiserror::Error;

use crate::config::FORBIDDEN_FIELD_CHARS;

/// Failure of a backend call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Request never produced a response body
    #[error("network error: {0}")]
    Transport(String),
    /// Body was not the JSON we expected
    #[error("invalid response: {0}")]
    Parse(String),
    /// Backend answered with `success: false`
    #[error("{0}")]
    Api(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Input rejected on the client side
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field name cannot be empty!")]
    EmptyFieldName,
    #[error("Field name is too long (maximum {max} characters)")]
    FieldNameTooLong { max: usize },
    #[error("Field name contains invalid characters: {}", forbidden_list())]
    InvalidFieldChars,
    #[error("{0}")]
    MissingRequired(&'static str),
    #[error("No changes to save")]
    NoChanges,
    #[error("Please type DELETE to confirm")]
    ConfirmationMismatch,
    #[error("{field} must be a number")]
    InvalidNumber { field: &'static str },
    #[error("This preorder has no serial number; fix it in the sheet first")]
    MissingSerial,
}

fn forbidden_list() -> String {
    FORBIDDEN_FIELD_CHARS
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Either class of error a user action can end in
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Remote(#[from] ApiError),
}
