//! Error types for the employee API client.
//!
//! # Design
//! Transport-level failures live in `ApiError`; local form validation lives
//! in `DraftError`. `NotFound` and `Rejected` get dedicated variants because
//! the operator is shown different things for them: a missing record versus
//! the server's own validation message. Everything else non-2xx lands in
//! `Http` with the raw status and body.

use std::fmt;

/// Errors returned by `EmployeeApi` parse methods.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404; the requested employee does not exist.
    NotFound,

    /// The server returned 400 and a validation message for the operator.
    Rejected(String),

    /// The server returned a non-2xx status other than 400/404.
    Http { status: u16, body: String },

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "employee not found"),
            ApiError::Rejected(msg) => write!(f, "rejected by server: {msg}"),
            ApiError::Http { status, body } => write!(f, "HTTP {status}: {body}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Local validation failures for the form draft. The messages mirror what
/// the operator sees before anything is sent to the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    MissingRequired,
    InvalidEmail,
    InvalidSalary,
    InvalidDate(&'static str),
}

impl fmt::Display for DraftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DraftError::MissingRequired => write!(f, "Please fill all required fields."),
            DraftError::InvalidEmail => write!(f, "Invalid email format."),
            DraftError::InvalidSalary => write!(f, "Salary must be a positive number."),
            DraftError::InvalidDate(field) => {
                write!(f, "{field} must be a calendar date (YYYY-MM-DD).")
            }
        }
    }
}

impl std::error::Error for DraftError {}

/// Either half of a failed submit: the draft never left the client, or the
/// request could not be built.
#[derive(Debug)]
pub enum SubmitError {
    Draft(DraftError),
    Api(ApiError),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::Draft(err) => err.fmt(f),
            SubmitError::Api(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for SubmitError {}

impl From<DraftError> for SubmitError {
    fn from(err: DraftError) -> Self {
        SubmitError::Draft(err)
    }
}

impl From<ApiError> for SubmitError {
    fn from(err: ApiError) -> Self {
        SubmitError::Api(err)
    }
}
