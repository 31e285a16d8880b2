//! Failure values carried by [`Resource::Error`](crate::Resource::Error)

use thiserror::Error;

/// Message used for every unmapped 404 response
pub const NOT_FOUND_MESSAGE: &str = "The data was not found";

/// Message used when a payload was expected but the body was empty
pub const EMPTY_BODY_MESSAGE: &str = "ERROR: the response body was empty";

/// Category of a failed remote operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The server answered 404
    NotFound,
    /// The server answered with another non-success status
    Status,
    /// A successful response carried no payload where one was required
    EmptyBody,
    /// A collection that must not be empty came back empty
    Empty,
    /// The payload could not be encoded or decoded
    Decode,
    /// The request never produced a response (connect, timeout, cancelled)
    Transport,
}

/// A failed operation: human-readable message plus structured cause.
///
/// The message is what screens display; `kind` and `status` are what code
/// matches on. Remapping a message never changes the kind or status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct Failure {
    pub kind: FailureKind,
    pub status: Option<u16>,
    pub message: String,
}

impl Failure {
    pub fn new(kind: FailureKind, status: Option<u16>, message: impl Into<String>) -> Self {
        Self {
            kind,
            status,
            message: message.into(),
        }
    }

    /// 404 with the generic not-found message
    pub fn not_found() -> Self {
        Self::new(FailureKind::NotFound, Some(404), NOT_FOUND_MESSAGE)
    }

    /// Non-success status, rendered as `ERROR: <code> <phrase>`
    pub fn status(code: u16, phrase: &str) -> Self {
        let message = if phrase.is_empty() {
            format!("ERROR: {code}")
        } else {
            format!("ERROR: {code} {phrase}")
        };
        Self::new(FailureKind::Status, Some(code), message)
    }

    pub fn empty_body() -> Self {
        Self::new(FailureKind::EmptyBody, None, EMPTY_BODY_MESSAGE)
    }

    /// Required collection was empty; `message` names what is missing
    pub fn empty(message: impl Into<String>) -> Self {
        Self::new(FailureKind::Empty, None, message)
    }

    pub fn decode(reason: impl std::fmt::Display) -> Self {
        Self::new(FailureKind::Decode, None, format!("ERROR: {reason}"))
    }

    pub fn transport(reason: impl std::fmt::Display) -> Self {
        Self::new(FailureKind::Transport, None, format!("ERROR: {reason}"))
    }

    /// Replace the message, keeping kind and status
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == FailureKind::NotFound
    }
}
