use super::http_response::response_common::{ParseError, ResponseError, SchemaError};
use std::fmt;

/// Everything that can keep one dashboard section from rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum HTTPError {
    /// The endpoint was unreachable, timed out or answered with a non-success status.
    Network(ResponseError),
    /// The body was not well-formed JSON.
    Parse(ParseError),
    /// The JSON was well-formed but had an unexpected shape.
    Schema(SchemaError),
}

impl HTTPError {
    /// Short class name used in logs and in the JSON error body.
    pub fn kind(&self) -> &'static str {
        match self {
            HTTPError::Network(_) => "NetworkError",
            HTTPError::Parse(_) => "ParseError",
            HTTPError::Schema(_) => "SchemaError",
        }
    }
}

impl fmt::Display for HTTPError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HTTPError::Network(e) => e.fmt(f),
            HTTPError::Parse(e) => e.fmt(f),
            HTTPError::Schema(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for HTTPError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HTTPError::Network(e) => Some(e),
            HTTPError::Parse(e) => Some(e),
            HTTPError::Schema(e) => Some(e),
        }
    }
}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { HTTPError::Network(value) }
}

impl From<ParseError> for HTTPError {
    fn from(value: ParseError) -> Self { HTTPError::Parse(value) }
}

impl From<SchemaError> for HTTPError {
    fn from(value: SchemaError) -> Self { HTTPError::Schema(value) }
}
