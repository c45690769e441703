use std::fmt;

/// Implemented by every type an endpoint's JSON body is decoded into.
///
/// Decoding happens in two steps: the raw body is first parsed into a
/// `serde_json::Value` (see [`parse_json_body`]), then that value is mapped onto
/// the response type. Keeping the steps apart lets callers tell malformed JSON
/// from well-formed JSON of the wrong shape.
pub(crate) trait HTTPResponseType: Sized {
    fn from_json(value: serde_json::Value) -> Result<Self, SchemaError>;
}

/// Marker for responses that map directly onto a `serde::Deserialize` struct.
pub(crate) trait SerdeJSONBodyHTTPResponseType {}

impl<T> HTTPResponseType for T
where
    T: SerdeJSONBodyHTTPResponseType,
    for<'de> T: serde::Deserialize<'de>,
{
    fn from_json(value: serde_json::Value) -> Result<Self, SchemaError> {
        serde_json::from_value(value).map_err(|e| SchemaError::Malformed(e.to_string()))
    }
}

/// Decodes a raw response body into a generic JSON value.
///
/// # Errors
/// Returns a `ParseError` if `body` is not well-formed JSON.
pub(crate) fn parse_json_body(body: &str) -> Result<serde_json::Value, ParseError> {
    Ok(serde_json::from_str(body)?)
}

/// Returns the response unchanged if its status is a success, otherwise maps the
/// status class onto a `ResponseError`.
pub(crate) fn unwrap_return_code(
    response: reqwest::Response,
) -> Result<reqwest::Response, ResponseError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else if status.is_server_error() {
        Err(ResponseError::InternalServer(status.as_u16()))
    } else if status.is_client_error() {
        Err(ResponseError::BadRequest(status.as_u16()))
    } else {
        Err(ResponseError::Unexpected(status.as_u16()))
    }
}

/// The upstream could not be reached or did not answer with a success status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseError {
    /// 5xx status.
    InternalServer(u16),
    /// 4xx status.
    BadRequest(u16),
    /// Any other non-success status (1xx, 3xx left unfollowed).
    Unexpected(u16),
    /// The request did not complete within the client timeout.
    Timeout,
    /// Connecting to the host failed.
    NoConnection,
    /// Transport failure that fits none of the above.
    Unknown(String),
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseError::InternalServer(code) => {
                write!(f, "the upstream server failed with status {code}")
            }
            ResponseError::BadRequest(code) => {
                write!(f, "the upstream server rejected the request with status {code}")
            }
            ResponseError::Unexpected(code) => {
                write!(f, "the upstream server answered with unexpected status {code}")
            }
            ResponseError::Timeout => write!(f, "the upstream server did not answer in time"),
            ResponseError::NoConnection => write!(f, "the upstream server is unreachable"),
            ResponseError::Unknown(msg) => write!(f, "network failure: {msg}"),
        }
    }
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else if let Some(status) = value.status() {
            ResponseError::Unexpected(status.as_u16())
        } else {
            ResponseError::Unknown(value.to_string())
        }
    }
}

/// The body was not well-formed JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    line: usize,
    column: usize,
}

impl From<serde_json::Error> for ParseError {
    fn from(value: serde_json::Error) -> Self { Self { line: value.line(), column: value.column() } }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "the upstream answer is not valid JSON (line {}, column {})",
            self.line, self.column
        )
    }
}

impl std::error::Error for ParseError {}

/// The body was valid JSON but did not have the expected shape.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// A field is missing or has the wrong type.
    Malformed(String),
    /// The declared head count is larger than the list of people.
    CountMismatch { declared: usize, available: usize },
    /// A coordinate is neither a number nor a numeric string.
    InvalidCoordinate { axis: &'static str, raw: String },
    /// The timestamp cannot be represented as a calendar time.
    TimestampOutOfRange(i64),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::Malformed(msg) => write!(f, "unexpected answer layout: {msg}"),
            SchemaError::CountMismatch { declared, available } => write!(
                f,
                "the answer claims {declared} people but only lists {available}"
            ),
            SchemaError::InvalidCoordinate { axis, raw } => {
                write!(f, "the {axis} {raw:?} is not a number")
            }
            SchemaError::TimestampOutOfRange(ts) => {
                write!(f, "the timestamp {ts} is not a valid point in time")
            }
        }
    }
}

impl std::error::Error for SchemaError {}
