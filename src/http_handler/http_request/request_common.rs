use super::super::http_client::Fetch;
use super::super::http_handler_common::HTTPError;
use super::super::http_response::response_common::{HTTPResponseType, parse_json_body};
use strum_macros::Display;

/// HTTP verbs used by the open-notify endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub(crate) enum HTTPRequestMethod {
    Get,
}

/// Describes one upstream endpoint: where it lives and what it answers with.
pub(crate) trait HTTPRequestType: Sync {
    /// Type of the expected response.
    type Response: HTTPResponseType + Send;
    /// Path of the endpoint, relative to the client's base URL.
    fn endpoint(&self) -> &'static str;
    /// The corresponding HTTP request method.
    fn request_method(&self) -> HTTPRequestMethod;
}

/// Requests that carry neither a body nor extra headers.
#[async_trait::async_trait]
pub(crate) trait NoBodyHTTPRequestType: HTTPRequestType {
    /// Fetches the endpoint through `client`, parses the body as JSON and maps it
    /// onto `Self::Response`.
    ///
    /// # Errors
    /// `HTTPError::Network` if the fetch fails, `HTTPError::Parse` for malformed
    /// JSON and `HTTPError::Schema` for JSON of the wrong shape.
    async fn send_request(&self, client: &dyn Fetch) -> Result<Self::Response, HTTPError> {
        crate::event!("{} {}", self.request_method(), self.endpoint());
        let body = client.fetch(self.endpoint()).await?;
        let value = parse_json_body(&body)?;
        Ok(Self::Response::from_json(value)?)
    }
}
