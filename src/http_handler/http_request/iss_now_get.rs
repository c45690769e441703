use super::iss_now::IssNowResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /iss-now.json endpoint.
#[derive(Debug)]
pub struct IssNowRequest {}

impl NoBodyHTTPRequestType for IssNowRequest {}

impl HTTPRequestType for IssNowRequest {
    type Response = IssNowResponse;
    fn endpoint(&self) -> &'static str { "/iss-now.json" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
