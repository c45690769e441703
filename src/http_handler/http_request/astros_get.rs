use super::astros::AstrosResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType, NoBodyHTTPRequestType};

/// Request type for the /astros.json endpoint.
#[derive(Debug)]
pub struct AstrosRequest {}

impl NoBodyHTTPRequestType for AstrosRequest {}

impl HTTPRequestType for AstrosRequest {
    type Response = AstrosResponse;
    fn endpoint(&self) -> &'static str { "/astros.json" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
