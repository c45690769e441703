use crate::http_handler::http_response::response_common::SerdeJSONBodyHTTPResponseType;

/// Body of `GET /astros.json`.
#[derive(serde::Deserialize, Debug)]
pub struct AstrosResponse {
    number: usize,
    people: Vec<AstronautEntry>,
    #[serde(default)]
    message: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for AstrosResponse {}

impl AstrosResponse {
    pub fn number(&self) -> usize { self.number }
    pub fn people(&self) -> &[AstronautEntry] { &self.people }
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct AstronautEntry {
    name: String,
    #[serde(default)]
    craft: Option<String>,
}

impl AstronautEntry {
    pub fn name(&self) -> &str { self.name.as_str() }
    pub fn craft(&self) -> Option<&str> { self.craft.as_deref() }
}
