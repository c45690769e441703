use crate::http_handler::http_response::response_common::{
    SchemaError, SerdeJSONBodyHTTPResponseType,
};

/// Body of `GET /iss-now.json`.
#[derive(serde::Deserialize, Debug)]
pub struct IssNowResponse {
    timestamp: i64,
    iss_position: IssPosition,
    #[serde(default)]
    message: Option<String>,
}

impl SerdeJSONBodyHTTPResponseType for IssNowResponse {}

impl IssNowResponse {
    pub fn timestamp(&self) -> i64 { self.timestamp }
    pub fn position(&self) -> &IssPosition { &self.iss_position }
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
}

#[derive(serde::Deserialize, Debug)]
pub struct IssPosition {
    longitude: Coordinate,
    latitude: Coordinate,
}

impl IssPosition {
    /// Longitude in degrees, coerced to a float.
    pub fn longitude(&self) -> Result<f64, SchemaError> { self.longitude.to_degrees("longitude") }
    /// Latitude in degrees, coerced to a float.
    pub fn latitude(&self) -> Result<f64, SchemaError> { self.latitude.to_degrees("latitude") }
}

/// open-notify sends coordinates as strings, but plain numbers are accepted too.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    fn to_degrees(&self, axis: &'static str) -> Result<f64, SchemaError> {
        let value = match self {
            Coordinate::Number(v) => Some(*v),
            Coordinate::Text(raw) => raw.trim().parse::<f64>().ok(),
        };
        match value {
            Some(v) if v.is_finite() => Ok(v),
            _ => Err(SchemaError::InvalidCoordinate { axis, raw: self.to_string() }),
        }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coordinate::Number(v) => write!(f, "{v}"),
            Coordinate::Text(raw) => f.write_str(raw),
        }
    }
}
