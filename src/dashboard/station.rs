use crate::http_handler::http_response::{iss_now::IssNowResponse, response_common::SchemaError};
use chrono::{DateTime, Utc};

/// Layout of the human-readable observation time. Times are always shown in UTC.
pub const OBSERVED_AT_FORMAT: &str = "%a %b %e %H:%M:%S %Y UTC";

/// A geographic coordinate with named axes.
///
/// Map libraries disagree on axis order, so the pair is never passed around as a
/// bare tuple; use [`GeoPoint::lon_lat`] where an `[x, y]` array is expected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// `[longitude, latitude]`, the order used by deck.gl positions and GeoJSON.
    pub fn lon_lat(&self) -> [f64; 2] { [self.longitude, self.latitude] }

    pub fn is_in_range(&self) -> bool {
        (-180.0..=180.0).contains(&self.longitude) && (-90.0..=90.0).contains(&self.latitude)
    }
}

/// The most recently reported position of the ISS.
#[derive(Debug, Clone, PartialEq)]
pub struct StationPosition {
    point: GeoPoint,
    observed_at: i64,
    observed_at_utc: DateTime<Utc>,
}

impl StationPosition {
    pub fn longitude(&self) -> f64 { self.point.longitude }
    pub fn latitude(&self) -> f64 { self.point.latitude }
    pub fn point(&self) -> GeoPoint { self.point }
    /// Observation time as Unix seconds.
    pub fn observed_at(&self) -> i64 { self.observed_at }

    pub fn formatted_time(&self) -> String {
        self.observed_at_utc.format(OBSERVED_AT_FORMAT).to_string()
    }

    /// Describes out-of-range coordinates. Such data is still shown, only flagged.
    pub fn range_warning(&self) -> Option<String> {
        if self.point.is_in_range() {
            None
        } else {
            Some(format!(
                "Reported position (lat {}, lon {}) is outside the valid coordinate range",
                self.point.latitude, self.point.longitude
            ))
        }
    }
}

impl TryFrom<IssNowResponse> for StationPosition {
    type Error = SchemaError;

    fn try_from(value: IssNowResponse) -> Result<Self, Self::Error> {
        let point = GeoPoint {
            latitude: value.position().latitude()?,
            longitude: value.position().longitude()?,
        };
        let observed_at = value.timestamp();
        let observed_at_utc = DateTime::from_timestamp(observed_at, 0)
            .ok_or(SchemaError::TimestampOutOfRange(observed_at))?;
        Ok(Self { point, observed_at, observed_at_utc })
    }
}
