use super::station::{GeoPoint, StationPosition};
use serde::Serialize;

/// Description of the interactive map: one basemap, a camera and one scatterplot
/// marker on the station.
///
/// Serialized as JSON it matches the property names of deck.gl, so the page
/// script hands it over without any translation.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MapWidget {
    map_style: &'static str,
    initial_view_state: ViewState,
    layers: Vec<ScatterplotLayer>,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ViewState {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScatterplotLayer {
    #[serde(rename = "@@type")]
    layer_type: &'static str,
    id: &'static str,
    data: Vec<Marker>,
    get_fill_color: [u8; 4],
    get_radius: f64,
    filled: bool,
    opacity: f64,
    pickable: bool,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Marker {
    /// `[longitude, latitude]`
    pub position: [f64; 2],
    pub label: String,
}

impl MapWidget {
    const MAP_STYLE: &'static str = "https://basemaps.cartocdn.com/gl/positron-gl-style/style.json";
    const ZOOM: f64 = 11.0;
    const PITCH: f64 = 50.0;
    const MARKER_COLOR: [u8; 4] = [200, 30, 0, 160];
    /// Marker radius in meters.
    const MARKER_RADIUS: f64 = 200.0;
    const LAYER_OPACITY: f64 = 0.8;

    /// Centers the camera on the station and places a single marker on it.
    pub fn for_station(station: &StationPosition) -> Self {
        let point: GeoPoint = station.point();
        Self {
            map_style: Self::MAP_STYLE,
            initial_view_state: ViewState {
                latitude: point.latitude,
                longitude: point.longitude,
                zoom: Self::ZOOM,
                pitch: Self::PITCH,
            },
            layers: vec![ScatterplotLayer {
                layer_type: "ScatterplotLayer",
                id: "iss-position",
                data: vec![Marker {
                    position: point.lon_lat(),
                    label: format!("ISS at {}", station.formatted_time()),
                }],
                get_fill_color: Self::MARKER_COLOR,
                get_radius: Self::MARKER_RADIUS,
                filled: true,
                opacity: Self::LAYER_OPACITY,
                pickable: true,
            }],
        }
    }

    /// JSON form of the widget, embedded into the page script.
    ///
    /// # Errors
    /// Propagates serializer failures.
    pub fn to_json(&self) -> Result<String, serde_json::Error> { serde_json::to_string(self) }
}
