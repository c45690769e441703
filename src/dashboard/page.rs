use super::{map_widget::MapWidget, roster::AstronautRoster, station::StationPosition};
use crate::http_handler::http_handler_common::HTTPError;
use html_escape::encode_text;
use itertools::Itertools;

pub const TITLE: &str = "Current People in Space";
pub const INTRO: &str = "This app displays current people in space. In the following the number of \
     astronauts, their names and if possible their location will be available.";
pub const POSITION_HEADING: &str = "Current position of the ISS:";
pub const MAP_CAPTION: &str = "Description of Map: Shown is the current position of the ISS. Since the \
     position changes rather quickly the timestamp shows when the information was retrieved.";

const DECK_GL_SCRIPT: &str = "https://unpkg.com/deck.gl@9.0.0/dist.min.js";
const MAPLIBRE_SCRIPT: &str = "https://unpkg.com/maplibre-gl@4.1.0/dist/maplibre-gl.js";
const MAPLIBRE_STYLE: &str = "https://unpkg.com/maplibre-gl@4.1.0/dist/maplibre-gl.css";

/// Result of one render pass: each section either rendered or failed on its own.
#[derive(Debug, Clone)]
pub struct Page {
    roster: Result<AstronautRoster, HTTPError>,
    station: Result<StationPosition, HTTPError>,
    map: Option<MapWidget>,
}

impl Page {
    pub fn new(
        roster: Result<AstronautRoster, HTTPError>,
        station: Result<StationPosition, HTTPError>,
    ) -> Self {
        let map = station.as_ref().ok().map(MapWidget::for_station);
        Self { roster, station, map }
    }

    pub fn roster(&self) -> Result<&AstronautRoster, &HTTPError> { self.roster.as_ref() }
    pub fn station(&self) -> Result<&StationPosition, &HTTPError> { self.station.as_ref() }
    /// The map widget, present only if the position section rendered.
    pub fn map(&self) -> Option<&MapWidget> { self.map.as_ref() }

    pub fn roster_text(&self) -> String {
        match self.roster() {
            Ok(roster) => format!(
                "Number of people currently in space: {} | Names of people currently in space: {}",
                roster.count(),
                roster.names().iter().join(", ")
            ),
            Err(e) => section_error_text("Astronaut data", e),
        }
    }

    pub fn station_text(&self) -> String {
        match self.station() {
            Ok(station) => {
                let mut text = format!(
                    "Longitude: {} | Latitude: {} | Latest update: {}",
                    station.longitude(),
                    station.latitude(),
                    station.formatted_time()
                );
                if let Some(warning) = station.range_warning() {
                    text.push_str(&format!(" | Warning: {warning}"));
                }
                text
            }
            Err(e) => section_error_text("ISS position", e),
        }
    }

    /// Plain-text rendering, used for the console and `/page.txt`.
    pub fn to_text(&self) -> String {
        let mut out = format!(
            "{TITLE}\n{INTRO}\n\n{}\n\n{POSITION_HEADING}\n{}\n",
            self.roster_text(),
            self.station_text()
        );
        if self.map.is_some() {
            out.push_str(MAP_CAPTION);
            out.push('\n');
        }
        out
    }

    /// Full HTML document with the map widget wired to deck.gl.
    pub fn to_html(&self) -> String {
        let body = format!(
            "<h1>{}</h1>\n<p>{}</p>\n{}<h3>{}</h3>\n{}",
            encode_text(TITLE),
            encode_text(INTRO),
            self.roster_html(),
            encode_text(POSITION_HEADING),
            self.station_html()
        );

        let mut head = format!("<meta charset=\"utf-8\">\n<title>{}</title>\n", encode_text(TITLE));
        if self.map.is_some() {
            head.push_str(&format!(
                "<link rel=\"stylesheet\" href=\"{MAPLIBRE_STYLE}\">\n\
                 <script src=\"{DECK_GL_SCRIPT}\"></script>\n\
                 <script src=\"{MAPLIBRE_SCRIPT}\"></script>\n"
            ));
        }
        format!("<!DOCTYPE html>\n<html>\n<head>\n{head}</head>\n<body>\n{body}</body>\n</html>\n")
    }

    fn roster_html(&self) -> String {
        match self.roster() {
            Ok(roster) => {
                let items = roster
                    .people()
                    .iter()
                    .map(|p| match p.craft() {
                        Some(craft) => {
                            format!("<li>{} ({})</li>", encode_text(p.name()), encode_text(craft))
                        }
                        None => format!("<li>{}</li>", encode_text(p.name())),
                    })
                    .join("\n");
                format!(
                    "<p>Number of people currently in space: {}</p>\n<ul id=\"roster\">\n{items}\n</ul>\n",
                    roster.count()
                )
            }
            Err(e) => error_html("roster-error", &section_error_text("Astronaut data", e)),
        }
    }

    fn station_html(&self) -> String {
        let station = match self.station() {
            Ok(station) => station,
            Err(e) => return error_html("position-error", &section_error_text("ISS position", e)),
        };
        let mut out = format!(
            "<p id=\"position\">Longitude: {} | Latitude: {} | Latest update: {}</p>\n",
            station.longitude(),
            station.latitude(),
            encode_text(&station.formatted_time())
        );
        if let Some(warning) = station.range_warning() {
            out.push_str(&error_html("position-warning", &warning));
        }
        match self.map.as_ref().map(MapWidget::to_json) {
            Some(Ok(json)) => {
                out.push_str(
                    "<div id=\"map\" style=\"position: relative; width: 100%; height: 500px;\"></div>\n",
                );
                out.push_str(&format!(
                    "<script>\nconst widget = {json};\n{MAP_SCRIPT}</script>\n<p>{}</p>\n",
                    encode_text(MAP_CAPTION)
                ));
            }
            Some(Err(e)) => {
                crate::error!("Map widget could not be serialized: {e}");
                out.push_str(&error_html("map-error", "The map could not be drawn."));
            }
            None => {}
        }
        out
    }
}

const MAP_SCRIPT: &str = r"new deck.DeckGL({
  container: 'map',
  mapStyle: widget.mapStyle,
  initialViewState: widget.initialViewState,
  controller: true,
  getTooltip: ({object}) => object && object.label,
  layers: widget.layers.map(l => new deck.ScatterplotLayer({
    id: l.id,
    data: l.data,
    getPosition: d => d.position,
    getFillColor: l.getFillColor,
    getRadius: l.getRadius,
    filled: l.filled,
    opacity: l.opacity,
    pickable: l.pickable,
  })),
});
";

fn section_error_text(section: &str, e: &HTTPError) -> String {
    format!("{section} unavailable ({}): {e}", e.kind())
}

fn error_html(id: &str, msg: &str) -> String {
    format!("<p id=\"{id}\" class=\"error\">{}</p>\n", encode_text(msg))
}
