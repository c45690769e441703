//! The render pipeline: fetch both endpoints, parse, extract the roster and the
//! station position, and assemble a `Page`.
//!
//! The two sections are independent; a failure in one is reported in its place
//! on the page while the other still renders.

pub mod map_widget;
pub mod page;
pub mod roster;
pub mod station;


use crate::http_handler::{
    http_client::Fetch,
    http_handler_common::HTTPError,
    http_request::{
        astros_get::AstrosRequest, iss_now_get::IssNowRequest,
        request_common::NoBodyHTTPRequestType,
    },
};
use page::Page;
use roster::AstronautRoster;
use station::StationPosition;
use std::sync::Arc;

/// Status string open-notify reports on a healthy answer.
const UPSTREAM_OK: &str = "success";

/// Drives render passes against a shared fetcher.
#[derive(Clone)]
pub struct Dashboard {
    client: Arc<dyn Fetch>,
}

impl Dashboard {
    pub(crate) fn new(client: Arc<dyn Fetch>) -> Self { Self { client } }

    /// Runs one full render pass. Both endpoints are requested concurrently.
    pub async fn render_pass(&self) -> Page {
        let (roster, station) = tokio::join!(self.load_roster(), self.load_station());
        Page::new(roster, station)
    }

    async fn load_roster(&self) -> Result<AstronautRoster, HTTPError> {
        let result: Result<AstronautRoster, HTTPError> = async {
            let response = AstrosRequest {}.send_request(self.client.as_ref()).await?;
            check_upstream_message("astros", response.message());
            Ok::<_, HTTPError>(AstronautRoster::try_from(response)?)
        }
        .await;
        match &result {
            Ok(roster) => crate::log!("Roster lists {} people", roster.count()),
            Err(e) => crate::error!("Roster section failed with {}: {e}", e.kind()),
        }
        result
    }

    async fn load_station(&self) -> Result<StationPosition, HTTPError> {
        let result: Result<StationPosition, HTTPError> = async {
            let response = IssNowRequest {}.send_request(self.client.as_ref()).await?;
            check_upstream_message("iss-now", response.message());
            Ok::<_, HTTPError>(StationPosition::try_from(response)?)
        }
        .await;
        match &result {
            Ok(station) => {
                crate::log!(
                    "ISS at lat {}, lon {} (observed at {}, {})",
                    station.latitude(),
                    station.longitude(),
                    station.observed_at(),
                    station.formatted_time()
                );
                if let Some(warning) = station.range_warning() {
                    crate::warn!("{warning}");
                }
            }
            Err(e) => crate::error!("Position section failed with {}: {e}", e.kind()),
        }
        result
    }
}

fn check_upstream_message(endpoint: &str, message: Option<&str>) {
    if let Some(msg) = message.filter(|m| *m != UPSTREAM_OK) {
        crate::warn!("Endpoint {endpoint} reported {msg:?}");
    }
}
