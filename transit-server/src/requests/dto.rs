//! JSON documents exchanged with clients.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalogue::BusStats;
use crate::render::RenderSettings;
use crate::router::{Action, Itinerary, RoutingSettings, SettingsError};

/// A complete input document: network description, settings and queries.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InputDocument {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    #[serde(default)]
    pub render_settings: Option<RenderSettings>,

    #[serde(default)]
    pub routing_settings: Option<RoutingSettingsDto>,

    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// One entry of the network description.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopDescription),
    Bus(BusDescription),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopDescription {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Road distance in meters from this stop to each named neighbour
    #[serde(default)]
    pub road_distances: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BusDescription {
    pub name: String,

    /// Full loop for round trips, forward half otherwise
    pub stops: Vec<String>,

    pub is_roundtrip: bool,
}

/// Routing parameters as they appear on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RoutingSettingsDto {
    /// Minutes
    pub bus_wait_time: i64,

    /// km/h
    pub bus_velocity: f64,
}

impl TryFrom<RoutingSettingsDto> for RoutingSettings {
    type Error = SettingsError;

    fn try_from(dto: RoutingSettingsDto) -> Result<Self, Self::Error> {
        RoutingSettings::new(dto.bus_wait_time, dto.bus_velocity)
    }
}

/// A query against the loaded network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Map { id: i64 },
    Route { id: i64, from: String, to: String },
}

impl StatRequest {
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Map { id }
            | StatRequest::Route { id, .. } => *id,
        }
    }
}

/// Answer to one [`StatRequest`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Bus(BusResponse),
    Stop(StopResponse),
    Map(MapResponse),
    Route(RouteResponse),
    NotFound(NotFoundResponse),
}

impl Response {
    pub fn request_id(&self) -> i64 {
        match self {
            Response::Bus(r) => r.request_id,
            Response::Stop(r) => r.request_id,
            Response::Map(r) => r.request_id,
            Response::Route(r) => r.request_id,
            Response::NotFound(r) => r.request_id,
        }
    }

    pub fn not_found(request_id: i64) -> Self {
        Response::NotFound(NotFoundResponse {
            request_id,
            error_message: NotFoundResponse::MESSAGE.to_string(),
        })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Response::NotFound(_))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusResponse {
    pub request_id: i64,
    pub curvature: f64,
    pub route_length: u64,
    pub stop_count: usize,
    pub unique_stop_count: usize,
}

impl BusResponse {
    pub fn new(request_id: i64, stats: &BusStats) -> Self {
        Self {
            request_id,
            curvature: stats.curvature,
            route_length: stats.route_length,
            stop_count: stats.stop_count,
            unique_stop_count: stats.unique_stop_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopResponse {
    pub request_id: i64,

    /// Sorted bus names
    pub buses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapResponse {
    pub request_id: i64,

    /// Complete SVG document
    pub map: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub request_id: i64,
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

impl RouteResponse {
    pub fn new(request_id: i64, itinerary: &Itinerary) -> Self {
        Self {
            request_id,
            total_time: itinerary.total_time,
            items: itinerary.actions.iter().map(RouteItem::from).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl From<&Action> for RouteItem {
    fn from(action: &Action) -> Self {
        match action {
            Action::Wait { stop, minutes } => RouteItem::Wait {
                stop_name: stop.clone(),
                time: *minutes,
            },
            Action::Ride {
                bus,
                span_count,
                minutes,
            } => RouteItem::Bus {
                bus: bus.clone(),
                span_count: *span_count,
                time: *minutes,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NotFoundResponse {
    pub request_id: i64,
    pub error_message: String,
}

impl NotFoundResponse {
    pub const MESSAGE: &'static str = "not found";
}
