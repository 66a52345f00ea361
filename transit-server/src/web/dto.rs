//! Data transfer objects specific to the HTTP endpoints.

use serde::{Deserialize, Serialize};

use crate::requests::RouteItem;
use crate::router::Itinerary;

/// Query for `GET /route`.
#[derive(Debug, Deserialize)]
pub struct RouteQuery {
    /// Origin stop name
    pub from: String,

    /// Destination stop name
    pub to: String,
}

/// Body of a successful `GET /route`.
#[derive(Debug, Serialize)]
pub struct RouteResult {
    pub from: String,
    pub to: String,
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

impl RouteResult {
    pub fn new(query: RouteQuery, itinerary: &Itinerary) -> Self {
        Self {
            from: query.from,
            to: query.to,
            total_time: itinerary.total_time,
            items: itinerary.actions.iter().map(RouteItem::from).collect(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
