//! Builds the catalogue from a document and answers stat requests.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;
use std::sync::OnceLock;

use askama::Template;
use tracing::{debug, info};

use crate::catalogue::Catalogue;
use crate::domain::{Coordinates, DomainError, RouteType};
use crate::render::MapRenderer;
use crate::router::{Itinerary, RoutingSettings, TransitRouter};

use super::dto::{
    BaseRequest, BusResponse, InputDocument, MapResponse, Response, RouteResponse, StatRequest,
    StopResponse,
};
use super::error::RequestError;

/// Read an input document from a file.
pub fn load_document(path: impl AsRef<Path>) -> Result<InputDocument, RequestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| RequestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(BufReader::new(file))
}

/// Read an input document from any reader.
pub fn parse_document(reader: impl Read) -> Result<InputDocument, RequestError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Fill a catalogue from base requests: all stops, then all road
/// distances, then all buses, so that requests may reference stops declared
/// later in the list.
pub fn populate(catalogue: &mut Catalogue, requests: &[BaseRequest]) -> Result<(), RequestError> {
    for request in requests {
        if let BaseRequest::Stop(stop) = request {
            let coordinates =
                Coordinates::new(stop.latitude, stop.longitude).map_err(DomainError::from)?;
            catalogue.add_stop(&stop.name, coordinates)?;
        }
    }

    for request in requests {
        if let BaseRequest::Stop(stop) = request {
            for (neighbour, meters) in &stop.road_distances {
                catalogue.set_distance(&stop.name, neighbour, *meters)?;
            }
        }
    }

    for request in requests {
        if let BaseRequest::Bus(bus) = request {
            catalogue.add_bus(&bus.name, RouteType::from_roundtrip(bus.is_roundtrip), &bus.stops)?;
        }
    }

    info!(
        stops = catalogue.stop_count(),
        buses = catalogue.bus_count(),
        "catalogue loaded"
    );
    Ok(())
}

/// A loaded network with its router and renderer, ready for queries.
///
/// Immutable after construction, so it can be shared across threads.
#[derive(Debug)]
pub struct TransitService {
    catalogue: Catalogue,
    router: Option<TransitRouter>,
    renderer: Option<MapRenderer>,
    rendered_map: OnceLock<String>,
}

impl TransitService {
    /// Build the service. Routing and rendering are optional; requests that
    /// need a missing part fail with an error.
    pub fn new(
        catalogue: Catalogue,
        routing: Option<RoutingSettings>,
        renderer: Option<MapRenderer>,
    ) -> Result<Self, RequestError> {
        let router = routing
            .map(|settings| TransitRouter::new(&catalogue, settings))
            .transpose()?;

        Ok(Self {
            catalogue,
            router,
            renderer,
            rendered_map: OnceLock::new(),
        })
    }

    /// Build the service from the network and settings in `doc`. Stat
    /// requests in the document are not processed.
    pub fn from_document(doc: &InputDocument) -> Result<Self, RequestError> {
        let mut catalogue = Catalogue::new();
        populate(&mut catalogue, &doc.base_requests)?;

        let routing = doc
            .routing_settings
            .map(RoutingSettings::try_from)
            .transpose()?;
        let renderer = doc
            .render_settings
            .clone()
            .map(MapRenderer::new)
            .transpose()?;

        Self::new(catalogue, routing, renderer)
    }

    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    pub fn router(&self) -> Option<&TransitRouter> {
        self.router.as_ref()
    }

    /// Answer requests in order, one response per request.
    pub fn process(&self, requests: &[StatRequest]) -> Result<Vec<Response>, RequestError> {
        requests.iter().map(|request| self.respond(request)).collect()
    }

    pub fn respond(&self, request: &StatRequest) -> Result<Response, RequestError> {
        let id = request.id();
        let response = match request {
            StatRequest::Bus { name, .. } => match self.catalogue.bus_stats(name) {
                Some(stats) => Response::Bus(BusResponse::new(id, &stats)),
                None => Response::not_found(id),
            },
            StatRequest::Stop { name, .. } => match self.catalogue.buses_through(name) {
                Some(buses) => Response::Stop(StopResponse {
                    request_id: id,
                    buses: buses.into_iter().map(str::to_string).collect(),
                }),
                None => Response::not_found(id),
            },
            StatRequest::Map { .. } => Response::Map(MapResponse {
                request_id: id,
                map: self.map()?.to_string(),
            }),
            StatRequest::Route { from, to, .. } => match self.route(from, to)? {
                Some(itinerary) => Response::Route(RouteResponse::new(id, &itinerary)),
                None => Response::not_found(id),
            },
        };

        debug!(id, not_found = response.is_not_found(), "answered request");
        Ok(response)
    }

    /// The rendered network map, built on first use.
    pub fn map(&self) -> Result<&str, RequestError> {
        let renderer = self
            .renderer
            .as_ref()
            .ok_or(RequestError::MissingRenderSettings)?;
        if let Some(map) = self.rendered_map.get() {
            return Ok(map);
        }

        let svg = renderer.render(&self.catalogue).render()?;
        Ok(self.rendered_map.get_or_init(|| svg))
    }

    /// Fastest itinerary between two stops, or `None` if there is none.
    pub fn route(&self, from: &str, to: &str) -> Result<Option<Itinerary>, RequestError> {
        let router = self
            .router
            .as_ref()
            .ok_or(RequestError::MissingRoutingSettings)?;
        Ok(router.plan(from, to))
    }
}

/// Process a whole document: read it, answer its stat requests, and write the
/// JSON response array to `writer`.
pub fn run_batch(reader: impl Read, writer: impl Write) -> Result<(), RequestError> {
    let doc = parse_document(reader)?;
    answer_document(&doc, writer)
}

/// Answer the stat requests of an already loaded document.
pub fn answer_document(doc: &InputDocument, mut writer: impl Write) -> Result<(), RequestError> {
    let service = TransitService::from_document(doc)?;
    let responses = service.process(&doc.stat_requests)?;

    serde_json::to_writer_pretty(&mut writer, &responses)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
