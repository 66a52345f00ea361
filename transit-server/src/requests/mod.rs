//! JSON request processing: load a network description, answer queries.

mod dto;
mod error;
mod handler;

pub use dto::{
    BaseRequest, BusDescription, BusResponse, InputDocument, MapResponse, NotFoundResponse,
    Response, RouteItem, RouteResponse, RoutingSettingsDto, StatRequest, StopDescription,
    StopResponse,
};
pub use error::RequestError;
pub use handler::{
    TransitService, answer_document, load_document, parse_document, populate, run_batch,
};
