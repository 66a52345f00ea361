//! Errors raised while loading a document or answering requests.

use std::path::PathBuf;

use crate::domain::DomainError;
use crate::render::RenderSettingsError;
use crate::router::{GraphError, SettingsError};

/// Anything that makes an input document unusable.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Catalogue(#[from] DomainError),

    #[error("invalid routing settings: {0}")]
    RoutingSettings(#[from] SettingsError),

    #[error("invalid render settings: {0}")]
    RenderSettings(#[from] RenderSettingsError),

    #[error("failed to build routing graph: {0}")]
    Graph(#[from] GraphError),

    #[error("failed to render map: {0}")]
    Template(#[from] askama::Error),

    #[error("map requested but no render_settings were given")]
    MissingRenderSettings,

    #[error("route requested but no routing_settings were given")]
    MissingRoutingSettings,
}
