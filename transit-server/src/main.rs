use std::error::Error;
use std::io;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use transit_server::cache::CacheConfig;
use transit_server::logger::init_logger;
use transit_server::requests::{
    InputDocument, RequestError, TransitService, answer_document, load_document, parse_document,
};
use transit_server::web::{AppState, create_router};

/// Answer queries about a bus network described by a JSON document.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON input document; read from stdin when omitted
    file: Option<PathBuf>,

    /// Serve HTTP on this address instead of answering the document's stat
    /// requests
    #[arg(long, env = "TRANSIT_LISTEN_ADDR")]
    listen: Option<SocketAddr>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_logger();

    let result = match args.listen {
        Some(addr) => serve(addr, args.file.as_deref()).await,
        None => batch(args.file.as_deref()).map_err(Into::into),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn read_document(path: Option<&Path>) -> Result<InputDocument, RequestError> {
    match path {
        Some(path) => load_document(path),
        None => parse_document(io::stdin().lock()),
    }
}

/// Read a document, answer its stat requests, print the responses.
fn batch(path: Option<&Path>) -> Result<(), RequestError> {
    let doc = read_document(path)?;
    answer_document(&doc, io::stdout().lock())
}

/// Load the network once and serve queries over HTTP.
async fn serve(addr: SocketAddr, path: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let doc = read_document(path)?;
    let service = TransitService::from_document(&doc)?;
    let state = AppState::new(service, &CacheConfig::default());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Transit catalogue listening on http://{addr}");
    info!("  GET  /health               - Health check");
    info!("  POST /stats                - Answer stat requests");
    info!("  GET  /map                  - Network map (SVG)");
    info!("  GET  /route?from=..&to=..  - Fastest route");

    axum::serve(listener, app).await?;
    Ok(())
}
