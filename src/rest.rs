use anyhow::Result;
use std::{convert::Infallible, net::SocketAddr, sync::Arc};
use warp::{hyper::StatusCode, Filter};

use serde::{Deserialize, Serialize};

use crate::client::{SerpClient, SerpConfig};
use crate::schedule::normalize_schedule;

#[derive(Debug, Serialize, Deserialize)]
struct ErrorResponse {
    message: String,
    error: String,
}

pub async fn start_server(config: SerpConfig, addr: SocketAddr) -> Result<()> {
    let client = Arc::new(SerpClient::new(config));

    // GET /sports
    let sports = sports_route(client);

    // GET / => the static entry document
    let index = warp::path::end().and(warp::fs::file("./index.html"));

    // GET /<path> => static files from the working directory
    let assets = warp::fs::dir(".");

    let routes = sports.or(index).or(assets);

    warp::serve(routes).run(addr).await;
    Ok(())
}

fn sports_route(
    client: Arc<SerpClient>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let client_filter = warp::any().map(move || client.clone());
    warp::path!("sports")
        .and(client_filter)
        .and(warp::get())
        .and_then(sports_handler)
}

async fn sports_handler(client: Arc<SerpClient>) -> Result<impl warp::Reply, Infallible> {
    match client.fetch_schedule().await {
        Ok(raw) => Ok(warp::reply::with_status(
            warp::reply::json(&normalize_schedule(&raw)),
            StatusCode::OK,
        )),
        Err(error) => {
            log::error!("schedule fetch failed: {}", error);
            let response = ErrorResponse {
                message: "An error occurred.".to_owned(),
                error: error.to_string(),
            };
            Ok(warp::reply::with_status(
                warp::reply::json(&response),
                StatusCode::INTERNAL_SERVER_ERROR,
            ))
        }
    }
}
