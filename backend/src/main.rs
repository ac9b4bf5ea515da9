//! Storefront entry-point: resolves configuration, wires the Cults3D
//! adapter into the storefront service, and serves the JSON endpoints.

mod server;

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use storefront::domain::StorefrontService;
use storefront::inbound::http::health::HealthState;
use storefront::outbound::cults::{CultsGraphQlCatalog, GraphQlClient};
use storefront::settings::{CultsCredentials, StorefrontSettings};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = StorefrontSettings::from_process().map_err(std::io::Error::other)?;
    let context = settings.catalog_context().map_err(std::io::Error::other)?;
    let endpoint = settings.endpoint().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let credentials =
        CultsCredentials::from_env(&DefaultEnv::new()).map_err(std::io::Error::other)?;

    let client = GraphQlClient::new(endpoint.clone(), &credentials).map_err(|e| {
        std::io::Error::other(format!("failed to build Cults3D client: {e}"))
    })?;
    drop(credentials);

    info!(
        %endpoint,
        locale = %context.locale,
        currency = %context.currency,
        nick = %context.nick,
        "storefront configured"
    );

    let catalog = Arc::new(CultsGraphQlCatalog::new(client));
    let storefront = Arc::new(StorefrontService::new(catalog, context));
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state.clone(),
        ServerConfig::new(bind_addr, storefront),
    )?;

    let result = server.await;
    health_state.mark_unhealthy();
    result
}
