//! Actix application assembly: `/api` storefront routes behind the trace
//! middleware, health probes, and Swagger UI in debug builds.

mod config;

pub use config::ServerConfig;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::info;

use storefront::Trace;
#[cfg(debug_assertions)]
use storefront::doc::ApiDoc;
use storefront::inbound::http::creations::list_my_creations;
use storefront::inbound::http::designs::get_design;
use storefront::inbound::http::health::{HealthState, live, ready};
use storefront::inbound::http::showcase::get_showcase;
use storefront::inbound::http::state::HttpState;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let api = web::scope("/api")
        .service(get_showcase)
        .service(get_design)
        .service(list_my_creations);

    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .service(api)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Bind the storefront listener and flip readiness once bound.
///
/// # Errors
/// Fails when the socket cannot be bound.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        storefront,
    } = config;
    let http_state = web::Data::new(HttpState::new(storefront));
    let probes = health_state.clone();

    let server = HttpServer::new(move || build_app(probes.clone(), http_state.clone()))
        .bind(bind_addr)?
        .run();

    info!(%bind_addr, "storefront listening");
    health_state.mark_ready();
    Ok(server)
}
