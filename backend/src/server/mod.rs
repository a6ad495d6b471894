//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::{Clock, DefaultClock};
use tracing::info;

use holidays_api::Trace;
#[cfg(debug_assertions)]
use holidays_api::doc::ApiDoc;
use holidays_api::domain::HolidayAggregationService;
use holidays_api::inbound::http::health::{HealthState, live, ready};
use holidays_api::inbound::http::holidays;
use holidays_api::inbound::http::state::HttpState;
use holidays_api::outbound::holidays::{HolidayHttpIdentity, NagerHolidaySource};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_http_state(config: &ServerConfig) -> std::io::Result<HttpState> {
    let source = NagerHolidaySource::with_identity(
        config.api_url.clone(),
        config.request_timeout,
        HolidayHttpIdentity {
            user_agent: config.user_agent.clone(),
        },
    )
    .map_err(|e| std::io::Error::other(format!("holiday client construction failed: {e}")))?;

    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    let service = HolidayAggregationService::new(Arc::new(source), Arc::clone(&clock))
        .with_max_lookback_years(config.max_lookback_years);
    Ok(HttpState::new(Arc::new(service), clock))
}

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
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(holidays::configure)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));
    #[cfg(not(debug_assertions))]
    let app = app;

    app
}

/// Construct an Actix HTTP server using the provided health state and configuration.
///
/// # Parameters
/// - `health_state`: shared readiness state updated once the server is initialised.
/// - `config`: resolved [`ServerConfig`] holding the bind address and provider settings.
///
/// # Returns
/// A spawned [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when the holiday client cannot be built or
/// binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config)?);

    let server = HttpServer::new(move || {
        build_app(server_health_state.clone(), http_state.clone())
    })
    .bind(config.bind_addr())?
    .run();

    info!(
        bind_addr = %config.bind_addr(),
        api_url = %config.api_url,
        "holidays API listening"
    );
    health_state.mark_ready();
    Ok(server)
}
