//! Blog list server entry point: loads configuration, installs logging and
//! runs the HTTP server.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr, eyre};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use bloglist::inbound::http::health::HealthState;
use bloglist::inbound::http::session_config::{
    BuildMode, key_fingerprint, session_settings_from_env,
};
use server::{ServerConfig, ServerSettings, create_server};

/// Flip liveness to failing once a shutdown signal arrives so probes see the
/// drain while in-flight requests finish.
async fn fail_liveness_on_shutdown(health_state: web::Data<HealthState>) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            health_state.mark_unhealthy();
            info!("shutdown requested; liveness probe now failing");
        }
        Err(err) => warn!(error = %err, "cannot listen for shutdown signal"),
    }
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load server settings: {err}"))?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("invalid session configuration")?;

    let bind_addr = settings.bind_addr();
    info!(
        %bind_addr,
        testing_routes = settings.testing_routes,
        session_key = %key_fingerprint(&session.key),
        "starting blog list server"
    );

    let config = ServerConfig::new(session, bind_addr).with_testing_routes(settings.testing_routes);
    let health_state = web::Data::new(HealthState::new());
    let server =
        create_server(health_state.clone(), config).wrap_err("failed to start HTTP server")?;
    actix_web::rt::spawn(fail_liveness_on_shutdown(health_state));
    server.await.wrap_err("HTTP server terminated with an error")
}
