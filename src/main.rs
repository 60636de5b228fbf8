use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use newsdesk::config::AppConfig;
use newsdesk::context::AppContext;
use newsdesk::routes::configure_routes;
use newsdesk::store::{PgStatusStore, PgStoreConfig};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let store = match PgStatusStore::connect(&PgStoreConfig::new(&config.database_url, &config.db_name)).await {
        Ok(store) => store,
        Err(e) => {
            error!(error = %e, "could not open status store");
            return ExitCode::FAILURE;
        }
    };

    let ctx = match AppContext::from_config(&config, Arc::new(store)) {
        Ok(ctx) => Arc::new(ctx),
        Err(e) => {
            error!(error = %e, "could not build news client");
            return ExitCode::FAILURE;
        }
    };

    if config.agent.project_id.is_none() {
        info!("GCP_PROJECT_ID not set, agent endpoints will report failures");
    }

    let routes = configure_routes(ctx);

    info!(addr = %config.bind_addr, "starting server");
    tokio::select! {
        _ = warp::serve(routes).run(config.bind_addr) => {}
        _ = tokio::signal::ctrl_c() => info!("shutdown signal received"),
    }

    ExitCode::SUCCESS
}
