//! enroll registration API server entry point.

use std::sync::Arc;

use enroll_api::{
    config::ApiConfig,
    db::connect_and_migrate,
    router::{build_router, AppState},
    service::RegistrationService,
    store::SqliteUserStore,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = ApiConfig::from_env()?;
    let pool = connect_and_migrate(&config.database_url, config.busy_timeout).await?;
    log::info!("database ready at {}", config.database_url);

    let store = SqliteUserStore::new(pool);
    let state = AppState {
        service: RegistrationService::new(Arc::new(store.clone()), config.max_username_len),
    };
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    log::info!("listening on {}", config.bind_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                log::error!("failed to listen for shutdown signal: {e}");
            }
        })
        .await?;

    store.pool().close().await;
    log::info!("shut down");
    Ok(())
}
