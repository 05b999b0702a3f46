use std::{net::SocketAddr, sync::Arc};

use axum::{
    http::{HeaderValue, Method},
    Router,
};
use configs::{AppConfig, CorsConfig, ServerConfig};
use migration::{Migrator, MigratorTrait};
use service::tender::{SeaOrmTenderRepository, TenderRepository};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, AppState};

/// `*` (the default) allows every origin; anything else is an explicit allow-list.
pub fn build_cors(cfg: &CorsConfig) -> Result<CorsLayer, StartupError> {
    if cfg.allows_any_origin() {
        return Ok(CorsLayer::very_permissive());
    }
    let origins = cfg
        .allowed_origins
        .iter()
        .map(|o| {
            HeaderValue::from_str(o).map_err(|_| StartupError::InvalidConfig(format!("bad CORS origin: {o}")))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any))
}

fn load_bind_addr(cfg: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(format!("{}:{}", cfg.host, cfg.port).parse()?)
}

/// Public entry: connect storage, build the app and run the HTTP server
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let db = models::db::connect_with_config(&cfg.database).await?;
    if cfg.database.run_migrations {
        Migrator::up(&db, None).await?;
        info!(event = "migrations_applied", "database schema is up to date");
    }

    let repo: Arc<dyn TenderRepository> = Arc::new(SeaOrmTenderRepository::new(db));
    let cors = build_cors(&cfg.cors)?;
    let app: Router = routes::build_router(AppState::new(repo), cors);

    let addr = load_bind_addr(&cfg.server)?;
    info!(%addr, "starting tender api");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
