//! Process bootstrap: config, database connection, middleware, routes, docs.

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use products_api::{api_root, connect_db, product_routes, ApiDoc, AppState, Config, PgProductStore};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "products_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    let pool = connect_db(&config.database_url).await?;
    let state = AppState::new(Arc::new(PgProductStore::new(pool)));

    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE]);
    if let Some(origin) = &config.frontend_url {
        cors = cors.allow_origin(origin.parse::<HeaderValue>()?);
    }

    let app = Router::new()
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(api_root())
        .nest("/api/products", product_routes(state))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!("REST API en el puerto {}", listener.local_addr()?.port());
    axum::serve(listener, app).await?;
    Ok(())
}
