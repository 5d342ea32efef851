//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::{AuthConfig, AuthGateState, PgAuthRepository, auth_router, require_auth};
use axum::{
    Router, http,
    http::{Method, header},
    routing::get,
};
use shop::PgShopRepository;
use shop::router::{catalog_router, orders_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// Health check: the storefront pings this to show backend status
async fn health() -> &'static str {
    "Backend is running!"
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,shop=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    // Token signing secret; missing config is fatal here, before any
    // request is served
    let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set in environment");
    let auth_config = Arc::new(AuthConfig::new(jwt_secret));

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    let auth_store = PgAuthRepository::new(pool.clone());
    let shop_store = Arc::new(PgShopRepository::new(pool.clone()));

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    // Orders share the auth module's bearer gate
    let gate = AuthGateState {
        config: auth_config.clone(),
    };
    let protected_orders = orders_router(shop_store.clone())
        .route_layer(axum::middleware::from_fn_with_state(gate, require_auth));

    // Build router; routes sit at the root to match the storefront client
    let app = Router::new()
        .route("/", get(health))
        .merge(auth_router(auth_store, auth_config))
        .merge(catalog_router(shop_store))
        .merge(protected_orders)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
