//! # Newsroom
//!
//! Content-management backend: posts, categories, and sponsors as REST
//! resources over MongoDB, with the built single-page-app bundle served as
//! the fallback for every route the API does not claim.
//!
//! ## Surface
//!
//! All API routes live under `/api/v1`:
//!
//! - `GET /posts`, `POST`/`PUT`/`DELETE /post`
//! - `GET /category`, `GET /category/{id}`, `POST`/`PATCH`/`DELETE /category`
//! - `GET /sponsor`, `POST`/`DELETE /sponsor`
//! - `GET /health`
//!
//! Reads take query parameters; writes take urlencoded form bodies, the
//! format the existing admin clients send.
//!
//! ## Environment
//!
//! | variable | default |
//! |---|---|
//! | `PORT` | `1323` |
//! | `MONGO_URI` | `mongodb://127.0.0.1:27017` |
//! | `MONGO_DB` | `newsroom` |
//! | `DIST_PATH` | `dist` |
//! | `REQUEST_TIMEOUT_SECS` | `10` |
//!
//! ## Setup
//!
//! Run a local store and serve:
//! ```sh
//! docker run -d -p 27017:27017 mongo
//! RUST_LOG=info cargo run
//! ```
use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{Method, header::CONTENT_TYPE},
    routing::{get, post},
};
use tokio::{net::TcpListener, signal};
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod database;
pub mod error;
pub mod memory;
pub mod models;
pub mod params;
pub mod routes;
pub mod state;
pub mod store;

use routes::{
    delete_category_handler, delete_post_handler, delete_sponsor_handler, get_categories_handler,
    get_category_handler, get_posts_handler, get_sponsors_handler, health_handler,
    new_category_handler, new_post_handler, new_sponsor_handler, patch_category_handler,
    update_post_handler,
};
use state::AppState;

pub async fn start_server() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Initializing state...");
    let state = AppState::new().await;

    info!("Starting server...");
    let app = router(state.clone());

    let address = format!("0.0.0.0:{}", state.config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address).await.unwrap();
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    println!("Server shutting down...");
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(60 * 60));

    let api = Router::new()
        .route("/posts", get(get_posts_handler))
        .route(
            "/post",
            post(new_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
        .route(
            "/category",
            get(get_categories_handler)
                .post(new_category_handler)
                .patch(patch_category_handler)
                .delete(delete_category_handler),
        )
        .route("/category/{id}", get(get_category_handler))
        .route(
            "/sponsor",
            get(get_sponsors_handler)
                .post(new_sponsor_handler)
                .delete(delete_sponsor_handler),
        )
        .route("/health", get(health_handler));

    Router::new()
        .nest("/api/v1", api)
        .fallback_service(ServeDir::new(&state.config.dist_path))
        .layer(TimeoutLayer::new(Duration::from_secs(
            state.config.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");

        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;

        info!("Received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
