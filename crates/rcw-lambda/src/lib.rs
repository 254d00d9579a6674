//! rcw-lambda
//!
//! The API Gateway-facing Lambda: an Axum router over the identity,
//! parameter, and record-store seams.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

use routes::fallback::{only_get_and_post, unmatched};
use state::AppState;

/// Build the dispatcher.
///
/// GET and POST requests to unknown routes get 404; every other method gets
/// 405. CORS preflights are answered by the CORS layer before routing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/signup", post(routes::auth::sign_up).fallback(unmatched))
        .route("/signin", post(routes::auth::sign_in).fallback(unmatched))
        .route("/getuser", post(routes::auth::get_user).fallback(unmatched))
        .route(
            "/upload-cash-transaction",
            post(routes::transactions::upload_cash_transaction).fallback(unmatched),
        )
        .route(
            "/get-db-items",
            get(routes::transactions::get_db_items).fallback(unmatched),
        )
        .fallback(unmatched)
        .layer(
            ServiceBuilder::new()
                .layer(cors)
                .layer(axum_mw::from_fn(middleware::event_log::log_event))
                .layer(axum_mw::from_fn(only_get_and_post)),
        )
        .with_state(state)
}
