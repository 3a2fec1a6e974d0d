//! HTTP adapters - REST API implementations.
//!
//! Each feature module has its own router and app state; [`api_router`]
//! mounts them under `/api/v1` behind the session middleware.

pub mod assessment;
pub mod error;
pub mod middleware;
pub mod payment;

pub use assessment::{assessment_router, AssessmentAppState};
pub use error::ErrorResponse;
pub use middleware::{auth_middleware, AuthState, RequireAuth};
pub use payment::{payment_router, PaymentAppState};

use axum::{middleware::from_fn_with_state, routing::get, Json, Router};
use serde_json::{json, Value};

/// Assemble the full API.
///
/// # Routes
/// - `GET /health` - Liveness probe (no auth)
/// - `/api/v1/assessment/*` - Assessment endpoints
/// - `/api/v1/payments/*` - Payment endpoints
pub fn api_router(
    assessment_state: AssessmentAppState,
    payment_state: PaymentAppState,
    auth: AuthState,
) -> Router {
    let api = Router::new()
        .merge(assessment_router().with_state(assessment_state))
        .merge(payment_router().with_state(payment_state))
        .layer(from_fn_with_state(auth, auth_middleware));

    Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
