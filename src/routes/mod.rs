//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the JSON API consumed by the tenant-themed web
//! client. Every `/api` handler takes a `TenantContext`, so the request host
//! decides which tenant's catalog is read or written.

pub mod catalog;
pub mod tenant;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, patch};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/tenant", get(tenant::current_tenant))
        .route("/api/accounts", get(catalog::list_accounts).post(catalog::create_account))
        .route("/api/cost-centers", get(catalog::list_cost_centers).post(catalog::create_cost_center))
        .route(
            "/api/payment-methods",
            get(catalog::list_payment_methods).post(catalog::create_payment_method),
        )
        .route(
            "/api/purchase-proposals",
            get(catalog::list_proposals).post(catalog::create_proposal),
        )
        .route("/api/purchase-proposals/{id}", get(catalog::get_proposal))
        .route("/api/purchase-proposals/{id}/status", patch(catalog::update_proposal_status))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
