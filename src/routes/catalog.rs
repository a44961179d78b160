//! Catalog REST routes. Every handler is scoped to the request's tenant.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use uuid::Uuid;

use super::tenant::TenantContext;
use crate::models::{
    Account, CostCenter, NewAccount, NewCostCenter, NewPaymentMethod, NewPurchaseProposal, PaymentMethod,
    ProposalStatus, PurchaseProposalView,
};
use crate::services::catalog::{self, CatalogError};
use crate::state::AppState;

pub(crate) fn catalog_error_to_status(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::Validation(_) | CatalogError::UnknownReference { .. } | CatalogError::InactiveCostCenter(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        CatalogError::Duplicate(_) | CatalogError::InvalidTransition { .. } => StatusCode::CONFLICT,
        CatalogError::NotFound(_) => StatusCode::NOT_FOUND,
    }
}

/// Error body: `{ "error": "<message>" }` with the mapped status.
pub struct ApiError(CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = catalog_error_to_status(&self.0);
        (status, Json(serde_json::json!({ "error": self.0.to_string() }))).into_response()
    }
}

// =============================================================================
// ACCOUNTS
// =============================================================================

/// `GET /api/accounts`
pub async fn list_accounts(State(state): State<AppState>, tenant: TenantContext) -> Json<Vec<Account>> {
    Json(catalog::list_accounts(&state, &tenant.key).await)
}

/// `POST /api/accounts`
pub async fn create_account(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(body): Json<NewAccount>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let account = catalog::create_account(&state, &tenant.key, body).await?;
    Ok((StatusCode::CREATED, Json(account)))
}

// =============================================================================
// COST CENTERS
// =============================================================================

/// `GET /api/cost-centers`
pub async fn list_cost_centers(State(state): State<AppState>, tenant: TenantContext) -> Json<Vec<CostCenter>> {
    Json(catalog::list_cost_centers(&state, &tenant.key).await)
}

/// `POST /api/cost-centers`
pub async fn create_cost_center(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(body): Json<NewCostCenter>,
) -> Result<(StatusCode, Json<CostCenter>), ApiError> {
    let cost_center = catalog::create_cost_center(&state, &tenant.key, body).await?;
    Ok((StatusCode::CREATED, Json(cost_center)))
}

// =============================================================================
// PAYMENT METHODS
// =============================================================================

/// `GET /api/payment-methods`
pub async fn list_payment_methods(State(state): State<AppState>, tenant: TenantContext) -> Json<Vec<PaymentMethod>> {
    Json(catalog::list_payment_methods(&state, &tenant.key).await)
}

/// `POST /api/payment-methods`
pub async fn create_payment_method(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(body): Json<NewPaymentMethod>,
) -> Result<(StatusCode, Json<PaymentMethod>), ApiError> {
    let method = catalog::create_payment_method(&state, &tenant.key, body).await?;
    Ok((StatusCode::CREATED, Json(method)))
}

// =============================================================================
// PURCHASE PROPOSALS
// =============================================================================

#[derive(Deserialize)]
pub struct UpdateStatusBody {
    pub status: ProposalStatus,
}

/// `GET /api/purchase-proposals`
pub async fn list_proposals(State(state): State<AppState>, tenant: TenantContext) -> Json<Vec<PurchaseProposalView>> {
    let proposals = catalog::list_proposals(&state, &tenant.key).await;
    Json(proposals.into_iter().map(PurchaseProposalView::from).collect())
}

/// `POST /api/purchase-proposals`
pub async fn create_proposal(
    State(state): State<AppState>,
    tenant: TenantContext,
    Json(body): Json<NewPurchaseProposal>,
) -> Result<(StatusCode, Json<PurchaseProposalView>), ApiError> {
    let proposal = catalog::create_proposal(&state, &tenant.key, body).await?;
    Ok((StatusCode::CREATED, Json(proposal.into())))
}

/// `GET /api/purchase-proposals/:id`
pub async fn get_proposal(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
) -> Result<Json<PurchaseProposalView>, ApiError> {
    let proposal = catalog::get_proposal(&state, &tenant.key, id).await?;
    Ok(Json(proposal.into()))
}

/// `PATCH /api/purchase-proposals/:id/status`: advance the approval workflow.
pub async fn update_proposal_status(
    State(state): State<AppState>,
    tenant: TenantContext,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateStatusBody>,
) -> Result<Json<PurchaseProposalView>, ApiError> {
    let proposal = catalog::update_proposal_status(&state, &tenant.key, id, body.status).await?;
    Ok(Json(proposal.into()))
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
