//! Catalog service: per-tenant accounts, cost centers, payment methods and
//! purchase proposals.
//!
//! DESIGN
//! ======
//! Validation and insertion run on a `&mut Catalog` while the state write
//! lock is held, so a uniqueness check and the insert that follows it are
//! never interleaved with another writer. Every operation takes the
//! resolved `TenantKey`; records of one tenant are unreachable from another.
//!
//! ERROR HANDLING
//! ==============
//! Input problems surface as `CatalogError` variants. Nothing is inserted
//! when validation fails.

use tracing::info;
use uuid::Uuid;

use crate::models::{
    Account, CostCenter, NewAccount, NewCostCenter, NewPaymentMethod, NewPurchaseProposal, PaymentMethod,
    ProposalStatus, PurchaseProposal,
};
use crate::state::{AppState, Catalog};
use crate::tenant::TenantKey;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("already exists: {0}")]
    Duplicate(String),
    #[error("not found: {0}")]
    NotFound(Uuid),
    #[error("unknown {kind}: {id}")]
    UnknownReference { kind: &'static str, id: Uuid },
    #[error("cost center is inactive: {0}")]
    InactiveCostCenter(Uuid),
    #[error("cannot move proposal from {from} to {to}")]
    InvalidTransition { from: ProposalStatus, to: ProposalStatus },
}

// =============================================================================
// READS
// =============================================================================

async fn read_with<T>(state: &AppState, tenant: &TenantKey, f: impl FnOnce(&Catalog) -> T) -> T {
    let catalogs = state.catalogs.read().await;
    match catalogs.get(tenant) {
        Some(catalog) => f(catalog),
        None => f(&Catalog::new()),
    }
}

pub async fn list_accounts(state: &AppState, tenant: &TenantKey) -> Vec<Account> {
    read_with(state, tenant, |c| c.accounts.clone()).await
}

pub async fn list_cost_centers(state: &AppState, tenant: &TenantKey) -> Vec<CostCenter> {
    read_with(state, tenant, |c| c.cost_centers.clone()).await
}

pub async fn list_payment_methods(state: &AppState, tenant: &TenantKey) -> Vec<PaymentMethod> {
    read_with(state, tenant, |c| c.payment_methods.clone()).await
}

pub async fn list_proposals(state: &AppState, tenant: &TenantKey) -> Vec<PurchaseProposal> {
    read_with(state, tenant, |c| c.proposals.clone()).await
}

pub async fn get_proposal(state: &AppState, tenant: &TenantKey, id: Uuid) -> Result<PurchaseProposal, CatalogError> {
    read_with(state, tenant, |c| c.proposals.iter().find(|p| p.id == id).cloned())
        .await
        .ok_or(CatalogError::NotFound(id))
}

// =============================================================================
// WRITES
// =============================================================================

async fn write_with<T>(
    state: &AppState,
    tenant: &TenantKey,
    f: impl FnOnce(&mut Catalog) -> Result<T, CatalogError>,
) -> Result<T, CatalogError> {
    let mut catalogs = state.catalogs.write().await;
    f(catalogs.entry(tenant.clone()).or_default())
}

pub async fn create_account(state: &AppState, tenant: &TenantKey, input: NewAccount) -> Result<Account, CatalogError> {
    let account = write_with(state, tenant, |c| insert_account(c, input)).await?;
    info!(%tenant, account_id = %account.id, code = %account.code, "account created");
    Ok(account)
}

pub async fn create_cost_center(
    state: &AppState,
    tenant: &TenantKey,
    input: NewCostCenter,
) -> Result<CostCenter, CatalogError> {
    let cost_center = write_with(state, tenant, |c| insert_cost_center(c, input)).await?;
    info!(%tenant, cost_center_id = %cost_center.id, code = %cost_center.code, "cost center created");
    Ok(cost_center)
}

pub async fn create_payment_method(
    state: &AppState,
    tenant: &TenantKey,
    input: NewPaymentMethod,
) -> Result<PaymentMethod, CatalogError> {
    let method = write_with(state, tenant, |c| insert_payment_method(c, input)).await?;
    info!(%tenant, payment_method_id = %method.id, "payment method created");
    Ok(method)
}

pub async fn create_proposal(
    state: &AppState,
    tenant: &TenantKey,
    input: NewPurchaseProposal,
) -> Result<PurchaseProposal, CatalogError> {
    let proposal = write_with(state, tenant, |c| insert_proposal(c, input)).await?;
    info!(%tenant, proposal_id = %proposal.id, number = proposal.number, "purchase proposal created");
    Ok(proposal)
}

pub async fn update_proposal_status(
    state: &AppState,
    tenant: &TenantKey,
    id: Uuid,
    next: ProposalStatus,
) -> Result<PurchaseProposal, CatalogError> {
    let proposal = write_with(state, tenant, |c| transition_proposal(c, id, next)).await?;
    info!(%tenant, proposal_id = %id, status = next.as_str(), "purchase proposal status changed");
    Ok(proposal)
}

// =============================================================================
// CATALOG MUTATIONS
// =============================================================================

fn required(field: &str, value: &str) -> Result<String, CatalogError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::Validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_owned())
}

pub(crate) fn insert_account(catalog: &mut Catalog, input: NewAccount) -> Result<Account, CatalogError> {
    let code = required("code", &input.code)?;
    let name = required("name", &input.name)?;
    if catalog.accounts.iter().any(|a| a.code == code) {
        return Err(CatalogError::Duplicate(format!("account {code}")));
    }

    let account = Account { id: Uuid::new_v4(), code, name };
    catalog.accounts.push(account.clone());
    Ok(account)
}

pub(crate) fn insert_cost_center(catalog: &mut Catalog, input: NewCostCenter) -> Result<CostCenter, CatalogError> {
    let code = required("code", &input.code)?;
    let name = required("name", &input.name)?;
    if catalog.cost_centers.iter().any(|c| c.code == code) {
        return Err(CatalogError::Duplicate(format!("cost center {code}")));
    }

    let cost_center = CostCenter { id: Uuid::new_v4(), code, name, active: input.active };
    catalog.cost_centers.push(cost_center.clone());
    Ok(cost_center)
}

pub(crate) fn insert_payment_method(
    catalog: &mut Catalog,
    input: NewPaymentMethod,
) -> Result<PaymentMethod, CatalogError> {
    let name = required("name", &input.name)?;
    if catalog.payment_methods.iter().any(|m| m.name == name) {
        return Err(CatalogError::Duplicate(format!("payment method {name}")));
    }
    let description = input
        .description
        .map(|d| d.trim().to_owned())
        .filter(|d| !d.is_empty());

    let method = PaymentMethod { id: Uuid::new_v4(), name, description };
    catalog.payment_methods.push(method.clone());
    Ok(method)
}

pub(crate) fn insert_proposal(
    catalog: &mut Catalog,
    input: NewPurchaseProposal,
) -> Result<PurchaseProposal, CatalogError> {
    let requester = required("requester", &input.requester)?;
    if input.items.is_empty() {
        return Err(CatalogError::Validation("a proposal needs at least one item".into()));
    }

    let mut items = Vec::with_capacity(input.items.len());
    for (index, mut item) in input.items.into_iter().enumerate() {
        item.description = required(&format!("items[{index}].description"), &item.description)?;
        if item.quantity == 0 {
            return Err(CatalogError::Validation(format!("items[{index}].quantity must be positive")));
        }
        if item.unit_price_cents < 0 {
            return Err(CatalogError::Validation(format!("items[{index}].unit_price_cents must not be negative")));
        }
        items.push(item);
    }

    if !catalog.accounts.iter().any(|a| a.id == input.account_id) {
        return Err(CatalogError::UnknownReference { kind: "account", id: input.account_id });
    }
    match catalog.cost_centers.iter().find(|c| c.id == input.cost_center_id) {
        None => return Err(CatalogError::UnknownReference { kind: "cost center", id: input.cost_center_id }),
        Some(cc) if !cc.active => return Err(CatalogError::InactiveCostCenter(cc.id)),
        Some(_) => {}
    }
    if !catalog.payment_methods.iter().any(|m| m.id == input.payment_method_id) {
        return Err(CatalogError::UnknownReference { kind: "payment method", id: input.payment_method_id });
    }

    catalog.last_proposal_number += 1;
    let proposal = PurchaseProposal {
        id: Uuid::new_v4(),
        number: catalog.last_proposal_number,
        requester,
        account_id: input.account_id,
        cost_center_id: input.cost_center_id,
        payment_method_id: input.payment_method_id,
        items,
        status: ProposalStatus::Draft,
    };
    catalog.proposals.push(proposal.clone());
    Ok(proposal)
}

pub(crate) fn transition_proposal(
    catalog: &mut Catalog,
    id: Uuid,
    next: ProposalStatus,
) -> Result<PurchaseProposal, CatalogError> {
    let proposal = catalog
        .proposals
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(CatalogError::NotFound(id))?;
    if !proposal.status.can_transition_to(next) {
        return Err(CatalogError::InvalidTransition { from: proposal.status, to: next });
    }
    proposal.status = next;
    Ok(proposal.clone())
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
