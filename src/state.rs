//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the tenant resolver and one in-memory catalog per tenant key.
//! Catalogs are created on first write; a tenant that has never written
//! reads as empty.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::models::{Account, CostCenter, PaymentMethod, PurchaseProposal};
use crate::tenant::{TenantKey, TenantResolver};

// =============================================================================
// CATALOG
// =============================================================================

/// Records owned by a single tenant.
#[derive(Debug, Default)]
pub struct Catalog {
    pub accounts: Vec<Account>,
    pub cost_centers: Vec<CostCenter>,
    pub payment_methods: Vec<PaymentMethod>,
    pub proposals: Vec<PurchaseProposal>,
    /// Number assigned to the last created proposal.
    pub last_proposal_number: u64,
}

impl Catalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// =============================================================================
// APP STATE
// =============================================================================

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<TenantResolver>,
    pub catalogs: Arc<RwLock<HashMap<TenantKey, Catalog>>>,
    pub trust_forwarded_host: bool,
}

impl AppState {
    #[must_use]
    pub fn new(resolver: TenantResolver, trust_forwarded_host: bool) -> Self {
        Self { resolver: Arc::new(resolver), catalogs: Arc::new(RwLock::new(HashMap::new())), trust_forwarded_host }
    }

    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.resolver(), config.trust_forwarded_host)
    }
}


#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
