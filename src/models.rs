//! Records served by the catalog API.
//!
//! Every record belongs to exactly one tenant; the tenant key is not stored
//! on the record because catalogs are partitioned by tenant in `AppState`.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// ACCOUNTS / COST CENTERS / PAYMENT METHODS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: Uuid,
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostCenter {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCostCenter {
    pub code: String,
    pub name: String,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentMethod {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPaymentMethod {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// =============================================================================
// PURCHASE PROPOSALS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProposalStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl ProposalStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Whether a proposal in this status may move to `next`.
    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::Submitted) | (Self::Submitted, Self::Approved | Self::Rejected)
        )
    }
}

impl std::fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of a purchase proposal. Prices are integer cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseProposalItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
}

impl PurchaseProposalItem {
    #[must_use]
    pub fn total_cents(&self) -> i64 {
        self.unit_price_cents.saturating_mul(i64::from(self.quantity))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PurchaseProposal {
    pub id: Uuid,
    /// Per-tenant sequence number, starting at 1.
    pub number: u64,
    pub requester: String,
    pub account_id: Uuid,
    pub cost_center_id: Uuid,
    pub payment_method_id: Uuid,
    pub items: Vec<PurchaseProposalItem>,
    pub status: ProposalStatus,
}

impl PurchaseProposal {
    #[must_use]
    pub fn total_cents(&self) -> i64 {
        self.items
            .iter()
            .fold(0_i64, |acc, item| acc.saturating_add(item.total_cents()))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPurchaseProposal {
    pub requester: String,
    pub account_id: Uuid,
    pub cost_center_id: Uuid,
    pub payment_method_id: Uuid,
    pub items: Vec<PurchaseProposalItem>,
}

/// Proposal as returned over HTTP, with the computed total.
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseProposalView {
    #[serde(flatten)]
    pub proposal: PurchaseProposal,
    pub total_cents: i64,
}

impl From<PurchaseProposal> for PurchaseProposalView {
    fn from(proposal: PurchaseProposal) -> Self {
        let total_cents = proposal.total_cents();
        Self { proposal, total_cents }
    }
}

#[cfg(test)]
#[path = "models_test.rs"]
mod tests;
