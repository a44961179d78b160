//! Tenant resolution from request host names.
//!
//! DESIGN
//! ======
//! Each tenant is served from its own subdomain (`kolder.okron.com`). The
//! first dot-delimited label of the host is the candidate tenant code; it is
//! accepted only if it appears verbatim in the allow-list. Everything else,
//! including empty or dotless hosts, resolves to the `default` tenant.
//!
//! Resolution is total. An unknown subdomain is not an error: it falls back
//! to `default` instead of being rejected or passed through.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Tenant codes recognised when no allow-list is configured.
pub const DEFAULT_TENANTS: &[&str] = &["kolder", "jpont"];

/// Key returned for hosts that do not match any allow-listed code.
pub const FALLBACK_TENANT: &str = "default";

// =============================================================================
// TENANT KEY
// =============================================================================

/// Resolved tenant identifier. Either an allow-listed code or `default`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TenantKey(String);

impl TenantKey {
    #[must_use]
    pub fn fallback() -> Self {
        Self(FALLBACK_TENANT.to_owned())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.0 == FALLBACK_TENANT
    }
}

impl fmt::Display for TenantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for TenantKey {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for TenantKey {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// RESOLVER
// =============================================================================

/// Maps host names to tenant keys against a fixed allow-list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantResolver {
    codes: BTreeSet<String>,
}

impl TenantResolver {
    /// Build a resolver over the given tenant codes.
    ///
    /// Empty codes are dropped: an empty first label must never match. The
    /// fallback key is dropped too, so unknown hosts never share a partition
    /// with an allow-listed tenant. Codes are kept exactly as given, with no
    /// case folding.
    #[must_use]
    pub fn new<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes = codes
            .into_iter()
            .map(Into::<String>::into)
            .filter(|code| !code.is_empty() && code != FALLBACK_TENANT)
            .collect();
        Self { codes }
    }

    /// Resolve `host` to a tenant key.
    #[must_use]
    pub fn resolve(&self, host: &str) -> TenantKey {
        let candidate = subdomain(host);
        if self.codes.contains(candidate) {
            TenantKey(candidate.to_owned())
        } else {
            TenantKey::fallback()
        }
    }

    #[must_use]
    pub fn is_known(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    /// Allow-listed codes in sorted order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.codes.iter().map(String::as_str)
    }
}

impl Default for TenantResolver {
    fn default() -> Self {
        Self::new(DEFAULT_TENANTS.iter().copied())
    }
}

/// Resolve `host` against [`DEFAULT_TENANTS`].
#[must_use]
pub fn resolve_tenant(host: &str) -> TenantKey {
    TenantResolver::default().resolve(host)
}

/// First dot-delimited label of `host`. The whole string when there is no dot.
fn subdomain(host: &str) -> &str {
    host.split('.').next().unwrap_or_default()
}

#[cfg(test)]
#[path = "tenant_test.rs"]
mod tests;
