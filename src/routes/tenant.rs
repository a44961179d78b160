//! Tenant extraction for every request.

use axum::extract::{FromRef, State};
use axum::http::HeaderMap;
use axum::http::header::HOST;
use axum::http::request::Parts;
use axum::response::Json;
use serde::Serialize;

use crate::state::AppState;
use crate::tenant::TenantKey;

const FORWARDED_HOST: &str = "x-forwarded-host";

// =============================================================================
// TENANT EXTRACTOR
// =============================================================================

/// Tenant resolved from the request host.
/// Never rejects: unknown hosts resolve to the fallback tenant.
#[derive(Debug, Clone)]
pub struct TenantContext {
    pub key: TenantKey,
}

impl<S> axum::extract::FromRequestParts<S> for TenantContext
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let host = request_host(&parts.headers, parts.uri.host(), app_state.trust_forwarded_host);
        let key = app_state.resolver.resolve(host);
        if key.is_fallback() && !host.is_empty() {
            tracing::debug!(%host, "host did not match a tenant; using fallback");
        }
        Ok(Self { key })
    }
}

/// Pick the host to resolve. `X-Forwarded-Host` wins only when trusted; a
/// comma-separated forwarded list contributes its first entry.
pub(crate) fn request_host<'a>(headers: &'a HeaderMap, uri_host: Option<&'a str>, trust_forwarded: bool) -> &'a str {
    if trust_forwarded {
        if let Some(forwarded) = header_str(headers, FORWARDED_HOST) {
            let first = forwarded.split(',').next().unwrap_or_default().trim();
            if !first.is_empty() {
                return first;
            }
        }
    }
    header_str(headers, HOST.as_str()).or(uri_host).unwrap_or_default()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::trim)
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Serialize)]
pub struct TenantResponse {
    pub tenant: TenantKey,
    pub known: bool,
}

/// `GET /api/tenant`: report the tenant the request host resolved to.
pub async fn current_tenant(State(state): State<AppState>, tenant: TenantContext) -> Json<TenantResponse> {
    let known = state.resolver.is_known(tenant.key.as_str());
    Json(TenantResponse { tenant: tenant.key, known })
}

#[cfg(test)]
#[path = "tenant_test.rs"]
mod tests;
