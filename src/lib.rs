//! Multi-tenant backend for the okron maintenance-management web client.
//!
//! Requests are routed to a tenant by the first label of their host name
//! (see [`tenant::TenantResolver`]); each tenant owns an isolated catalog of
//! accounts, cost centers, payment methods and purchase proposals.

pub mod config;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
pub mod tenant;

pub use tenant::{TenantKey, TenantResolver, resolve_tenant};
