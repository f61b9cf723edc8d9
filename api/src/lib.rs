//! Backend contract for the bug-report accuracy dashboard: wire types, the
//! `DashboardApi` trait and its reqwest implementation.

mod client;
mod error;
mod ordered;
mod types;

pub use client::{decode_body, ApiResult, DashboardApi, HttpDashboardApi};
pub use error::TransportError;
pub use ordered::OrderedMap;
pub use types::*;
