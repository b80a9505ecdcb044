//! Application services: the lifecycle controller and the session binder.
//!
//! Services depend on ports and domain types only; infrastructure is
//! injected by the caller.

pub mod provision;
pub mod session;
