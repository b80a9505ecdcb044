//! Domain types: configuration, errors, and the provisioning state machine.
//!
//! Nothing in here touches processes, the network, or the environment.

pub mod config;
pub mod error;
pub mod state;
