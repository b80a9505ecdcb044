//! Infrastructure adapters fulfilling the application-layer ports.

pub mod command_runner;
pub mod config;
pub mod db_client;
pub mod network;
