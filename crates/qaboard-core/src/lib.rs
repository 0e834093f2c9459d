//! Core qaboard library (data model, backend client, session, config).

pub mod api;
pub mod config;
pub mod logging;
pub mod session;
