//! CLI command handlers.

pub mod answer;
pub mod ask;
pub mod auth;
pub mod board;
pub mod config;
pub mod questions;
pub mod vote;
