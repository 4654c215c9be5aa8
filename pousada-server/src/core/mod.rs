//! Core module - server configuration, state and startup
//!
//! # Contents
//!
//! - [`Config`] - server configuration
//! - [`ServerState`] - shared request-handler state
//! - [`Server`] - HTTP server

pub mod config;
pub mod server;
pub mod state;

pub use config::Config;
pub use server::{Server, router};
pub use state::ServerState;
