//! Utility module - shared helpers and types
//!
//! # Contents
//!
//! - [`AppError`] / [`AppResult`] - application error type and alias
//! - [`date`] - canonical calendar-date parsing and formatting
//! - [`validation`] - text length limits and checks
//! - [`logger`] - tracing setup

pub mod date;
pub mod error;
pub mod logger;
pub mod result;
pub mod validation;

pub use error::AppError;
pub use result::AppResult;
