//! API routing modules
//!
//! # Structure
//!
//! - [`health`] - health checks
//! - [`reservas`] - reservation CRUD, table rows and the PDF voucher
//! - [`export`] - whole-collection SVG and XLSX exports

pub mod export;
pub mod health;
pub mod reservas;
