//! Pousada Reservation Server
//!
//! # Architecture overview
//!
//! A small lodging-reservation backend: a web form posts guest data to this
//! API, which persists it in an embedded document store, lists/filters it,
//! and exports it as a PDF voucher, an SVG summary, an XLSX workbook or
//! HTML table rows.
//!
//! # Module structure
//!
//! ```text
//! pousada-server/src/
//! ├── core/          # configuration, state, HTTP server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # embedded SurrealDB, models, repositories
//! ├── query.rs       # filter-to-query translation
//! ├── render/        # table rows, PDF voucher, SVG, XLSX
//! └── utils/         # errors, dates, validation, logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod query;
pub mod render;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState, router};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env`, then initialize logging from the environment.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____                            __
   / __ \____  __  _________ _____/ /___ _
  / /_/ / __ \/ / / / ___/ __ `/ __  / __ `/
 / ____/ /_/ / /_/ (__  ) /_/ / /_/ / /_/ /
/_/    \____/\__,_/____/\__,_/\__,_/\__,_/
    "#
    );
}
