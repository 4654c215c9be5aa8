use std::path::PathBuf;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;

/// Server state — shared handles for all request handlers
///
/// The SurrealDB handle is internally synchronized and cheap to clone, so
/// every request gets its own copy; no additional locking is added here.
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    /// Create server state from an existing database handle
    ///
    /// Used by tests with the in-memory engine; production code goes through
    /// [`ServerState::initialize`].
    pub fn new(config: Config, db: Surreal<Db>) -> Self {
        Self { config, db }
    }

    /// Initialize the server state
    ///
    /// Ensures the work-dir layout exists, then opens the database.
    ///
    /// # Panics
    ///
    /// Panics when the work directory cannot be created or the database
    /// cannot be opened; the server cannot run without either.
    pub async fn initialize(config: &Config) -> Self {
        config
            .ensure_work_dir_structure()
            .expect("Failed to create work directory structure");

        let db_service = DbService::new(&config.database_path)
            .await
            .expect("Failed to initialize database");

        Self::new(config.clone(), db_service.db)
    }

    /// Voucher logo location; the file may legitimately be absent
    pub fn voucher_logo_path(&self) -> PathBuf {
        PathBuf::from(&self.config.voucher_logo)
    }
}
