use std::path::{Path, PathBuf};

/// Server configuration
///
/// # Environment variables
///
/// All settings can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | working directory (database, assets, logs) |
/// | HTTP_PORT | 3001 | HTTP API port |
/// | DATABASE_PATH | {WORK_DIR}/database/pousada.db | embedded store path |
/// | VOUCHER_LOGO | {WORK_DIR}/imagens/logo.jpg | voucher logo (JPEG, optional) |
/// | LOG_LEVEL | info | tracing max level (read at startup) |
/// | LOG_DIR | - | daily-rolling log file directory (read at startup) |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/var/lib/pousada HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for the database, voucher assets and logs
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Embedded store path (RocksDB directory)
    pub database_path: String,
    /// Voucher logo path; a missing file is skipped, not an error
    pub voucher_logo: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_path = std::env::var("DATABASE_PATH")
            .unwrap_or_else(|_| format!("{work_dir}/database/pousada.db"));
        let voucher_logo = std::env::var("VOUCHER_LOGO")
            .unwrap_or_else(|_| format!("{work_dir}/imagens/logo.jpg"));

        Self {
            work_dir,
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            database_path,
            voucher_logo,
        }
    }

    /// Override the paths and port, keeping everything else from the
    /// environment. Used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let work_dir = work_dir.into();
        let mut config = Self::from_env();
        config.database_path = format!("{work_dir}/database/pousada.db");
        config.voucher_logo = format!("{work_dir}/imagens/logo.jpg");
        config.work_dir = work_dir;
        config.http_port = http_port;
        config
    }

    pub fn images_dir(&self) -> PathBuf {
        Path::new(&self.work_dir).join("imagens")
    }

    pub fn log_dir(&self) -> PathBuf {
        Path::new(&self.work_dir).join("logs")
    }

    /// Create the work-dir layout the server expects
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        if let Some(parent) = Path::new(&self.database_path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::create_dir_all(self.images_dir())?;
        std::fs::create_dir_all(self.log_dir())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
