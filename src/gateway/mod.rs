//! Storage backends selectable from configuration.

mod http;
mod sqlite;

pub use http::HttpGateway;
pub use sqlite::SqliteGateway;

use gestor_core::StorageGateway;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Backend, Config};
use crate::db::{init_db, RecordRepository};

/// Opens the configured backend.
pub async fn connect(config: &Config) -> Result<Arc<dyn StorageGateway>, Box<dyn std::error::Error>> {
    match config.backend.value {
        Backend::Sqlite => {
            let pool = init_db(&config.database_path.value).await?;
            tracing::debug!(path = %config.database_path.value.display(), "Opened SQLite backend");
            Ok(Arc::new(SqliteGateway::new(RecordRepository::new(pool))))
        }
        Backend::Http => {
            let base_url = config.http.base_url.as_deref().ok_or(
                "HTTP backend selected but no http.base_url configured. Set it in the config file or GESTOR_BACKEND_URL.",
            )?;
            tracing::debug!(base_url, "Using HTTP backend");
            let gateway = HttpGateway::new(
                base_url,
                config.http.api_key.clone(),
                Duration::from_secs(config.http.timeout_secs()),
            )?;
            Ok(Arc::new(gateway))
        }
    }
}
