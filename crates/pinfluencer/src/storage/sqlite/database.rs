use tokio_rusqlite::Connection;

use pinfluencer_core::storage::{RepositoryError, Result};

use super::error::wrap_err;
use super::schema;

/// Process-wide SQLite handle.
///
/// Opened once at startup, shared by every repository through cheap
/// connection clones, and closed explicitly at shutdown.
#[derive(Clone)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens (or creates) a file-based database and initialises the schema.
    pub async fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;
        tracing::debug!(path, "Opened SQLite database");

        Ok(Self { conn })
    }

    /// Opens an in-memory database. Data is lost when the last handle drops.
    pub async fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::ENABLE_FOREIGN_KEYS)
                .map_err(wrap_err)?;
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }

    /// Returns a handle to the shared connection.
    pub fn connection(&self) -> Connection {
        self.conn.clone()
    }

    /// Closes the connection. Pending calls on other handles fail afterwards.
    pub async fn close(self) -> Result<()> {
        self.conn
            .close()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))
    }
}
