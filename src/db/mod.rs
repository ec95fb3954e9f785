// Embedded database client built on Turso/libsql
//
// DbClient wraps a single libsql connection to the local dictionary
// database. CRUD for the entity tables lives in dao.rs, the entry-graph
// operations in words.rs, and the schema in schema.rs.

use std::path::Path;

use libsql::params::IntoParams;
use libsql::{Builder, Connection};

pub mod dao;
pub mod entity;
pub mod schema;
pub mod traits;
pub mod words;

pub use entity::{
    AntonymRow, ChildRecord, DefinitionRow, EntryRow, MeaningRow, PhoneticRow, Record,
    SynonymRow, TermRow,
};
pub use schema::initialize_schema;
pub use traits::WordStore;

/// Error types for database operations
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DbError {
    /// Failed to open or configure the database file
    #[error("Failed to open database: {0}")]
    Open(String),
    /// A statement failed to execute
    #[error("Statement failed: {0}")]
    Execute(String),
    /// A query failed or a row could not be read
    #[error("Query failed: {0}")]
    Query(String),
    /// A column value could not be decoded into the expected type
    #[error("Failed to decode row: {0}")]
    Decode(String),
    /// A UNIQUE or FOREIGN KEY constraint rejected the statement
    #[error("Constraint violated: {0}")]
    Constraint(String),
    /// An update or delete matched no row
    #[error("No {0} row with id {1}")]
    NotFound(&'static str, i64),
}

/// Classify a libsql error, surfacing constraint violations distinctly so
/// callers can tell a rejected write from a broken one.
fn execute_error(e: libsql::Error) -> DbError {
    let message = e.to_string();
    if message.contains("constraint") || message.contains("CONSTRAINT") {
        DbError::Constraint(message)
    } else {
        DbError::Execute(message)
    }
}

/// Client for the local dictionary database.
#[derive(Clone)]
pub struct DbClient {
    conn: Connection,
}

impl DbClient {
    /// Open (or create) the database at the given path.
    ///
    /// Foreign key enforcement is enabled per connection; SQLite defaults
    /// it to off.
    pub async fn open(path: &Path) -> Result<Self, DbError> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| DbError::Open(e.to_string()))?;
        }

        crate::debug!("Opening dictionary database at {:?}", path);
        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| DbError::Open(e.to_string()))?;
        let conn = db.connect().map_err(|e| DbError::Open(e.to_string()))?;

        let client = Self { conn };
        client.execute("PRAGMA foreign_keys = ON", ()).await?;
        Ok(client)
    }

    /// Open an in-memory database (used by tests).
    pub async fn open_in_memory() -> Result<Self, DbError> {
        let db = Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| DbError::Open(e.to_string()))?;
        let conn = db.connect().map_err(|e| DbError::Open(e.to_string()))?;

        let client = Self { conn };
        client.execute("PRAGMA foreign_keys = ON", ()).await?;
        Ok(client)
    }

    /// Execute a statement, returning the number of affected rows.
    pub(crate) async fn execute(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<u64, DbError> {
        self.conn.execute(sql, params).await.map_err(execute_error)
    }

    /// Run a query and return its rows.
    pub(crate) async fn query(
        &self,
        sql: &str,
        params: impl IntoParams,
    ) -> Result<libsql::Rows, DbError> {
        self.conn
            .query(sql, params)
            .await
            .map_err(|e| DbError::Query(e.to_string()))
    }

    /// Rowid generated by the most recent successful insert.
    pub(crate) fn last_insert_rowid(&self) -> i64 {
        self.conn.last_insert_rowid()
    }
}
