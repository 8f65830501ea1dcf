use std::path::Path;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};
use tempfile::TempDir;

use crate::error::TestError;

/// Test context containing the database connection and an optional storage directory.
///
/// Both are created lazily on first access and live as long as the context. The storage
/// directory is deleted when the context is dropped.
pub struct TestContext {
    /// Connection to the in-memory SQLite instance, created by `database()`.
    pub db: Option<DatabaseConnection>,

    /// Temporary blob storage root, created by `storage_dir()`.
    pub storage: Option<TempDir>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a new empty test context.
    pub fn new() -> Self {
        Self {
            db: None,
            storage: None,
        }
    }

    /// Gets or creates the in-memory SQLite database connection.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Failed to connect to in-memory SQLite database
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                let db_ref = self.db.insert(db);

                Ok(&*db_ref)
            }
        }
    }

    /// Creates database tables from the provided CREATE TABLE statements.
    ///
    /// Typically called by `TestBuilder::build()` rather than directly.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements to execute in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - Failed to create one or more tables
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        let backend = db.get_database_backend();
        for stmt in stmts {
            db.execute(backend.build(&stmt)).await?;
        }

        Ok(())
    }

    /// Gets or creates the temporary storage directory.
    ///
    /// # Returns
    /// - `Ok(&Path)` - Path of the directory
    /// - `Err(TestError::Io)` - Failed to create the directory
    pub fn storage_dir(&mut self) -> Result<&Path, TestError> {
        match self.storage {
            Some(ref dir) => Ok(dir.path()),
            None => {
                let dir = self.storage.insert(tempfile::tempdir()?);

                Ok(dir.path())
            }
        }
    }
}
