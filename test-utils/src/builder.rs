use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add entity tables with `with_table()` in dependency order, optionally request a temporary
/// storage directory, then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{User, Folder};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Folder)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
    /// Whether `build()` should create a temporary blob storage directory.
    storage: bool,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            storage: false,
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after the tables they
    /// reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds every table of the schema in dependency order.
    ///
    /// Use this for service and HTTP-level tests that touch several modules at once.
    pub fn with_all_tables(self) -> Self {
        self.with_table(User)
            .with_table(Folder)
            .with_table(Document)
            .with_table(DocumentAccess)
            .with_table(Memo)
            .with_table(Notification)
            .with_table(Attendance)
    }

    /// Adds the tables required for document operations.
    ///
    /// Includes User, Folder, Document, DocumentAccess and Notification, since uploads and
    /// sharing emit notifications.
    pub fn with_document_tables(self) -> Self {
        self.with_table(User)
            .with_table(Folder)
            .with_table(Document)
            .with_table(DocumentAccess)
            .with_table(Notification)
    }

    /// Requests a temporary blob storage directory, removed when the context drops.
    pub fn with_storage(mut self) -> Self {
        self.storage = true;
        self
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect to database or create tables
    /// - `Err(TestError::Io)` - Failed to create the storage directory
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        if self.storage {
            setup.storage_dir()?;
        }

        Ok(setup)
    }
}
