use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Describes the schema a test needs and builds a [`TestContext`] with it.
///
/// Small tests add just the tables they touch with `with_table()`; anything involving seat
/// booking or uniqueness between several columns should use `with_booking_tables()`, because
/// entity-generated tables lack the composite unique indexes and cascades that the
/// migrations create.
///
/// ```rust,ignore
/// let test = TestBuilder::new().with_table(entity::prelude::User).build().await?;
/// let test = TestBuilder::new().with_booking_tables().build().await?;
/// ```
#[derive(Default)]
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    migrate: bool,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a table generated from an entity. Add referenced tables first.
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        self.tables
            .push(Schema::new(DbBackend::Sqlite).create_table_from_entity(entity));
        self
    }

    /// Runs the real migrations instead of generating tables from entities.
    pub fn with_booking_tables(mut self) -> Self {
        self.migrate = true;
        self
    }

    /// Connects to a fresh in-memory database and creates the requested schema.
    ///
    /// Migrations run before any table added with `with_table()`.
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        if self.migrate {
            context.with_migrations().await?;
        }
        context.with_tables(self.tables).await?;

        Ok(context)
    }
}
