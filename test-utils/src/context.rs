use migration::{Migrator, MigratorTrait};
use sea_orm::{
    sea_query::TableCreateStatement, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

const IN_MEMORY_URL: &str = "sqlite::memory:";

/// In-memory database and session for one test.
///
/// Both are created on first access. The pool is capped at a single connection: every
/// connection to `sqlite::memory:` opens its own empty database, so a second pooled
/// connection would not see the schema. It also means concurrent transactions in a test are
/// serialized the same way a write lock serializes them on a file database.
#[derive(Default)]
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the database, connecting on first use.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            let mut options = ConnectOptions::new(IN_MEMORY_URL);
            options.max_connections(1).min_connections(1).sqlx_logging(false);

            self.db = Some(Database::connect(options).await?);
        }

        self.db
            .as_ref()
            .ok_or_else(|| TestError::Database(sea_orm::DbErr::Custom("no database".to_string())))
    }

    /// Runs every migration, producing the same schema the server runs against.
    pub async fn with_migrations(&mut self) -> Result<(), TestError> {
        Migrator::up(self.database().await?, None).await?;
        Ok(())
    }

    /// Executes entity-generated `CREATE TABLE` statements in order.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;
        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(())
    }

    /// Returns a fresh session stored in the test database, creating it on first use.
    ///
    /// The session table is created alongside the application tables, so logging in and
    /// out in a test goes through the real `SqliteStore`.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let store = SqliteStore::new(self.database().await?.get_sqlite_connection_pool().clone());
            store
                .migrate()
                .await
                .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| TestError::Database(sea_orm::DbErr::Custom("no session".to_string())))
    }

    /// Both handles at once, for tests that need the database and a session together.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (self.db.as_ref(), self.session.as_ref()) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(TestError::Database(sea_orm::DbErr::Custom(
                "test context not initialized".to_string(),
            ))),
        }
    }
}
