use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config, error::AppError, model::user::Credentials, service::user::UserService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions are stored in the same Sqlite pool as the application data and expire after
/// seven days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to install on the router
/// - `Err(AppError::SessionErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &sea_orm::DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store
        .migrate()
        .await
        .map_err(|e| AppError::DbErr(sea_orm::DbErr::Custom(e.to_string())))?;

    let session = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    Ok(session)
}

/// Creates the configured staff account when no staff user exists yet.
///
/// Does nothing when `ADMIN_EMAIL`/`ADMIN_PASSWORD` are not set. Without them the first
/// staff account has to be promoted directly in the database.
pub async fn ensure_admin(db: &sea_orm::DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_service = UserService::new(db);

    match &config.admin {
        Some(admin) => {
            user_service
                .bootstrap_admin(Credentials::new(&admin.email, admin.password.clone()))
                .await?;
        }
        None => {
            if !user_service.staff_exists().await? {
                tracing::warn!(
                    "No staff account exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one"
                );
            }
        }
    }

    Ok(())
}
