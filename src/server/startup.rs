use std::{sync::Arc, time::Duration};

use governor::middleware::NoOpMiddleware;
use sea_orm::DatabaseConnection;
use tower_governor::{
    governor::{GovernorConfig, GovernorConfigBuilder},
    key_extractor::PeerIpKeyExtractor,
};

use crate::server::{
    config::Config,
    data::{blob::BlobStore, user::UserRepository},
    error::AppError,
};

/// Seconds between refills of one login attempt.
const LOGIN_REFILL_SECONDS: u64 = 12;
/// Login attempts a single IP may make back to back.
const LOGIN_BURST: u32 = 5;

/// Rate limit configuration applied to the login route.
pub type LoginRateLimit = Arc<GovernorConfig<PeerIpKeyExtractor, NoOpMiddleware>>;

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
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the blob store rooted at `STORAGE_DIR`, creating the directory if needed.
pub async fn prepare_blob_store(config: &Config) -> Result<BlobStore, AppError> {
    let blobs = BlobStore::new(config.storage_dir.clone());
    blobs.prepare().await?;

    tracing::info!("Blob storage at {}", blobs.root().display());

    Ok(blobs)
}

/// Logs a warning when no admin exists.
///
/// With no users at all the next registration becomes admin. With users but no admin, an
/// operator has to promote someone directly in the database.
pub async fn check_for_admin(db: &DatabaseConnection) -> Result<(), AppError> {
    let user_repo = UserRepository::new(db);

    if user_repo.admin_exists().await? {
        return Ok(());
    }

    if user_repo.count().await? == 0 {
        tracing::warn!("No users registered, the first account to register becomes admin");
    } else {
        tracing::warn!("No admin user exists; promote a user by setting role = 'admin'");
    }

    Ok(())
}

/// Builds the login rate limit: a burst of 5 attempts per IP, refilled one every 12 seconds.
pub fn login_rate_limit() -> Result<LoginRateLimit, AppError> {
    let config = GovernorConfigBuilder::default()
        .per_second(LOGIN_REFILL_SECONDS)
        .burst_size(LOGIN_BURST)
        .finish()
        .ok_or_else(|| AppError::InternalError("Invalid login rate limit".to_string()))?;

    Ok(Arc::new(config))
}

/// Periodically drops rate limiter state for IPs that have fully recovered.
pub fn spawn_rate_limit_cleanup(limiter: LoginRateLimit) {
    let interval = Duration::from_secs(60);

    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            tracing::debug!("Login rate limiter tracking {} IPs", limiter.limiter().len());
            limiter.limiter().retain_recent();
        }
    });
}
