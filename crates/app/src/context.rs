//! App Context

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;
use tracing::{info, warn};

use crate::{
    auth::{AuthService, JwtAuthService, PasswordStorage, Passwords, TokenSecret},
    database::{self, Db},
    domain::{
        carts::{CartsService, PgCartsService},
        images::{ImagesService, ImagesServiceError, LocalImageStore},
        products::{PgProductsService, ProductsService},
        subscriptions::{PgSubscriptionsService, SubscriptionsService},
        users::{PgUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),

    #[error("token secret must not be empty")]
    EmptyTokenSecret,

    #[error(transparent)]
    Images(#[from] ImagesServiceError),
}

/// Settings needed to assemble the application services.
#[derive(Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub token_secret: TokenSecret,
    pub password_storage: PasswordStorage,
    pub upload_dir: PathBuf,
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub subscriptions: Arc<dyn SubscriptionsService>,
    pub users: Arc<dyn UsersService>,
    pub carts: Arc<dyn CartsService>,
    pub images: Arc<dyn ImagesService>,
    pub auth: Arc<dyn AuthService>,
    db: Option<Db>,
}

impl AppContext {
    /// Connect to the database, apply migrations and build every service.
    ///
    /// # Errors
    ///
    /// Returns an error when the database is unreachable, a migration fails, the
    /// token secret is empty or the upload directory cannot be created.
    pub async fn from_config(config: AppConfig) -> Result<Self, AppInitError> {
        if config.token_secret.is_empty() {
            return Err(AppInitError::EmptyTokenSecret);
        }

        let pool = database::connect(&config.database_url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        info!("database migrations applied");

        let db = Db::new(pool);
        let images = LocalImageStore::open(config.upload_dir).await?;
        let auth: Arc<dyn AuthService> = Arc::new(JwtAuthService::new(config.token_secret));

        Ok(Self {
            products: Arc::new(PgProductsService::new(db.clone())),
            subscriptions: Arc::new(PgSubscriptionsService::new(db.clone())),
            users: Arc::new(PgUsersService::new(
                db.clone(),
                Passwords::new(config.password_storage),
                Arc::clone(&auth),
            )),
            carts: Arc::new(PgCartsService::new(db.clone())),
            images: Arc::new(images),
            auth,
            db: Some(db),
        })
    }

    /// Build a context from ready-made services, without a database handle.
    #[must_use]
    pub fn from_services(
        products: Arc<dyn ProductsService>,
        subscriptions: Arc<dyn SubscriptionsService>,
        users: Arc<dyn UsersService>,
        carts: Arc<dyn CartsService>,
        images: Arc<dyn ImagesService>,
        auth: Arc<dyn AuthService>,
    ) -> Self {
        Self {
            products,
            subscriptions,
            users,
            carts,
            images,
            auth,
            db: None,
        }
    }

    /// Whether the database answers a ping, or `None` when there is no database.
    pub async fn database_reachable(&self) -> Option<bool> {
        let db = self.db.as_ref()?;

        match db.ping().await {
            Ok(()) => Some(true),
            Err(error) => {
                warn!("database ping failed: {error}");

                Some(false)
            }
        }
    }

    /// Release the database pool, if this context owns one.
    pub async fn close(&self) {
        if let Some(db) = &self.db {
            db.close().await;
        }
    }
}
