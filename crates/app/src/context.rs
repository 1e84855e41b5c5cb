//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        photos::{LocalPhotosService, PhotosService},
        profiles::{PgProfilesService, ProfilesService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrate(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub profiles: Arc<dyn ProfilesService>,
    pub photos: Arc<dyn PhotosService>,
}

impl AppContext {
    #[must_use]
    pub fn new(profiles: Arc<dyn ProfilesService>, photos: Arc<dyn PhotosService>) -> Self {
        Self { profiles, photos }
    }

    /// Build application context from a database URL and a photo store.
    ///
    /// Pending migrations are applied when `run_migrations` is set.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying
    /// migrations fails.
    pub async fn from_database_url(
        url: &str,
        photos: LocalPhotosService,
        run_migrations: bool,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrate)?;
        }

        Ok(Self::new(
            Arc::new(PgProfilesService::new(Db::new(pool))),
            Arc::new(photos),
        ))
    }
}
