use soar_audit_db::repository::{AuditRepoFactory, AuditRepositories};
use sqlx::PgPool;
use std::sync::Arc;

use crate::config::PostgresConfig;
use crate::repository::db_init::init_database;
use crate::repository::PgKeyValueStore;

/// Audit repositories persisted in PostgreSQL.
pub struct PostgresRepositories {
    pool: Arc<PgPool>,
}

impl PostgresRepositories {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Connects with `config` and makes sure the slot table exists.
    pub async fn connect(config: &PostgresConfig) -> Result<Self, sqlx::Error> {
        let pool = config.connect().await?;
        init_database(&pool).await?;
        Ok(Self::new(Arc::new(pool)))
    }

    pub fn pool(&self) -> &Arc<PgPool> {
        &self.pool
    }

    pub fn store(&self) -> Arc<PgKeyValueStore> {
        Arc::new(PgKeyValueStore::new(self.pool.clone()))
    }

    /// Create all repositories over one PostgreSQL-backed store
    pub fn create_audit_repositories(&self) -> AuditRepositories {
        AuditRepoFactory::new(self.store()).create_all_repositories()
    }
}
