//! Shared setup for tests that need a live PostgreSQL (`DATABASE_URL`).

use std::sync::Arc;

use crate::config::PostgresConfig;
use crate::postgres_repositories::PostgresRepositories;
use crate::repository::db_init::init_database;
use crate::repository::PgKeyValueStore;

pub async fn setup_test_store() -> Result<PgKeyValueStore, Box<dyn std::error::Error + Send + Sync>> {
    let config = PostgresConfig {
        max_connections: 1,
        ..PostgresConfig::from_env()
    };
    let pool = config.connect().await?;
    init_database(&pool).await?;
    Ok(PgKeyValueStore::new(Arc::new(pool)))
}

pub async fn setup_shared_repos() -> Result<PostgresRepositories, Box<dyn std::error::Error + Send + Sync>> {
    Ok(PostgresRepositories::connect(&PostgresConfig::from_env()).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use soar_audit_api::{AuditType, NewAuditRecord};
    use soar_audit_db::repository::{Delete, Load};
    use soar_audit_db::storage::{KeyValueStore, AUDITS_KEY};

    #[tokio::test]
    #[serial]
    #[ignore]
    async fn test_audit_round_trip_through_postgres() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repos = setup_shared_repos().await?;
        let audits = repos.create_audit_repositories();

        let created = audits
            .audit_record_repository
            .create(NewAuditRecord::for_organization("Skyline Air", AuditType::Iosa))
            .await?;

        // A fresh set of repositories sees the same rows
        let reopened = repos.create_audit_repositories();
        let loaded = reopened.audit_record_repository.load(created.id).await;
        assert_eq!(loaded, Some(created.clone()));

        assert!(reopened.audit_record_repository.delete(created.id).await?);
        assert!(repos.store().get(AUDITS_KEY).await?.is_some());
        Ok(())
    }
}
