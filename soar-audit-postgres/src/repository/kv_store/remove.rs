use soar_audit_db::storage::StorageError;

use super::repo_impl::{backend_error, PgKeyValueStore};

impl PgKeyValueStore {
    pub(super) async fn remove_impl(store: &PgKeyValueStore, key: &str) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM soar_kv_slot WHERE key = $1")
            .bind(key)
            .execute(&*store.pool)
            .await
            .map_err(backend_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::test_helper::setup_test_store;
    use serial_test::serial;
    use soar_audit_db::storage::KeyValueStore;

    #[tokio::test]
    #[serial]
    #[ignore]
    async fn test_remove_is_idempotent() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let store = setup_test_store().await?;

        store.set("soar_removed_slot", b"[]".to_vec()).await?;
        store.remove("soar_removed_slot").await?;
        store.remove("soar_removed_slot").await?;

        assert_eq!(store.get("soar_removed_slot").await?, None);
        Ok(())
    }
}
