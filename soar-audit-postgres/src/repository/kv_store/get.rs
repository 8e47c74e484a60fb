use soar_audit_db::storage::StorageError;

use super::repo_impl::{backend_error, PgKeyValueStore};

impl PgKeyValueStore {
    pub(super) async fn get_impl(
        store: &PgKeyValueStore,
        key: &str,
    ) -> Result<Option<Vec<u8>>, StorageError> {
        let value: Option<Vec<u8>> = sqlx::query_scalar(
            r#"
            SELECT value
            FROM soar_kv_slot
            WHERE key = $1
            "#,
        )
        .bind(key)
        .fetch_optional(&*store.pool)
        .await
        .map_err(backend_error)?;

        Ok(value)
    }
}
