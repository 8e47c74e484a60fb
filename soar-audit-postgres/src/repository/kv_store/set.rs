use soar_audit_db::storage::StorageError;
use tracing::debug;

use super::repo_impl::{backend_error, PgKeyValueStore};

impl PgKeyValueStore {
    pub(super) async fn set_impl(
        store: &PgKeyValueStore,
        key: &str,
        value: Vec<u8>,
    ) -> Result<(), StorageError> {
        let bytes = value.len();
        sqlx::query(
            r#"
            INSERT INTO soar_kv_slot (key, value, updated_at)
            VALUES ($1, $2, NOW())
            ON CONFLICT (key) DO UPDATE
            SET value = EXCLUDED.value, updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .execute(&*store.pool)
        .await
        .map_err(backend_error)?;

        debug!(key, bytes, "slot row upserted");
        Ok(())
    }
}
