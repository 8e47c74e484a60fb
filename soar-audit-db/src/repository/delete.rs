use async_trait::async_trait;
use soar_audit_api::AuditResult;
use uuid::Uuid;

/// Generic repository trait for deleting one entity
#[async_trait]
pub trait Delete: Send + Sync {
    /// Delete the entity with `id`
    ///
    /// # Returns
    /// * `Ok(true)` - The entity existed and was removed
    /// * `Ok(false)` - No entity with that id; the store is left untouched
    /// * `Err` - The updated collection could not be written
    async fn delete(&self, id: Uuid) -> AuditResult<bool>;
}
