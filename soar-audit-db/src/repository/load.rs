use async_trait::async_trait;
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

/// Generic repository trait for loading entities by their ID
///
/// Loads are soft reads: a missing entity and an unreadable store both yield
/// `None`.
///
/// # Example
/// ```ignore
/// #[async_trait]
/// impl Load<AuditRecord> for AuditRecordRepositoryImpl {
///     async fn load(&self, id: Uuid) -> Option<AuditRecord> {
///         // Implementation
///     }
/// }
/// ```
#[async_trait]
pub trait Load<T: Identifiable>: Send + Sync {
    /// Load an entity by its unique identifier
    async fn load(&self, id: Uuid) -> Option<T>;
}
