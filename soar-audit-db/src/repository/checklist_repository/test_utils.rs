#[cfg(test)]
pub mod test_utils {
    use soar_audit_api::{
        AuditQuestion, AuditResult, ChecklistStatus, NewChecklistVersion, QuestionStandard,
        RiskLevel,
    };
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::repository::checklist_repository::ChecklistRepositoryImpl;
    use crate::storage::{InMemoryStore, KeyValueStore, StorageError};

    pub fn setup_checklists() -> (ChecklistRepositoryImpl, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new());
        (ChecklistRepositoryImpl::new(store.clone()), store)
    }

    /// In-memory store whose next reads can be made to fail.
    #[derive(Default)]
    pub struct FlakyReadStore {
        inner: InMemoryStore,
        failing_reads: AtomicUsize,
    }

    impl FlakyReadStore {
        pub fn fail_next_reads(&self, count: usize) {
            self.failing_reads.store(count, Ordering::SeqCst);
        }
    }

    #[async_trait]
    impl KeyValueStore for FlakyReadStore {
        async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
            let failing = self
                .failing_reads
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1));
            if failing.is_ok() {
                return Err(StorageError::Backend("store temporarily unavailable".to_string()));
            }
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: Vec<u8>) -> Result<(), StorageError> {
            self.inner.set(key, value).await
        }

        async fn remove(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key).await
        }
    }

    pub fn setup_flaky_checklists() -> (ChecklistRepositoryImpl, Arc<FlakyReadStore>) {
        let store = Arc::new(FlakyReadStore::default());
        (ChecklistRepositoryImpl::new(store.clone()), store)
    }

    pub fn question(id: &str, number: &str, risk_rank: RiskLevel) -> AuditResult<AuditQuestion> {
        AuditQuestion::new(
            id,
            number,
            "Safety reporting and investigation",
            risk_rank,
            "Safety",
            QuestionStandard::Recommended,
            Vec::new(),
        )
    }

    pub fn new_version(checklist_id: &str, version: u32) -> AuditResult<NewChecklistVersion> {
        Ok(NewChecklistVersion {
            checklist_id: checklist_id.to_string(),
            version,
            questions: vec![question("q1", "1.001", RiskLevel::Low)?],
            status: ChecklistStatus::Active,
        })
    }
}
