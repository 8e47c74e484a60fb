use soar_audit_api::{AuditRecordUpdate, AuditResult, DigitalSignature, NewSignature};
use uuid::Uuid;

use crate::repository::load::Load;

use super::repo_impl::AuditRecordRepositoryImpl;

impl AuditRecordRepositoryImpl {
    /// Appends a signature with a fresh id and timestamp, logged under the
    /// signer's name. Returns `Ok(None)` when the audit does not exist.
    pub async fn add_signature(
        &self,
        audit_id: Uuid,
        signature: NewSignature,
    ) -> AuditResult<Option<DigitalSignature>> {
        let Some(audit) = self.load(audit_id).await else {
            return Ok(None);
        };

        let actor = signature.signer.name.clone();
        let new_signature = signature.into_signature(audit_id);

        let mut signatures = audit.signatures;
        signatures.push(new_signature.clone());
        let update = AuditRecordUpdate {
            signatures: Some(signatures),
            ..Default::default()
        };

        Ok(self
            .update(audit_id, update, &actor)
            .await?
            .map(|_| new_signature))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::{new_audit, setup_repo, test_signature};
    use crate::repository::load::Load;
    use soar_audit_api::{AuditError, AuditRecordUpdate, Role};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_signatures_append_in_order() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = setup_repo();
        let audit = repo.create(new_audit("Skyline Air")).await?;

        let first = repo
            .add_signature(audit.id, test_signature("A. Auditor", Role::Auditor))
            .await?
            .ok_or("signature not added")?;
        let second = repo
            .add_signature(audit.id, test_signature("D. Director", Role::Director))
            .await?
            .ok_or("signature not added")?;

        let stored = repo.load(audit.id).await.ok_or("audit not found")?;
        assert_eq!(stored.signatures, vec![first, second]);

        let trail = repo.trail().query(audit.id).await;
        let last = trail.last().ok_or("no trail")?;
        assert_eq!(last.action, "updated_signatures");
        assert_eq!(last.user_id, "D. Director");
        Ok(())
    }

    #[tokio::test]
    async fn test_signature_on_missing_audit() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = setup_repo();
        let added = repo
            .add_signature(Uuid::new_v4(), test_signature("A. Auditor", Role::Auditor))
            .await?;
        assert!(added.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn test_signatures_cannot_be_removed() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = setup_repo();
        let audit = repo.create(new_audit("Skyline Air")).await?;
        repo.add_signature(audit.id, test_signature("A. Auditor", Role::Auditor))
            .await?;

        let update = AuditRecordUpdate {
            signatures: Some(Vec::new()),
            ..Default::default()
        };
        let result = repo.update(audit.id, update, "admin-1").await;

        assert!(matches!(result, Err(AuditError::InvalidTransition(_))));
        Ok(())
    }
}
