use soar_audit_api::{AuditRecordUpdate, AuditResult, NewSubFinding, SubFinding};
use tracing::warn;
use uuid::Uuid;

use crate::repository::load::Load;

use super::repo_impl::AuditRecordRepositoryImpl;

impl AuditRecordRepositoryImpl {
    /// Raises a performance-creep sub-finding under `parent_finding_id`.
    ///
    /// Returns `Ok(None)` when the audit or the parent finding does not exist.
    pub async fn create_sub_finding(
        &self,
        audit_id: Uuid,
        parent_finding_id: Uuid,
        sub_finding: NewSubFinding,
    ) -> AuditResult<Option<SubFinding>> {
        let Some(audit) = self.load(audit_id).await else {
            return Ok(None);
        };
        if audit.finding(parent_finding_id).is_none() {
            warn!(%audit_id, %parent_finding_id, "sub-finding refers to an unknown finding");
            return Ok(None);
        }

        let new_sub_finding = sub_finding.into_sub_finding(parent_finding_id);
        let mut sub_findings = audit.sub_findings;
        sub_findings.push(new_sub_finding.clone());
        let update = AuditRecordUpdate {
            sub_findings: Some(sub_findings),
            ..Default::default()
        };

        Ok(self
            .update(audit_id, update, "system")
            .await?
            .map(|_| new_sub_finding))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_utils::test_utils::{audit_with_finding, setup_repo};
    use crate::repository::load::Load;
    use soar_audit_api::{NewSubFinding, RiskLevel, SubFindingStatus};
    use uuid::Uuid;

    #[tokio::test]
    async fn test_sub_finding_defaults_to_open() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = setup_repo();
        let (audit, finding_id) = audit_with_finding(&repo).await?;

        let sub = repo
            .create_sub_finding(
                audit.id,
                finding_id,
                NewSubFinding::new("Checklist use lapsed after three months", RiskLevel::High),
            )
            .await?
            .ok_or("sub-finding not created")?;

        assert_eq!(sub.parent_finding_id, finding_id);
        assert_eq!(sub.status, SubFindingStatus::Open);

        let stored = repo.load(audit.id).await.ok_or("audit not found")?;
        assert_eq!(stored.sub_findings, vec![sub]);
        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_parent_finding() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let repo = setup_repo();
        let (audit, _) = audit_with_finding(&repo).await?;

        let sub = repo
            .create_sub_finding(audit.id, Uuid::new_v4(), NewSubFinding::new("Orphan", RiskLevel::Low))
            .await?;

        assert!(sub.is_none());
        Ok(())
    }
}
