use chrono::Utc;
use soar_audit_api::{
    is_phase_allowed, permissions, AuditError, AuditPhase, AuditRecordUpdate, AuditResult,
    AuditStatus, PhaseData, Role,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::repository::load::Load;
use crate::repository::AuditRecordRepositoryImpl;

/// Moves audits along the fixed phase sequence.
///
/// Advancing never checks phase content; gating is by role only, through
/// [`PhaseStateMachine::advance_as`].
#[derive(Clone)]
pub struct PhaseStateMachine {
    audits: AuditRecordRepositoryImpl,
}

impl PhaseStateMachine {
    pub fn new(audits: AuditRecordRepositoryImpl) -> Self {
        Self { audits }
    }

    /// Moves the audit to the phase after its current one.
    ///
    /// Returns the new phase, or `Ok(None)` when the audit does not exist or
    /// is already closed. The history entry and the new `currentPhase` go
    /// through one update, so the trail records both.
    pub async fn advance(&self, audit_id: Uuid, actor_id: &str) -> AuditResult<Option<AuditPhase>> {
        let Some(audit) = self.audits.load(audit_id).await else {
            return Ok(None);
        };
        let Some(next) = audit.current_phase.next() else {
            debug!(%audit_id, "audit already closed, nothing to advance");
            return Ok(None);
        };

        let mut history = audit.phase_history;
        history.push(PhaseData::entered_by(next, actor_id));

        let mut update = AuditRecordUpdate {
            current_phase: Some(next),
            phase_history: Some(history),
            ..Default::default()
        };
        if next == AuditPhase::Closed {
            update.status = Some(AuditStatus::Closed);
            update.closed_at = Some(Some(Utc::now()));
            update.closed_by = Some(Some(actor_id.to_string()));
        }

        let advanced = self
            .audits
            .update(audit_id, update, actor_id)
            .await?
            .map(|audit| audit.current_phase);

        if let Some(phase) = advanced {
            info!(%audit_id, %phase, actor_id, "audit phase advanced");
        }
        Ok(advanced)
    }

    /// [`advance`](Self::advance) on behalf of `role`.
    ///
    /// The role needs the advance capability and must be allowed to work in
    /// the audit's current phase, otherwise `PermissionDenied`.
    pub async fn advance_as(
        &self,
        audit_id: Uuid,
        actor_id: &str,
        role: Role,
    ) -> AuditResult<Option<AuditPhase>> {
        let Some(audit) = self.audits.load(audit_id).await else {
            return Ok(None);
        };

        if !permissions(role).can_advance_phase {
            return Err(AuditError::PermissionDenied(format!(
                "role {role} cannot advance audit phases"
            )));
        }
        if !is_phase_allowed(role, audit.current_phase) {
            return Err(AuditError::PermissionDenied(format!(
                "role {role} has no access to the {} phase",
                audit.current_phase
            )));
        }

        self.advance(audit_id, actor_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use soar_audit_api::{AuditType, NewAuditRecord};
    use std::sync::Arc;

    use crate::storage::InMemoryStore;

    fn setup_machine() -> (PhaseStateMachine, AuditRecordRepositoryImpl) {
        let audits = AuditRecordRepositoryImpl::new(Arc::new(InMemoryStore::new()));
        (PhaseStateMachine::new(audits.clone()), audits)
    }

    async fn new_audit(
        audits: &AuditRecordRepositoryImpl,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        let created = audits
            .create(NewAuditRecord::for_organization("Skyline Air", AuditType::Iosa))
            .await?;
        Ok(created.id)
    }

    #[tokio::test]
    async fn test_advance_walks_sequence() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (machine, audits) = setup_machine();
        let audit_id = new_audit(&audits).await?;

        let phase = machine.advance(audit_id, "auditor-1").await?;
        assert_eq!(phase, Some(AuditPhase::SelfAssessment));

        let stored = audits.load(audit_id).await.ok_or("audit not found")?;
        assert_eq!(stored.phase_history.len(), 2);
        let entered = stored.phase_history.last().ok_or("empty history")?;
        assert_eq!(entered.phase, AuditPhase::SelfAssessment);
        assert_eq!(entered.completed_by.as_deref(), Some("auditor-1"));
        assert!(stored.phase_is_consistent());

        let actions: Vec<String> = audits
            .trail()
            .query(audit_id)
            .await
            .into_iter()
            .map(|entry| entry.action)
            .collect();
        assert_eq!(
            actions,
            vec!["created", "updated_currentPhase", "updated_phaseHistory"]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_advance_stops_at_closed() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (machine, audits) = setup_machine();
        let audit_id = new_audit(&audits).await?;

        for _ in 0..8 {
            machine.advance(audit_id, "admin-1").await?;
        }

        let stored = audits.load(audit_id).await.ok_or("audit not found")?;
        assert_eq!(stored.current_phase, AuditPhase::Closed);
        assert_eq!(stored.phase_history.len(), AuditPhase::SEQUENCE.len());
        assert_eq!(stored.status, AuditStatus::Closed);
        assert_eq!(stored.closed_by.as_deref(), Some("admin-1"));
        assert!(stored.closed_at.is_some());

        let trail_before = audits.trail().count(audit_id).await;
        assert_eq!(machine.advance(audit_id, "admin-1").await?, None);
        assert_eq!(audits.trail().count(audit_id).await, trail_before);
        Ok(())
    }

    #[tokio::test]
    async fn test_advance_missing_audit() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (machine, _) = setup_machine();
        assert_eq!(machine.advance(Uuid::new_v4(), "admin-1").await?, None);
        Ok(())
    }

    #[tokio::test]
    async fn test_advance_is_role_gated() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let (machine, audits) = setup_machine();
        let audit_id = new_audit(&audits).await?;

        // Operators cannot advance at all
        let result = machine.advance_as(audit_id, "operator-1", Role::Operator).await;
        assert!(matches!(result, Err(AuditError::PermissionDenied(_))));

        // Auditors have no access to preparation
        let result = machine.advance_as(audit_id, "auditor-1", Role::Auditor).await;
        assert!(matches!(result, Err(AuditError::PermissionDenied(_))));

        let phase = machine.advance_as(audit_id, "manager-1", Role::Manager).await?;
        assert_eq!(phase, Some(AuditPhase::SelfAssessment));
        Ok(())
    }
}
