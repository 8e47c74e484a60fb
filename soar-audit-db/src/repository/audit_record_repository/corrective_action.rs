use chrono::Utc;
use soar_audit_api::{
    AuditError, AuditRecordUpdate, AuditResult, CorrectiveAction, CorrectiveActionStatus,
};
use uuid::Uuid;

use crate::repository::load::Load;

use super::repo_impl::AuditRecordRepositoryImpl;

impl AuditRecordRepositoryImpl {
    /// Moves one CAR of an audit to `next` along its lifecycle.
    ///
    /// Returns `Ok(None)` when the audit or the action does not exist and
    /// `InvalidTransition` when the lifecycle forbids the move.
    pub async fn transition_corrective_action(
        &self,
        audit_id: Uuid,
        action_id: Uuid,
        next: CorrectiveActionStatus,
        actor_id: &str,
    ) -> AuditResult<Option<CorrectiveAction>> {
        let Some(audit) = self.load(audit_id).await else {
            return Ok(None);
        };

        let mut actions = audit.corrective_actions;
        let Some(action) = actions.iter_mut().find(|action| action.id == action_id) else {
            return Ok(None);
        };

        if !action.status.can_transition_to(next) {
            return Err(AuditError::InvalidTransition(format!(
                "corrective action {action_id} cannot move from {} to {next}",
                action.status
            )));
        }
        action.status = next;
        action.updated_at = Utc::now();
        let transitioned = action.clone();

        let update = AuditRecordUpdate {
            corrective_actions: Some(actions),
            ..Default::default()
        };
        Ok(self
            .update(audit_id, update, actor_id)
            .await?
            .map(|_| transitioned))
    }
}
