use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One stage of the fixed audit lifecycle.
///
/// Declaration order is the lifecycle order, so the derived `Ord` sorts
/// phases the way the workflow visits them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditPhase {
    Preparation,
    SelfAssessment,
    Audit,
    Analysis,
    Action,
    Validation,
    Closed,
}

impl AuditPhase {
    /// The complete lifecycle, first to last.
    pub const SEQUENCE: [AuditPhase; 7] = [
        AuditPhase::Preparation,
        AuditPhase::SelfAssessment,
        AuditPhase::Audit,
        AuditPhase::Analysis,
        AuditPhase::Action,
        AuditPhase::Validation,
        AuditPhase::Closed,
    ];

    /// Position of this phase in [`AuditPhase::SEQUENCE`].
    pub fn index(&self) -> usize {
        match self {
            AuditPhase::Preparation => 0,
            AuditPhase::SelfAssessment => 1,
            AuditPhase::Audit => 2,
            AuditPhase::Analysis => 3,
            AuditPhase::Action => 4,
            AuditPhase::Validation => 5,
            AuditPhase::Closed => 6,
        }
    }

    /// The phase that follows this one, `None` at `Closed`.
    pub fn next(&self) -> Option<AuditPhase> {
        Self::SEQUENCE.get(self.index() + 1).copied()
    }

    pub fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuditPhase::Preparation => "preparation",
            AuditPhase::SelfAssessment => "self-assessment",
            AuditPhase::Audit => "audit",
            AuditPhase::Analysis => "analysis",
            AuditPhase::Action => "action",
            AuditPhase::Validation => "validation",
            AuditPhase::Closed => "closed",
        }
    }
}

impl fmt::Display for AuditPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditPhase {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::SEQUENCE
            .iter()
            .copied()
            .find(|phase| phase.as_str() == s)
            .ok_or(())
    }
}

/// Progress marker stored in a phase history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PhaseStatus {
    NotStarted,
    InProgress,
    Completed,
    Blocked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_order_matches_index() {
        for (position, phase) in AuditPhase::SEQUENCE.iter().enumerate() {
            assert_eq!(phase.index(), position);
        }
    }

    #[test]
    fn test_next_walks_the_lifecycle() {
        let mut phase = AuditPhase::Preparation;
        let mut visited = vec![phase];
        while let Some(next) = phase.next() {
            visited.push(next);
            phase = next;
        }
        assert_eq!(visited, AuditPhase::SEQUENCE.to_vec());
        assert!(AuditPhase::Closed.is_terminal());
        assert!(!AuditPhase::Validation.is_terminal());
    }

    #[test]
    fn test_phase_wire_names() {
        assert_eq!(
            serde_json::to_string(&AuditPhase::SelfAssessment).unwrap(),
            "\"self-assessment\""
        );
        assert_eq!("self-assessment".parse::<AuditPhase>(), Ok(AuditPhase::SelfAssessment));
        assert_eq!("unknown".parse::<AuditPhase>(), Err(()));
    }
}
