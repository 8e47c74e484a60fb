use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// User role in the audit workflow.
///
/// The role is supplied by the login flow and drives every permission
/// decision in [`crate::domain::permission`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Conducts internal self-assessments and responds to findings.
    Operator,
    /// Conducts audits, creates findings and runs the ROSI process.
    Auditor,
    /// Responsible manager for corrective action implementation.
    Manager,
    /// Director of Safety, final approval authority.
    Director,
    /// Full system access including user management.
    Admin,
}

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Operator,
        Role::Auditor,
        Role::Manager,
        Role::Director,
        Role::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Operator => "operator",
            Role::Auditor => "auditor",
            Role::Manager => "manager",
            Role::Director => "director",
            Role::Admin => "admin",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Operator => "Operator",
            Role::Auditor => "Auditor",
            Role::Manager => "Responsible Manager",
            Role::Director => "Director of Safety",
            Role::Admin => "Administrator",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Operator => "Conducts internal self-assessments and responds to audit findings",
            Role::Auditor => "Conducts audits, creates findings, and manages the ROSI process",
            Role::Manager => "Responsible for corrective action implementation and acceptance",
            Role::Director => "Final approval authority for corrective actions and closures",
            Role::Admin => "Full system access including user management",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "operator" => Ok(Role::Operator),
            "auditor" => Ok(Role::Auditor),
            "manager" => Ok(Role::Manager),
            "director" => Ok(Role::Director),
            "admin" => Ok(Role::Admin),
            _ => Err(()),
        }
    }
}
