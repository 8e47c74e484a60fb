use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compliance standard an audit is conducted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditType {
    /// IATA Operational Safety Audit
    Iosa,
    /// FAA International Aviation Safety Assessment
    FaaIasa,
    /// Coordinating Agency for Supplier Evaluation
    Case,
    /// Air Operator Certificate
    Aoc,
    Custom,
}

impl AuditType {
    pub const ALL: [AuditType; 5] = [
        AuditType::Iosa,
        AuditType::FaaIasa,
        AuditType::Case,
        AuditType::Aoc,
        AuditType::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AuditType::Iosa => "iosa",
            AuditType::FaaIasa => "faa-iasa",
            AuditType::Case => "case",
            AuditType::Aoc => "aoc",
            AuditType::Custom => "custom",
        }
    }
}

impl fmt::Display for AuditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s).ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgramType {
    SoarPlus,
    SoarAap,
}

impl ProgramType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProgramType::SoarPlus => "soar-plus",
            ProgramType::SoarAap => "soar-aap",
        }
    }
}

/// Administrative status of an audit, independent of its lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuditStatus {
    Draft,
    InProgress,
    Submitted,
    Approved,
    Closed,
}

impl AuditStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditStatus::Draft => "draft",
            AuditStatus::InProgress => "in-progress",
            AuditStatus::Submitted => "submitted",
            AuditStatus::Approved => "approved",
            AuditStatus::Closed => "closed",
        }
    }
}

impl fmt::Display for AuditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
