/// Phase-aware audit records
pub const AUDITS_KEY: &str = "soar_complete_audits";

/// Global audit trail, every audit's entries in insertion order
pub const TRAIL_KEY: &str = "soar_complete_trail";

pub const CHECKLISTS_KEY: &str = "soar_complete_checklists";

/// Flat audits of the single-form workflow
pub const SIMPLE_AUDITS_KEY: &str = "soar_plus_audits";
