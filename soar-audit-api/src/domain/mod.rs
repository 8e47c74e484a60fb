pub mod audit_record;
pub mod audit_type;
pub mod checklist;
pub mod corrective_action;
pub mod finding;
pub mod permission;
pub mod phase;
pub mod risk;
pub mod role;
pub mod signature;
pub mod simple_audit;
pub mod statistics;
pub mod sub_finding;
pub mod trail;

// Re-exports
pub use audit_record::*;
pub use audit_type::*;
pub use checklist::*;
pub use corrective_action::*;
pub use finding::*;
pub use permission::*;
pub use phase::*;
pub use risk::*;
pub use role::*;
pub use signature::*;
pub use simple_audit::*;
pub use statistics::*;
pub use sub_finding::*;
pub use trail::*;
