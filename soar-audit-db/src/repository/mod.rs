pub mod delete;
pub mod exist_by_ids;
pub mod load;
pub mod load_page;
pub mod pagination;

pub mod audit_record_repository;
pub mod audit_trail_repository;
pub mod checklist_repository;
pub mod simple_audit_repository;
pub mod factory;

// Re-exports
pub use delete::*;
pub use exist_by_ids::*;
pub use load::*;
pub use load_page::*;
pub use pagination::*;

pub use audit_record_repository::AuditRecordRepositoryImpl;
pub use audit_trail_repository::AuditTrailRepositoryImpl;
pub use checklist_repository::ChecklistRepositoryImpl;
pub use simple_audit_repository::SimpleAuditRepositoryImpl;
pub use factory::{AuditRepositories, AuditRepoFactory};
