mod repo_impl;
mod create;
mod load;
mod update;
mod delete;
mod list;
mod signature;
mod sub_finding;
mod corrective_action;
mod statistics;
mod report;

pub use repo_impl::AuditRecordRepositoryImpl;
