mod repo_impl;
mod append;
mod query;
mod query_page;

pub use repo_impl::AuditTrailRepositoryImpl;
