mod repo_impl;
mod save;
mod load;
mod update;
mod delete;
mod history;
mod statistics;

pub use repo_impl::SimpleAuditRepositoryImpl;
