mod repo_impl;
mod get;
mod set;
mod remove;

pub use repo_impl::PgKeyValueStore;
