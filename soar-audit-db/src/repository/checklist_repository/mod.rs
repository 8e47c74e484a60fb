mod repo_impl;
mod load;
mod create_version;
mod find_active;
mod archive;
mod revise;
pub(crate) mod test_utils;

pub use repo_impl::ChecklistRepositoryImpl;
