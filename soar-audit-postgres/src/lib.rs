pub mod config;
pub mod postgres_repositories;
pub mod repository;

pub use config::PostgresConfig;
pub use postgres_repositories::PostgresRepositories;
pub use repository::PgKeyValueStore;

#[cfg(test)]
pub mod test_helper;
