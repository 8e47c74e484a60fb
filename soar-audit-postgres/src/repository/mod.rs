pub mod db_init;
pub mod kv_store;

pub use kv_store::PgKeyValueStore;
