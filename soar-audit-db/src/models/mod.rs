pub mod identifiable;
pub mod timestamped;

// Re-exports
pub use identifiable::*;
pub use timestamped::*;
