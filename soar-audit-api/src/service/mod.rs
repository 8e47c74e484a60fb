pub mod report;
pub mod scoring;
pub mod summary;

pub use report::*;
pub use scoring::*;
pub use summary::*;
