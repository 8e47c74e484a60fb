pub mod csv;
pub mod document;
pub mod json;
pub mod source;

pub use csv::*;
pub use document::*;
pub use json::*;
pub use source::*;
