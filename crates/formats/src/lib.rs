pub mod document;
pub mod elevation;

pub use document::*;
pub use elevation::*;
