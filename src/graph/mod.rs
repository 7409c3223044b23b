//! The visual form of a pipeline: positioned nodes and dependency edges.

pub mod layout;
pub mod types;

pub use layout::*;
pub use types::*;
