//! Agent record types and naming helpers.

pub mod naming;
pub mod types;

pub use naming::*;
pub use types::*;
