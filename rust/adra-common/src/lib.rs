//! Error and result types shared by all adra-* crates.

pub mod error;
pub mod result;

pub use result::Result;
