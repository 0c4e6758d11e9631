#![forbid(unsafe_code)]
//! Common types and error codes for the keywire EC key codec.

pub mod error;
pub mod format;

pub use error::*;
pub use format::*;
