//! Shared type definitions for sqlshape
//!
//! This crate provides the [`Dialect`] enum used by every sqlshape crate to
//! pick placeholder syntax, identifier quoting and operator spellings.
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `serde` - Enable serde serialization/deserialization of [`Dialect`]

#![cfg_attr(not(feature = "std"), no_std)]

mod dialect;

pub use dialect::{Dialect, DialectParseError};

/// Prelude module for commonly used types
pub mod prelude {
    pub use crate::Dialect;
}
