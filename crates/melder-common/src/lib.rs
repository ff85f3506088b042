//! # Melder Common
//!
//! Common types shared by every Melder crate.
//!
//! This crate provides:
//! - Closed identifier enums (commands, abilities, families, crystals, characters)
//! - Recipe identifiers
//! - Common error types
//! - Prelude for convenient imports

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(clippy::unwrap_used)]

mod macros;

pub mod ability;
pub mod command;
pub mod error;
pub mod ids;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ability::*;
    pub use crate::command::*;
    pub use crate::error::*;
    pub use crate::ids::*;
}

pub use prelude::*;
