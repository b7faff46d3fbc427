//! Core building blocks shared by every other module.
//!
//! This module contains:
//! - The primary [`FvError`] type.
//! - The numeric coercion helpers ([`num`], [`num_or`]) that neutralize
//!   dirty provider data into well-formed numbers.
//! - Shared data models like [`ClosePrice`].

/// Safe numeric extraction from loosely typed provider records.
pub mod coerce;
/// The primary error type (`FvError`) for the crate.
pub mod error;
/// Shared data models used across multiple modules.
pub mod models;

// convenient re-exports so most code can just `use crate::core::FvError`
pub use coerce::{num, num_or};
pub use error::FvError;
pub use models::ClosePrice;
