//! # amlich-core
//!
//! Core types, error definitions, and index helpers for amlich.
//!
//! This crate provides the building blocks shared across the other crates
//! in the workspace – primitive type aliases, the error hierarchy with its
//! `ensure!` / `fail!` macros, and the cyclic index normalization used by
//! every stem, branch, and star table.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Cyclic index normalization.
pub mod cyclic;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Julian Day Number of a civil day (integer, noon-based).
pub type JulianDay = i64;

/// A civil or lunar year number.
pub type Year = i32;

/// Floating-point type used for astronomical quantities.
pub type Real = f64;

/// An angle in degrees.
pub type Degrees = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use cyclic::{cyclic_index, cyclic_index_i64};
pub use errors::{Error, Result};
