//! # avatara-core
//!
//! Core types for the Avatara lowering engine.
//! This crate contains the types shared across all Avatara crates:
//! structured errors and compile diagnostics.

pub mod diagnostic;
pub mod error;

pub use diagnostic::{Diagnostic, Severity};
pub use error::{AvataraError, AvataraResult};
