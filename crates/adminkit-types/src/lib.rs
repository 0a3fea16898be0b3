//! Shared types, adapter traits, and core utilities for the Adminkit console.
//!
//! This crate contains the foundational types that are shared between the
//! settings projection layer, the formatting engines and every settings store
//! implementation. Keeping them here lets adapter crates compile without
//! pulling in the projection layer.

#![forbid(unsafe_code)]

pub mod entry;
pub mod error;
pub mod prelude;
pub mod settings_adapter;
pub mod types;

// vim: ts=4
