//! Typed settings groups for the Adminkit console.
//!
//! Stored settings are untyped JSON blobs keyed by group (`currency.settings`,
//! `ui.toggles`, ...), possibly overridden per tenant. This crate resolves the
//! effective blob for a tenant and projects it onto a fully populated typed
//! struct, filling every missing or malformed field from the group's field
//! table. Writing goes the other way: a typed group becomes one entry.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod choice;
pub mod coerce;
pub mod fields;
pub mod group;
pub mod groups;
pub mod memory;
pub mod prelude;
pub mod resolve;
pub mod schema;
pub mod service;

pub use choice::Choice;
pub use fields::{project, Fields};
pub use group::SettingsGroup;
pub use groups::GroupValue;
pub use memory::MemorySettingsAdapter;
pub use schema::{FieldKind, FieldSpec};
pub use service::SettingsService;

// vim: ts=4
