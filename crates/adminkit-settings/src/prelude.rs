pub use adminkit_types::prelude::*;

pub use crate::group::SettingsGroup;

// vim: ts=4
