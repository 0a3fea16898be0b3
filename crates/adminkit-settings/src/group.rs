//! Typed settings groups and their conversion to and from stored entries

use adminkit_types::entry::SettingEntry;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Debug;

use crate::fields::{project, Fields};
use crate::prelude::*;
use crate::schema::FieldSpec;

/// A typed view over one stored settings blob.
///
/// Implementors declare their key and field table and build themselves from a
/// projected [`Fields`] bag. Everything else is provided.
pub trait SettingsGroup: Debug + Clone + PartialEq + Serialize + Send + Sync + 'static {
	/// Storage key, e.g. `currency.settings`
	const KEY: &'static str;
	const SCHEMA: &'static [FieldSpec];

	fn from_fields(fields: &Fields) -> Self;

	/// Stored representation of this value
	fn to_value(&self) -> Value {
		serde_json::to_value(self).unwrap_or_else(|err| {
			warn!("Cannot serialize settings group {}: {}", Self::KEY, err);
			Value::Object(Map::new())
		})
	}

	/// Typed value for any stored blob. Missing and malformed fields take their defaults.
	fn project(raw: &Value) -> Self {
		Self::from_fields(&project(Self::SCHEMA, raw))
	}

	fn defaults() -> Self {
		Self::project(&Value::Null)
	}

	/// The entries to write for this value: one `GLOBAL` entry under [`Self::KEY`]
	fn to_entries(&self) -> Vec<SettingEntry> {
		vec![SettingEntry::global(Self::KEY, self.to_value())]
	}
}

// vim: ts=4
