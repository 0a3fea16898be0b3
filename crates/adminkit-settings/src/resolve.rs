//! Picking the effective stored value for a key as seen by one tenant

use adminkit_types::entry::{SettingEntry, SettingScope};
use serde_json::{Map, Value};

use crate::prelude::*;

/// The entry that decides the value of `key` for `tenant_id`.
///
/// An active `TENANT` entry for the same tenant wins over an active `GLOBAL`
/// one. Among several candidates of one scope the most recently updated is
/// used, ties going to the one listed last.
pub fn select_entry<'a>(
	entries: &'a [SettingEntry],
	key: &str,
	tenant_id: Option<&TenantId>,
) -> Option<&'a SettingEntry> {
	let latest = |scope: SettingScope| {
		entries
			.iter()
			.filter(|entry| entry.scope == scope)
			.filter(|entry| entry.is_effective() && entry.applies_to(key, tenant_id))
			.max_by_key(|entry| entry.updated_at)
	};

	latest(SettingScope::Tenant).or_else(|| latest(SettingScope::Global))
}

/// Raw value of `key` for `tenant_id`, or `{}` when nothing is stored
pub fn resolve_effective_value(
	entries: &[SettingEntry],
	key: &str,
	tenant_id: Option<&TenantId>,
) -> Value {
	select_entry(entries, key, tenant_id)
		.map_or_else(|| Value::Object(Map::new()), |entry| entry.value.clone())
}


// vim: ts=4
