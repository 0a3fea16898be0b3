//! In-process settings store, used when no database is configured and in tests

use adminkit_types::entry::{SettingEntry, SettingScope};
use adminkit_types::settings_adapter::SettingsAdapter;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeSet;

use crate::prelude::*;

#[derive(Debug, Default)]
pub struct MemorySettingsAdapter {
	entries: RwLock<Vec<SettingEntry>>,
}

impl MemorySettingsAdapter {
	pub fn new() -> Self {
		Self::default()
	}

	/// Store pre-built entries as they are, keeping their `updated_at`
	pub fn with_entries(entries: Vec<SettingEntry>) -> Self {
		Self { entries: RwLock::new(entries) }
	}
}

fn same_slot(
	entry: &SettingEntry,
	key: &str,
	scope: SettingScope,
	tenant_id: Option<&TenantId>,
) -> bool {
	entry.key == key
		&& entry.scope == scope
		&& (scope == SettingScope::Global || entry.tenant_id.as_ref() == tenant_id)
}

#[async_trait]
impl SettingsAdapter for MemorySettingsAdapter {
	async fn list_entries(
		&self,
		key: &str,
		tenant_id: Option<&TenantId>,
	) -> AkResult<Vec<SettingEntry>> {
		let entries = self.entries.read();
		Ok(entries.iter().filter(|entry| entry.applies_to(key, tenant_id)).cloned().collect())
	}

	async fn upsert_entry(&self, entry: SettingEntry) -> AkResult<()> {
		let entry = entry.with_updated_at(Timestamp::now());
		let mut entries = self.entries.write();
		entries.retain(|e| !same_slot(e, &entry.key, entry.scope, entry.tenant_id.as_ref()));
		entries.push(entry);
		Ok(())
	}

	async fn delete_entry(
		&self,
		key: &str,
		scope: SettingScope,
		tenant_id: Option<&TenantId>,
	) -> AkResult<bool> {
		let mut entries = self.entries.write();
		let before = entries.len();
		entries.retain(|e| !same_slot(e, key, scope, tenant_id));
		Ok(entries.len() != before)
	}

	async fn list_keys(&self, tenant_id: Option<&TenantId>) -> AkResult<Vec<String>> {
		let entries = self.entries.read();
		let keys: BTreeSet<&str> = entries
			.iter()
			.filter(|entry| entry.applies_to(&entry.key, tenant_id))
			.map(|entry| entry.key.as_str())
			.collect();
		Ok(keys.into_iter().map(str::to_owned).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[tokio::test]
	async fn test_upsert_replaces_slot() {
		let adapter = MemorySettingsAdapter::new();
		let t1 = TenantId::new("t1");
		adapter.upsert_entry(SettingEntry::global("k", json!(1))).await.unwrap();
		adapter.upsert_entry(SettingEntry::global("k", json!(2))).await.unwrap();
		adapter.upsert_entry(SettingEntry::tenant("k", t1.clone(), json!(3))).await.unwrap();

		let entries = adapter.list_entries("k", Some(&t1)).await.unwrap();
		assert_eq!(entries.len(), 2);
		assert_eq!(entries[0].value, json!(2));
		assert_eq!(entries[1].value, json!(3));
		assert!(entries.iter().all(|e| e.updated_at.0 > 0));

		let entries = adapter.list_entries("k", None).await.unwrap();
		assert_eq!(entries.len(), 1);
	}

	#[tokio::test]
	async fn test_delete_and_keys() {
		let t1 = TenantId::new("t1");
		let adapter = MemorySettingsAdapter::with_entries(vec![
			SettingEntry::global("a", json!({})),
			SettingEntry::tenant("b", t1.clone(), json!({})),
		]);
		assert_eq!(adapter.list_keys(None).await.unwrap(), vec!["a"]);
		assert_eq!(adapter.list_keys(Some(&t1)).await.unwrap(), vec!["a", "b"]);

		assert!(!adapter.delete_entry("b", SettingScope::Global, None).await.unwrap());
		assert!(adapter.delete_entry("b", SettingScope::Tenant, Some(&t1)).await.unwrap());
		assert_eq!(adapter.list_keys(Some(&t1)).await.unwrap(), vec!["a"]);
	}
}

// vim: ts=4
