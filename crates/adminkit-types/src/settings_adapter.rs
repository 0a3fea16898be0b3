//! Adapter that stores raw settings entries.
//!
//! The store only persists and lists entries. Picking the effective entry for
//! a tenant and turning it into a typed group happens above this trait.

use async_trait::async_trait;
use std::fmt::Debug;

use crate::entry::{SettingEntry, SettingScope};
use crate::prelude::*;

#[async_trait]
pub trait SettingsAdapter: Debug + Send + Sync {
	/// All `GLOBAL` entries for `key` plus the `TENANT` entries for `(key, tenant_id)`,
	/// oldest write first. Inactive entries are included.
	async fn list_entries(
		&self,
		key: &str,
		tenant_id: Option<&TenantId>,
	) -> AkResult<Vec<SettingEntry>>;

	/// Insert or replace the entry identified by `(key, scope, tenant_id)`.
	/// The adapter stamps `updated_at`.
	async fn upsert_entry(&self, entry: SettingEntry) -> AkResult<()>;

	/// Remove the entry identified by `(key, scope, tenant_id)`.
	/// Returns `false` if there was nothing to remove.
	async fn delete_entry(
		&self,
		key: &str,
		scope: SettingScope,
		tenant_id: Option<&TenantId>,
	) -> AkResult<bool>;

	/// Distinct keys with a `GLOBAL` entry or a `TENANT` entry for `tenant_id`
	async fn list_keys(&self, tenant_id: Option<&TenantId>) -> AkResult<Vec<String>>;
}

// vim: ts=4
