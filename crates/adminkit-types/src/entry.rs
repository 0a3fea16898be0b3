//! Raw settings entries as kept by a settings store.
//!
//! A group is stored as one JSON blob under a dot-namespaced key
//! (e.g. `currency.settings`), either platform-wide (`GLOBAL`) or as an
//! override for a single tenant (`TENANT`).

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::types::{TenantId, Timestamp};

/// Where a stored entry applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettingScope {
	/// Platform-wide value, used by every tenant without an override
	#[serde(rename = "GLOBAL")]
	Global,
	/// Override for one tenant
	#[serde(rename = "TENANT")]
	Tenant,
}

impl SettingScope {
	pub fn as_str(self) -> &'static str {
		match self {
			SettingScope::Global => "GLOBAL",
			SettingScope::Tenant => "TENANT",
		}
	}
}

impl std::fmt::Display for SettingScope {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One stored settings blob
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingEntry {
	pub key: String,
	pub scope: SettingScope,
	/// Required for `TENANT` entries, ignored for `GLOBAL` ones
	pub tenant_id: Option<TenantId>,
	/// Carried through untouched, not used for resolution
	pub locale: Option<String>,
	pub value: serde_json::Value,
	pub is_active: Option<bool>,
	#[serde(default)]
	pub updated_at: Timestamp,
}

impl SettingEntry {
	/// Create an active platform-wide entry
	pub fn global(key: impl Into<String>, value: serde_json::Value) -> Self {
		Self {
			key: key.into(),
			scope: SettingScope::Global,
			tenant_id: None,
			locale: None,
			value,
			is_active: None,
			updated_at: Timestamp::default(),
		}
	}

	/// Create an active override for one tenant
	pub fn tenant(key: impl Into<String>, tenant_id: TenantId, value: serde_json::Value) -> Self {
		Self {
			key: key.into(),
			scope: SettingScope::Tenant,
			tenant_id: Some(tenant_id),
			locale: None,
			value,
			is_active: None,
			updated_at: Timestamp::default(),
		}
	}

	/// Retarget this entry to a scope. `None` means platform-wide.
	pub fn with_tenant(mut self, tenant_id: Option<TenantId>) -> Self {
		self.scope = if tenant_id.is_some() { SettingScope::Tenant } else { SettingScope::Global };
		self.tenant_id = tenant_id;
		self
	}

	pub fn with_updated_at(mut self, updated_at: Timestamp) -> Self {
		self.updated_at = updated_at;
		self
	}

	/// Inactive entries are treated as absent
	pub fn is_effective(&self) -> bool {
		self.is_active != Some(false)
	}

	/// Whether this entry is a candidate for `key` as seen by `tenant_id`
	pub fn applies_to(&self, key: &str, tenant_id: Option<&TenantId>) -> bool {
		if self.key != key {
			return false;
		}
		match self.scope {
			SettingScope::Global => true,
			SettingScope::Tenant => {
				tenant_id.is_some() && self.tenant_id.as_ref() == tenant_id
			}
		}
	}
}


// vim: ts=4
