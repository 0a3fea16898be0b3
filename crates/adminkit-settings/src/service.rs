//! Settings service with caching, write validation and typed access

use adminkit_types::entry::{SettingEntry, SettingScope};
use adminkit_types::settings_adapter::SettingsAdapter;
use lru::LruCache;
use serde_json::Value;
use std::num::NonZeroUsize;
use std::sync::Arc;

use crate::group::SettingsGroup;
use crate::groups::GroupValue;
use crate::prelude::*;
use crate::resolve::resolve_effective_value;

const FALLBACK_CACHE_SIZE: NonZeroUsize = match NonZeroUsize::new(100) {
	Some(size) => size,
	None => NonZeroUsize::MIN,
};

type CacheKey = (String, Option<TenantId>);

struct CacheState {
	values: LruCache<CacheKey, Value>,
	generation: u64,
}

/// LRU cache of resolved raw values.
///
/// Every `clear` starts a new generation. A value read from the store
/// under an older generation is not cached.
pub struct SettingsCache {
	state: parking_lot::RwLock<CacheState>,
}

impl SettingsCache {
	/// A capacity of 0 falls back to 100 entries
	pub fn new(capacity: usize) -> Self {
		let capacity = NonZeroUsize::new(capacity).unwrap_or(FALLBACK_CACHE_SIZE);
		let state = CacheState { values: LruCache::new(capacity), generation: 0 };
		Self { state: parking_lot::RwLock::new(state) }
	}

	pub fn get(&self, key: &str, tenant_id: Option<&TenantId>) -> Option<Value> {
		let mut state = self.state.write();
		state.values.get(&(key.to_owned(), tenant_id.cloned())).cloned()
	}

	pub fn put(&self, key: &str, tenant_id: Option<&TenantId>, value: Value) {
		let mut state = self.state.write();
		state.values.put((key.to_owned(), tenant_id.cloned()), value);
	}

	pub fn generation(&self) -> u64 {
		self.state.read().generation
	}

	/// Store `value` unless the cache was cleared since `generation`
	pub fn put_if_current(
		&self,
		key: &str,
		tenant_id: Option<&TenantId>,
		value: Value,
		generation: u64,
	) -> bool {
		let mut state = self.state.write();
		if state.generation != generation {
			return false;
		}
		state.values.put((key.to_owned(), tenant_id.cloned()), value);
		true
	}

	/// Drop every cached value
	pub fn clear(&self) {
		let mut state = self.state.write();
		state.values.clear();
		state.generation = state.generation.wrapping_add(1);
	}
}

impl std::fmt::Debug for SettingsCache {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SettingsCache").field("len", &self.state.read().values.len()).finish()
	}
}

/// Settings service - reads resolved groups and writes validated entries
#[derive(Debug)]
pub struct SettingsService {
	adapter: Arc<dyn SettingsAdapter>,
	cache: SettingsCache,
}

impl SettingsService {
	pub fn new(adapter: Arc<dyn SettingsAdapter>, cache_size: usize) -> Self {
		Self { adapter, cache: SettingsCache::new(cache_size) }
	}

	/// Raw stored value of `key` with tenant -> global -> `{}` resolution
	pub async fn effective_value(
		&self,
		key: &str,
		tenant_id: Option<&TenantId>,
	) -> AkResult<Value> {
		if let Some(value) = self.cache.get(key, tenant_id) {
			debug!("Settings cache hit: {} ({:?})", key, tenant_id.map(TenantId::as_str));
			return Ok(value);
		}

		let generation = self.cache.generation();
		let entries = self.adapter.list_entries(key, tenant_id).await?;
		let value = resolve_effective_value(&entries, key, tenant_id);
		if !self.cache.put_if_current(key, tenant_id, value.clone(), generation) {
			debug!("Settings changed while reading {}, not caching", key);
		}
		Ok(value)
	}

	/// Typed group for `tenant_id`. Never fails on malformed stored data.
	pub async fn get<G: SettingsGroup>(&self, tenant_id: Option<&TenantId>) -> AkResult<G> {
		let raw = self.effective_value(G::KEY, tenant_id).await?;
		Ok(G::project(&raw))
	}

	/// Group stored under `key`, for callers that only know the key at runtime
	pub async fn get_group(
		&self,
		key: &str,
		tenant_id: Option<&TenantId>,
	) -> AkResult<GroupValue> {
		if !GroupValue::KEYS.contains(&key) {
			return Err(Error::NotFound);
		}
		let raw = self.effective_value(key, tenant_id).await?;
		GroupValue::project(key, &raw).ok_or(Error::NotFound)
	}

	/// Keys with a stored entry visible to `tenant_id`
	pub async fn list_keys(&self, tenant_id: Option<&TenantId>) -> AkResult<Vec<String>> {
		self.adapter.list_keys(tenant_id).await
	}

	/// Validate and write entries. The cache is dropped after the writes.
	pub async fn upsert_entries(&self, entries: Vec<SettingEntry>) -> AkResult<()> {
		let mut checked = Vec::with_capacity(entries.len());
		for mut entry in entries {
			if entry.key.trim().is_empty() {
				warn!("Rejected settings entry without a key");
				return Err(Error::ValidationError("setting key must not be empty".into()));
			}
			match entry.scope {
				SettingScope::Tenant if entry.tenant_id.is_none() => {
					warn!("Rejected TENANT entry for '{}' without a tenant", entry.key);
					return Err(Error::ValidationError(format!(
						"TENANT entry for '{}' needs a tenantId",
						entry.key
					)));
				}
				SettingScope::Global => entry.tenant_id = None,
				SettingScope::Tenant => {}
			}
			checked.push(entry);
		}

		let written = checked.len();
		let result = async {
			for entry in checked {
				info!(
					"Writing settings entry {} ({} {:?})",
					entry.key,
					entry.scope,
					entry.tenant_id.as_ref().map(TenantId::as_str)
				);
				self.adapter.upsert_entry(entry).await?;
			}
			Ok::<(), Error>(())
		}
		.await;

		self.cache.clear();
		debug!("Settings cache cleared after {} entries", written);
		result
	}

	/// Store `group` at the scope given by `tenant_id` and return the value as read back
	pub async fn save<G: SettingsGroup>(
		&self,
		group: &G,
		tenant_id: Option<&TenantId>,
	) -> AkResult<G> {
		let entries = group
			.to_entries()
			.into_iter()
			.map(|entry| entry.with_tenant(tenant_id.cloned()))
			.collect();
		self.upsert_entries(entries).await?;
		self.get::<G>(tenant_id).await
	}

	/// Store any group value, see [`Self::save`]
	pub async fn save_group(
		&self,
		group: &GroupValue,
		tenant_id: Option<&TenantId>,
	) -> AkResult<GroupValue> {
		let entries = group
			.to_entries()
			.into_iter()
			.map(|entry| entry.with_tenant(tenant_id.cloned()))
			.collect();
		self.upsert_entries(entries).await?;
		self.get_group(group.key(), tenant_id).await
	}

	/// Remove the stored value of `G` at one scope, so reads fall back to the next level.
	/// Returns `false` if nothing was stored there.
	pub async fn reset<G: SettingsGroup>(&self, tenant_id: Option<&TenantId>) -> AkResult<bool> {
		let scope = if tenant_id.is_some() { SettingScope::Tenant } else { SettingScope::Global };
		let removed = self.adapter.delete_entry(G::KEY, scope, tenant_id).await?;
		self.cache.clear();
		if removed {
			info!("Reset settings group {} ({})", G::KEY, scope);
		}
		Ok(removed)
	}
}


// vim: ts=4
