//! SQLite settings store for the Adminkit console.
//!
//! Global entries and tenant overrides live in a single `settings` table
//! keyed by `(key, scope, tenant_id)`.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

mod entry;
mod schema;

use async_trait::async_trait;
use sqlx::sqlite::{self, SqlitePool};
use std::path::Path;

use adminkit_types::entry::{SettingEntry, SettingScope};
use adminkit_types::prelude::*;
use adminkit_types::settings_adapter::SettingsAdapter;

use crate::schema::init_db;

#[derive(Debug)]
pub struct SettingsAdapterSqlite {
	db: SqlitePool,
}

impl SettingsAdapterSqlite {
	/// Open (or create) the database file at `path`
	pub async fn new(path: impl AsRef<Path>) -> AkResult<Self> {
		let path = path.as_ref();
		if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
			tokio::fs::create_dir_all(dir).await?;
		}

		let opts = sqlite::SqliteConnectOptions::new()
			.filename(path)
			.create_if_missing(true)
			.journal_mode(sqlite::SqliteJournalMode::Wal);
		let db = sqlite::SqlitePoolOptions::new()
			.max_connections(5)
			.connect_with(opts)
			.await
			.inspect_err(|err| error!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		init_db(&db)
			.await
			.inspect_err(|err| error!("DB: {:#?}", err))
			.map_err(|_| Error::DbError)?;

		info!("Settings store opened at {}", path.display());
		Ok(Self { db })
	}
}

#[async_trait]
impl SettingsAdapter for SettingsAdapterSqlite {
	async fn list_entries(
		&self,
		key: &str,
		tenant_id: Option<&TenantId>,
	) -> AkResult<Vec<SettingEntry>> {
		entry::list(&self.db, key, tenant_id).await
	}

	async fn upsert_entry(&self, entry: SettingEntry) -> AkResult<()> {
		let entry = entry.with_updated_at(Timestamp::now());
		entry::upsert(&self.db, &entry).await
	}

	async fn delete_entry(
		&self,
		key: &str,
		scope: SettingScope,
		tenant_id: Option<&TenantId>,
	) -> AkResult<bool> {
		entry::delete(&self.db, key, scope, tenant_id).await
	}

	async fn list_keys(&self, tenant_id: Option<&TenantId>) -> AkResult<Vec<String>> {
		entry::list_keys(&self.db, tenant_id).await
	}
}

// vim: ts=4
