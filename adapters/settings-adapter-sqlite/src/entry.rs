//! Settings entry storage
//!
//! Each row holds one group blob as JSON text. Values that no longer parse
//! are read back as `null` so a damaged row degrades to defaults.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use adminkit_types::entry::{SettingEntry, SettingScope};
use adminkit_types::prelude::*;

fn scope_code(scope: SettingScope) -> &'static str {
	match scope {
		SettingScope::Global => "G",
		SettingScope::Tenant => "T",
	}
}

/// Value of the `tenant_id` column for an entry slot
fn tenant_slot(scope: SettingScope, tenant_id: Option<&TenantId>) -> AkResult<&str> {
	match (scope, tenant_id) {
		(SettingScope::Global, _) => Ok(""),
		(SettingScope::Tenant, Some(tenant_id)) => Ok(tenant_id.as_str()),
		(SettingScope::Tenant, None) => {
			Err(Error::ValidationError("tenant entry without tenant id".into()))
		}
	}
}

fn read_row(row: &SqliteRow) -> Result<SettingEntry, sqlx::Error> {
	let scope = match row.try_get::<&str, _>("scope")? {
		"G" => SettingScope::Global,
		"T" => SettingScope::Tenant,
		other => {
			return Err(sqlx::Error::Decode(format!("unknown settings scope '{}'", other).into()));
		}
	};
	let tenant_id: String = row.try_get("tenant_id")?;
	let value: Option<String> = row.try_get("value")?;

	Ok(SettingEntry {
		key: row.try_get("key")?,
		scope,
		tenant_id: (scope == SettingScope::Tenant).then(|| TenantId::new(tenant_id)),
		locale: row.try_get("locale")?,
		value: value
			.and_then(|v| serde_json::from_str(&v).ok())
			.unwrap_or(serde_json::Value::Null),
		is_active: row.try_get("active")?,
		updated_at: Timestamp(row.try_get("updated_at")?),
	})
}

/// Global entries of `key` and the tenant entries of `(key, tenant_id)`
pub(crate) async fn list(
	db: &SqlitePool,
	key: &str,
	tenant_id: Option<&TenantId>,
) -> AkResult<Vec<SettingEntry>> {
	let rows = sqlx::query(
		"SELECT key, scope, tenant_id, locale, value, active, updated_at FROM settings
		WHERE key = ? AND (scope = 'G' OR (scope = 'T' AND tenant_id = ?))
		ORDER BY updated_at, rowid",
	)
	.bind(key)
	.bind(tenant_id.map(TenantId::as_str))
	.fetch_all(db)
	.await
	.inspect_err(|err| warn!("DB: {:#?}", err))
	.map_err(|_| Error::DbError)?;

	rows.iter()
		.map(|row| {
			read_row(row).inspect_err(|err| warn!("DB: {:#?}", err)).map_err(|_| Error::DbError)
		})
		.collect()
}

/// Insert or replace the entry in its `(key, scope, tenant_id)` slot
pub(crate) async fn upsert(db: &SqlitePool, entry: &SettingEntry) -> AkResult<()> {
	let tenant = tenant_slot(entry.scope, entry.tenant_id.as_ref())?;
	sqlx::query(
		"INSERT INTO settings (key, scope, tenant_id, locale, value, active, updated_at)
		VALUES (?, ?, ?, ?, ?, ?, ?)
		ON CONFLICT(key, scope, tenant_id) DO UPDATE SET
			locale = excluded.locale,
			value = excluded.value,
			active = excluded.active,
			updated_at = excluded.updated_at",
	)
	.bind(&entry.key)
	.bind(scope_code(entry.scope))
	.bind(tenant)
	.bind(entry.locale.as_deref())
	.bind(entry.value.to_string())
	.bind(entry.is_active)
	.bind(entry.updated_at.0)
	.execute(db)
	.await
	.inspect_err(|err| warn!("DB: {:#?}", err))
	.map_err(|_| Error::DbError)?;

	Ok(())
}

pub(crate) async fn delete(
	db: &SqlitePool,
	key: &str,
	scope: SettingScope,
	tenant_id: Option<&TenantId>,
) -> AkResult<bool> {
	let tenant = tenant_slot(scope, tenant_id)?;
	let res = sqlx::query("DELETE FROM settings WHERE key = ? AND scope = ? AND tenant_id = ?")
		.bind(key)
		.bind(scope_code(scope))
		.bind(tenant)
		.execute(db)
		.await
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)?;

	Ok(res.rows_affected() > 0)
}

pub(crate) async fn list_keys(db: &SqlitePool, tenant_id: Option<&TenantId>) -> AkResult<Vec<String>> {
	let rows = sqlx::query(
		"SELECT DISTINCT key FROM settings
		WHERE scope = 'G' OR (scope = 'T' AND tenant_id = ?)
		ORDER BY key",
	)
	.bind(tenant_id.map(TenantId::as_str))
	.fetch_all(db)
	.await
	.inspect_err(|err| warn!("DB: {:#?}", err))
	.map_err(|_| Error::DbError)?;

	rows.iter()
		.map(|row| row.try_get::<String, _>("key"))
		.collect::<Result<Vec<_>, _>>()
		.inspect_err(|err| warn!("DB: {:#?}", err))
		.map_err(|_| Error::DbError)
}

// vim: ts=4
