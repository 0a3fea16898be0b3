//! Database schema initialization

use sqlx::SqlitePool;

/// Create the settings table if it does not exist yet
pub(crate) async fn init_db(db: &SqlitePool) -> Result<(), sqlx::Error> {
	let mut tx = db.begin().await?;

	// Settings
	//**********
	// `scope` is 'G' (global) or 'T' (tenant). Global rows keep an empty
	// tenant_id so the primary key identifies them.
	sqlx::query(
		"CREATE TABLE IF NOT EXISTS settings (
		key text NOT NULL,
		scope char(1) NOT NULL,
		tenant_id text NOT NULL DEFAULT '',
		locale text,
		value text,
		active boolean,
		updated_at integer NOT NULL DEFAULT (unixepoch()),
		PRIMARY KEY(key, scope, tenant_id)
	)",
	)
	.execute(&mut *tx)
	.await?;
	sqlx::query("CREATE INDEX IF NOT EXISTS idx_settings_tenant ON settings(tenant_id, key)")
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;

	Ok(())
}

// vim: ts=4
