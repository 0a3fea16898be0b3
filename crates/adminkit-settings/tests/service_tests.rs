//! Settings service read and write paths over the in-memory store

use adminkit_settings::groups::currency::{SymbolMode, SymbolPosition};
use adminkit_settings::groups::{CurrencySettings, SystemSettings};
use adminkit_settings::{GroupValue, MemorySettingsAdapter, SettingsGroup, SettingsService};
use adminkit_types::entry::SettingEntry;
use adminkit_types::error::Error;
use adminkit_types::settings_adapter::SettingsAdapter;
use adminkit_types::types::TenantId;
use serde_json::json;
use std::sync::Arc;

fn create_service() -> (SettingsService, Arc<MemorySettingsAdapter>) {
	let _ = tracing_subscriber::fmt().with_test_writer().try_init();
	let adapter = Arc::new(MemorySettingsAdapter::new());
	let service = SettingsService::new(adapter.clone(), 16);
	(service, adapter)
}

#[tokio::test]
async fn test_defaults_when_nothing_stored() {
	let (service, _adapter) = create_service();
	let currency = service.get::<CurrencySettings>(None).await.unwrap();
	assert_eq!(currency, CurrencySettings::defaults());
	assert_eq!(service.effective_value("currency.settings", None).await.unwrap(), json!({}));
}

#[tokio::test]
async fn test_tenant_override_and_isolation() {
	let (service, _adapter) = create_service();
	let t1 = TenantId::new("t1");
	let t2 = TenantId::new("t2");

	service
		.upsert_entries(vec![
			SettingEntry::global("currency.settings", json!({ "currencySymbolMode": "name" })),
			SettingEntry::tenant(
				"currency.settings",
				t1.clone(),
				json!({ "currencySymbolPosition": "post" }),
			),
		])
		.await
		.unwrap();

	// The tenant entry replaces the global one as a whole, it is not merged
	let for_t1 = service.get::<CurrencySettings>(Some(&t1)).await.unwrap();
	assert_eq!(for_t1.currency_symbol_position, SymbolPosition::Post);
	assert_eq!(for_t1.currency_symbol_mode, SymbolMode::Symbol);

	let for_t2 = service.get::<CurrencySettings>(Some(&t2)).await.unwrap();
	assert_eq!(for_t2.currency_symbol_position, SymbolPosition::Pre);
	assert_eq!(for_t2.currency_symbol_mode, SymbolMode::Name);
}

#[tokio::test]
async fn test_upsert_validation() {
	let (service, adapter) = create_service();

	let err = service.upsert_entries(vec![SettingEntry::global("", json!({}))]).await.unwrap_err();
	assert!(matches!(err, Error::ValidationError(_)));

	let mut orphan = SettingEntry::tenant("system.settings", TenantId::new("t1"), json!({}));
	orphan.tenant_id = None;
	let err = service.upsert_entries(vec![orphan]).await.unwrap_err();
	assert!(matches!(err, Error::ValidationError(_)));
	assert!(adapter.list_keys(None).await.unwrap().is_empty());

	// A GLOBAL entry never keeps a tenant id
	let mut global = SettingEntry::global("system.settings", json!({}));
	global.tenant_id = Some(TenantId::new("t1"));
	service.upsert_entries(vec![global]).await.unwrap();
	let stored = adapter.list_entries("system.settings", None).await.unwrap();
	assert_eq!(stored.len(), 1);
	assert!(stored[0].tenant_id.is_none());
}

#[tokio::test]
async fn test_cache_is_invalidated_on_write() {
	let (service, _adapter) = create_service();
	let before = service.get::<SystemSettings>(None).await.unwrap();
	assert_eq!(before.date_format, "YYYY-MM-DD");

	let entry = SettingEntry::global("system.settings", json!({ "dateFormat": "DD/MM/YYYY" }));
	service.upsert_entries(vec![entry]).await.unwrap();
	let after = service.get::<SystemSettings>(None).await.unwrap();
	assert_eq!(after.date_format, "DD/MM/YYYY");
}

#[tokio::test]
async fn test_save_and_reset() {
	let (service, _adapter) = create_service();
	let t1 = TenantId::new("t1");

	let mut global = SystemSettings::defaults();
	global.date_format = "MM/DD/YYYY".into();
	service.save(&global, None).await.unwrap();

	let mut override_t1 = SystemSettings::defaults();
	override_t1.date_format = "DD-MM-YYYY".into();
	let saved = service.save(&override_t1, Some(&t1)).await.unwrap();
	assert_eq!(saved, override_t1);

	assert!(service.reset::<SystemSettings>(Some(&t1)).await.unwrap());
	let system = service.get::<SystemSettings>(Some(&t1)).await.unwrap();
	assert_eq!(system.date_format, "MM/DD/YYYY");

	assert!(!service.reset::<SystemSettings>(Some(&t1)).await.unwrap());
	assert!(service.reset::<SystemSettings>(None).await.unwrap());
	let system = service.get::<SystemSettings>(Some(&t1)).await.unwrap();
	assert_eq!(system, SystemSettings::defaults());
}

#[tokio::test]
async fn test_get_group_by_key() {
	let (service, _adapter) = create_service();
	service
		.upsert_entries(vec![SettingEntry::global("ui.toggles", json!({ "maintenanceMode": 1 }))])
		.await
		.unwrap();

	match service.get_group("ui.toggles", None).await.unwrap() {
		GroupValue::UiToggles(toggles) => assert!(toggles.maintenance_mode),
		other => panic!("unexpected group: {other:?}"),
	}
	assert!(matches!(service.get_group("zoom.settings", None).await, Err(Error::NotFound)));
}

#[tokio::test]
async fn test_save_group() {
	let (service, _adapter) = create_service();
	let t1 = TenantId::new("t1");
	let value = GroupValue::project("seo.settings", &json!({ "metaTitle": "Shop" })).unwrap();
	let saved = service.save_group(&value, Some(&t1)).await.unwrap();
	assert_eq!(saved, value);
	assert_eq!(service.list_keys(Some(&t1)).await.unwrap(), vec!["seo.settings"]);
	assert!(service.list_keys(None).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_store_data_never_fails_reads() {
	let adapter = Arc::new(MemorySettingsAdapter::with_entries(vec![SettingEntry::global(
		"currency.settings",
		json!("not an object"),
	)]));
	let service = SettingsService::new(adapter, 0);
	let currency = service.get::<CurrencySettings>(None).await.unwrap();
	assert_eq!(currency, CurrencySettings::defaults());
}

// vim: ts=4
