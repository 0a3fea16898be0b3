//! End-to-end formatting cases for invoices and UI display

use adminkit_format::{format_currency, format_date, Formatter};
use adminkit_settings::groups::currency::{
	DecimalSeparator, SymbolMode, SymbolPosition, SymbolSpace, ThousandSeparator,
};
use adminkit_settings::groups::{CurrencySettings, SystemSettings};
use adminkit_settings::{MemorySettingsAdapter, SettingsGroup, SettingsService};
use adminkit_types::entry::SettingEntry;
use adminkit_types::types::TenantId;
use chrono::{NaiveDate, TimeZone, Utc};
use serde_json::json;
use std::sync::Arc;

fn western() -> CurrencySettings {
	CurrencySettings {
		thousand_separator: ThousandSeparator::Comma,
		currency_symbol_space: SymbolSpace::Without,
		..CurrencySettings::defaults()
	}
}

fn system(date_format: &str) -> SystemSettings {
	SystemSettings { date_format: date_format.into(), ..SystemSettings::defaults() }
}

// Currency //
//**********//

#[test]
fn test_western_grouping() {
	assert_eq!(format_currency(123_456_789, Some("USD"), Some(&western())), "$1,234,567.89");
	assert_eq!(format_currency(99, Some("USD"), Some(&western())), "$0.99");
	assert_eq!(format_currency(0, Some("USD"), Some(&western())), "$0.00");
}

#[test]
fn test_indian_grouping() {
	assert_eq!(format_currency(123_456_789, Some("INR"), Some(&western())), "₹12,34,567.89");
	assert_eq!(format_currency(10_000_000, Some("inr"), Some(&western())), "₹1,00,000.00");
}

#[test]
fn test_sign_is_emitted_once() {
	let defaults = CurrencySettings::defaults();
	assert_eq!(format_currency(-500, Some("USD"), Some(&defaults)), "-$ 5.00");
	assert_eq!(format_currency(-123_456_789, Some("USD"), Some(&western())), "-$1,234,567.89");

	let post = CurrencySettings { currency_symbol_position: SymbolPosition::Post, ..western() };
	assert_eq!(format_currency(-500, Some("EUR"), Some(&post)), "-5.00€");
}

#[test]
fn test_without_settings() {
	assert_eq!(format_currency(999, None, None), "USD 9.99");
	assert_eq!(format_currency(999, Some("INR"), None), "₹9.99");
	assert_eq!(format_currency(-999, Some("gbp"), None), "GBP -9.99");
	assert_eq!(format_currency(123_456_789, Some("EUR"), None), "EUR 1234567.89");
}

#[test]
fn test_post_position_with_name() {
	let settings = CurrencySettings {
		decimal_separator: DecimalSeparator::Comma,
		thousand_separator: ThousandSeparator::Space,
		currency_symbol_position: SymbolPosition::Post,
		currency_symbol_mode: SymbolMode::Name,
		..CurrencySettings::defaults()
	};
	assert_eq!(format_currency(123_456, Some("eur"), Some(&settings)), "1 234,56 EUR");
}

#[test]
fn test_no_thousands_separator() {
	let settings = CurrencySettings { thousand_separator: ThousandSeparator::None, ..western() };
	assert_eq!(format_currency(123_456_789, Some("USD"), Some(&settings)), "$1234567.89");
	assert_eq!(format_currency(123_456_789, Some("INR"), Some(&settings)), "₹1234567.89");
}

#[test]
fn test_fraction_digits_from_decimal_format() {
	let three = CurrencySettings { decimal_format: "0.000".into(), ..western() };
	assert_eq!(format_currency(1234, Some("USD"), Some(&three)), "$12.340");

	let one = CurrencySettings { decimal_format: "0,0".into(), ..western() };
	assert_eq!(format_currency(1249, Some("USD"), Some(&one)), "$12.5");
	assert_eq!(format_currency(1244, Some("USD"), Some(&one)), "$12.4");
	assert_eq!(format_currency(99_995, Some("USD"), Some(&one)), "$1,000.0");
	// The sign follows the amount, even when it rounds to zero
	assert_eq!(format_currency(-1, Some("USD"), Some(&one)), "-$0.0");
}

#[test]
fn test_currency_code_fallbacks() {
	let settings = CurrencySettings { default_currency_code: "inr".into(), ..western() };
	assert_eq!(format_currency(123_456_789, None, Some(&settings)), "₹12,34,567.89");
	assert_eq!(format_currency(100, Some(""), Some(&settings)), "₹1.00");
	assert_eq!(format_currency(100, Some("chf"), Some(&settings)), "CHF1.00");
	assert_eq!(format_currency(100, None, Some(&western())), "$1.00");
}

#[test]
fn test_extreme_amounts() {
	assert_eq!(
		format_currency(i64::MIN, Some("USD"), Some(&western())),
		"-$92,233,720,368,547,758.08"
	);
	assert_eq!(format_currency(i64::MAX, None, None), "USD 92233720368547758.07");
}

// Dates //
//*******//

#[test]
fn test_date_pattern_dispatch() {
	assert_eq!(format_date("2024-01-05", Some(&system("DD-MM-YYYY"))), "05-01-2024");
	assert_eq!(format_date("2024-01-05", Some(&system("YYYY/MM/DD"))), "2024/01/05");
	assert_eq!(format_date("2024-01-05", Some(&system("YYYY/DD/MM"))), "2024/05/01");
	assert_eq!(format_date("2024-01-05", Some(&system("mm.dd.yyyy"))), "01.05.2024");
	assert_eq!(format_date("2024-01-05", Some(&system(" DD MM YYYY "))), "05 01 2024");
	assert_eq!(format_date("2024-01-05", Some(&system("DDMMYYYY"))), "05/01/2024");
	assert_eq!(format_date("2024-01-05", Some(&system("YYYY-MM-DD"))), "2024-01-05");
}

#[test]
fn test_date_separator_priority() {
	// '/' is preferred over '-' wherever it appears in the pattern
	assert_eq!(format_date("2024-01-05", Some(&system("DD-MM/YYYY"))), "05/01/2024");
	assert_eq!(format_date("2024-01-05", Some(&system("YYYY-MM/DD"))), "2024/05/01");
}

#[test]
fn test_date_fallbacks() {
	assert_eq!(format_date("not-a-date", Some(&system("DD-MM-YYYY"))), "");
	assert_eq!(format_date("not-a-date", None), "");
	assert_eq!(format_date("2024-01-05", None), "5 Jan 2024");
	assert_eq!(format_date("2024-01-05", Some(&system(""))), "5 Jan 2024");
	assert_eq!(format_date("2024-09-15", Some(&system("Q1 YYYY"))), "15 Sept 2024");
}

#[test]
fn test_date_inputs() {
	let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
	let settings = system("DD/MM/YYYY");
	assert_eq!(format_date(date, Some(&settings)), "09/03/2024");
	assert_eq!(format_date(date.and_hms_opt(23, 59, 0).unwrap(), Some(&settings)), "09/03/2024");
	let utc = Utc.with_ymd_and_hms(2024, 3, 9, 0, 30, 0).unwrap();
	assert_eq!(format_date(utc, Some(&settings)), "09/03/2024");
	assert_eq!(format_date("2024-03-09T01:00:00+02:00", Some(&settings)), "08/03/2024");
}

#[test]
fn test_partial_date_strings() {
	let settings = system("DD-MM-YYYY");
	assert_eq!(format_date("2024-01-05T10:20", Some(&settings)), "05-01-2024");
	assert_eq!(format_date("2024-01-05T10:20Z", Some(&settings)), "05-01-2024");
	assert_eq!(format_date("2024/01/05", Some(&settings)), "05-01-2024");
	assert_eq!(format_date("2024-01", Some(&settings)), "01-01-2024");
	assert_eq!(format_date("2024", Some(&settings)), "01-01-2024");
	assert_eq!(format_date("2024-13", Some(&settings)), "");
}

// Formatter //
//***********//

#[tokio::test]
async fn test_formatter_loads_tenant_settings() {
	let t1 = TenantId::new("t1");
	let adapter = Arc::new(MemorySettingsAdapter::with_entries(vec![
		SettingEntry::global("currency.settings", json!({ "thousandSeparator": "comma" })),
		SettingEntry::tenant(
			"currency.settings",
			t1.clone(),
			json!({ "defaultCurrencyCode": "INR", "thousandSeparator": "comma" }),
		),
		SettingEntry::tenant("system.settings", t1.clone(), json!({ "dateFormat": "DD-MM-YYYY" })),
	]));
	let service = SettingsService::new(adapter, 8);

	let formatter = Formatter::load(&service, Some(&t1)).await.unwrap();
	assert_eq!(formatter.currency(123_456_789, None), "₹ 12,34,567.89");
	assert_eq!(formatter.date("2024-01-05"), "05-01-2024");

	let formatter = Formatter::load(&service, None).await.unwrap();
	assert_eq!(formatter.currency(123_456_789, None), "$ 1,234,567.89");
	assert_eq!(formatter.date("2024-01-05"), "2024-01-05");
}

#[test]
fn test_formatter_without_settings() {
	let formatter = Formatter::default();
	assert_eq!(formatter.currency(999, Some("INR")), "₹9.99");
	assert_eq!(formatter.date("2024-01-05"), "5 Jan 2024");
}

// vim: ts=4
