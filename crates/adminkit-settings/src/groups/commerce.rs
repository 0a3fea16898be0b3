//! Payments, referrals and reporting

use serde::Serialize;
use std::collections::BTreeMap;

use crate::fields::Fields;
use crate::group::SettingsGroup;
use crate::schema::FieldSpec;

const GATEWAY_FIELDS: &[FieldSpec] = &[
	FieldSpec::flag("enabled"),
	FieldSpec::text("name"),
	FieldSpec::text("publicKey"),
	FieldSpec::text("secretKey"),
	FieldSpec::text_list("supportedCurrencies"),
	FieldSpec::text("baseCurrency"),
	FieldSpec::flag_map("modules"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentGateway {
	pub enabled: bool,
	pub name: String,
	pub public_key: String,
	pub secret_key: String,
	pub supported_currencies: Vec<String>,
	pub base_currency: String,
	/// Per-module switches. Only an explicit `false` turns a module off.
	pub modules: BTreeMap<String, bool>,
}

impl PaymentGateway {
	pub fn allows_module(&self, module: &str) -> bool {
		self.modules.get(module) != Some(&false)
	}

	fn from_fields(fields: &Fields) -> Self {
		Self {
			enabled: fields.flag("enabled"),
			name: fields.text("name"),
			public_key: fields.text("publicKey"),
			secret_key: fields.text("secretKey"),
			supported_currencies: fields.text_list("supportedCurrencies"),
			base_currency: fields.text("baseCurrency"),
			modules: fields.flag_map("modules"),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSettings {
	pub enable_payments: bool,
	/// Gateways by lower-case name (`stripe`, `paypal`, ...)
	pub gateways: BTreeMap<String, PaymentGateway>,
}

impl PaymentSettings {
	/// Gateway used for a payment request. An empty name selects `stripe`.
	///
	/// Returns `None` when payments are switched off, the gateway is
	/// missing or disabled, or it is switched off for `module`.
	pub fn gateway(&self, name: &str, module: Option<&str>) -> Option<&PaymentGateway> {
		if !self.enable_payments {
			return None;
		}
		let name = if name.is_empty() { "stripe".to_owned() } else { name.to_lowercase() };
		self.gateways
			.get(&name)
			.filter(|gateway| gateway.enabled)
			.filter(|gateway| module.is_none_or(|module| gateway.allows_module(module)))
	}
}

impl SettingsGroup for PaymentSettings {
	const KEY: &'static str = "payment.settings";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::flag("enablePayments"),
		FieldSpec::object_map("gateways", GATEWAY_FIELDS),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			enable_payments: fields.flag("enablePayments"),
			gateways: fields
				.object_map("gateways")
				.iter()
				.map(|(name, gateway)| (name.clone(), PaymentGateway::from_fields(gateway)))
				.collect(),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralSettings {
	pub enabled: bool,
	pub commission_percent: f64,
	pub minimum_threshold_amount: f64,
	pub guidelines: String,
}

impl SettingsGroup for ReferralSettings {
	const KEY: &'static str = "referral.settings";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::flag("enabled"),
		FieldSpec::number("commissionPercent", 0.0),
		FieldSpec::number("minimumThresholdAmount", 0.0),
		FieldSpec::text("guidelines"),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			enabled: fields.flag("enabled"),
			commission_percent: fields.number("commissionPercent"),
			minimum_threshold_amount: fields.number("minimumThresholdAmount"),
			guidelines: fields.text("guidelines"),
		}
	}
}

/// Defaults for the admin report filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsSettings {
	/// How many months back the default date range starts
	pub default_start_month_offset: i64,
	pub default_status_filter: Vec<String>,
}

impl SettingsGroup for ReportsSettings {
	const KEY: &'static str = "reports.settings";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::integer("defaultStartMonthOffset", 0),
		FieldSpec::text_list("defaultStatusFilter"),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			default_start_month_offset: fields.integer("defaultStartMonthOffset"),
			default_status_filter: fields.text_list("defaultStatusFilter"),
		}
	}
}


// vim: ts=4
