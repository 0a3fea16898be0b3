//! Currency and date formatting for the Adminkit console.
//!
//! Invoice rendering and the UI both format through [`Formatter`], so an
//! amount or date looks the same on a PDF and on screen for a given tenant.

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

pub mod currency;
pub mod date;

use adminkit_settings::groups::{CurrencySettings, SystemSettings};
use adminkit_settings::SettingsService;
use adminkit_types::prelude::*;

pub use currency::format_currency;
pub use date::{format_date, DateInput};

/// Formatting preferences of one tenant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Formatter {
	pub currency: Option<CurrencySettings>,
	pub system: Option<SystemSettings>,
}

impl Formatter {
	pub fn new(currency: Option<CurrencySettings>, system: Option<SystemSettings>) -> Self {
		Self { currency, system }
	}

	/// Resolve the currency and system groups of `tenant_id`
	pub async fn load(service: &SettingsService, tenant_id: Option<&TenantId>) -> AkResult<Self> {
		let currency = service.get::<CurrencySettings>(tenant_id).await?;
		let system = service.get::<SystemSettings>(tenant_id).await?;
		debug!(
			"Loaded formatter for {:?}: currency={} date={}",
			tenant_id.map(TenantId::as_str),
			currency.default_currency_code,
			system.date_format
		);
		Ok(Self { currency: Some(currency), system: Some(system) })
	}

	/// Amount in minor units, see [`format_currency`]
	pub fn currency(&self, amount_minor: i64, currency_code: Option<&str>) -> String {
		format_currency(amount_minor, currency_code, self.currency.as_ref())
	}

	/// See [`format_date`]
	pub fn date(&self, input: impl Into<DateInput>) -> String {
		format_date(input, self.system.as_ref())
	}
}

// vim: ts=4
