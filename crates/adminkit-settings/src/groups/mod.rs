//! All settings groups known to the console, and a tagged union over them

use adminkit_types::entry::SettingEntry;
use serde::Serialize;
use serde_json::Value;

use crate::group::SettingsGroup;

pub mod commerce;
pub mod currency;
pub mod messaging;
pub mod security;
pub mod site;
pub mod ui;

pub use commerce::{PaymentGateway, PaymentSettings, ReferralSettings, ReportsSettings};
pub use currency::CurrencySettings;
pub use messaging::{
	CalendarSettings, EmailSettings, IntegrationSettings, NotificationSettings, WebhookSettings,
};
pub use security::IpRestrictionSettings;
pub use site::{
	ApplicationSettings, BasicSettings, BrandingSettings, PagesSettings, SeoSettings,
	SystemSettings,
};
pub use ui::{UiColorsCategories, UiColorsDark, UiColorsLight, UiToggles, UiTypography};

macro_rules! group_value {
	($($variant:ident($group:ty)),+ $(,)?) => {
		/// A projected group of any kind, tagged by its storage key
		#[allow(clippy::large_enum_variant)]
		#[derive(Debug, Clone, PartialEq, Serialize)]
		#[serde(untagged)]
		pub enum GroupValue {
			$( $variant($group), )+
		}

		impl GroupValue {
			/// Storage keys of every known group
			pub const KEYS: &'static [&'static str] = &[$( <$group as SettingsGroup>::KEY ),+];

			/// Project a stored blob for `key`. `None` if no group uses that key.
			pub fn project(key: &str, raw: &Value) -> Option<Self> {
				$(
					if key == <$group as SettingsGroup>::KEY {
						return Some(Self::$variant(<$group as SettingsGroup>::project(raw)));
					}
				)+
				None
			}

			/// Defaults of the group stored under `key`
			pub fn defaults(key: &str) -> Option<Self> {
				Self::project(key, &Value::Null)
			}

			pub fn key(&self) -> &'static str {
				match self {
					$( Self::$variant(_) => <$group as SettingsGroup>::KEY, )+
				}
			}

			pub fn to_value(&self) -> Value {
				match self {
					$( Self::$variant(group) => group.to_value(), )+
				}
			}

			pub fn to_entries(&self) -> Vec<SettingEntry> {
				match self {
					$( Self::$variant(group) => group.to_entries(), )+
				}
			}
		}

		$(
			impl From<$group> for GroupValue {
				fn from(group: $group) -> Self {
					Self::$variant(group)
				}
			}
		)+
	};
}

group_value! {
	Basic(BasicSettings),
	Application(ApplicationSettings),
	System(SystemSettings),
	Branding(BrandingSettings),
	Pages(PagesSettings),
	Currency(CurrencySettings),
	Seo(SeoSettings),
	Email(EmailSettings),
	Referral(ReferralSettings),
	Reports(ReportsSettings),
	Payment(PaymentSettings),
	Integration(IntegrationSettings),
	Notification(NotificationSettings),
	Calendar(CalendarSettings),
	Webhook(WebhookSettings),
	IpRestriction(IpRestrictionSettings),
	UiToggles(UiToggles),
	UiColorsLight(UiColorsLight),
	UiColorsDark(UiColorsDark),
	UiColorsCategories(UiColorsCategories),
	UiTypography(UiTypography),
}


// vim: ts=4
