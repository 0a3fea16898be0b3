//! Site identity, localisation defaults and page wiring

use serde::Serialize;

use crate::fields::Fields;
use crate::group::SettingsGroup;
use crate::schema::FieldSpec;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasicSettings {
	pub site_title: String,
	pub site_tag_line: String,
	pub footer_copyright: String,
	pub site_logo: String,
	pub site_white_logo: String,
	pub site_favicon: String,
}

impl SettingsGroup for BasicSettings {
	const KEY: &'static str = "basic.settings";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::text("siteTitle"),
		FieldSpec::text("siteTagLine"),
		FieldSpec::text("footerCopyright"),
		FieldSpec::text("siteLogo"),
		FieldSpec::text("siteWhiteLogo"),
		FieldSpec::text("siteFavicon"),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			site_title: fields.text("siteTitle"),
			site_tag_line: fields.text("siteTagLine"),
			footer_copyright: fields.text("footerCopyright"),
			site_logo: fields.text("siteLogo"),
			site_white_logo: fields.text("siteWhiteLogo"),
			site_favicon: fields.text("siteFavicon"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSettings {
	pub app_name: String,
	pub app_timezone: String,
	pub is_live_server: bool,
	pub app_debug: bool,
	/// Days before a subscription ends when the expiry banner shows up
	pub subscription_expiry_warning_days: i64,
}

impl SettingsGroup for ApplicationSettings {
	const KEY: &'static str = "application.settings";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::text("appName"),
		FieldSpec::text_or("appTimezone", "UTC"),
		FieldSpec::flag("isLiveServer"),
		FieldSpec::flag("appDebug"),
		FieldSpec::integer("subscriptionExpiryWarningDays", 3),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			app_name: fields.text("appName"),
			app_timezone: fields.text("appTimezone"),
			is_live_server: fields.flag("isLiveServer"),
			app_debug: fields.flag("appDebug"),
			subscription_expiry_warning_days: fields.integer("subscriptionExpiryWarningDays"),
		}
	}
}

/// Locale and calendar defaults. `date_format` drives the date formatter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
	pub default_language: String,
	pub date_format: String,
	pub time_format: String,
	pub calendar_start_day: String,
	pub default_timezone: String,
}

impl SettingsGroup for SystemSettings {
	const KEY: &'static str = "system.settings";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::text_or("defaultLanguage", "en"),
		FieldSpec::text_or("dateFormat", "YYYY-MM-DD"),
		FieldSpec::text_or("timeFormat", "HH:mm"),
		FieldSpec::text_or("calendarStartDay", "monday"),
		FieldSpec::text_or("defaultTimezone", "UTC"),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			default_language: fields.text("defaultLanguage"),
			date_format: fields.text("dateFormat"),
			time_format: fields.text("timeFormat"),
			calendar_start_day: fields.text("calendarStartDay"),
			default_timezone: fields.text("defaultTimezone"),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingSettings {
	pub site_logo: String,
	pub site_white_logo: String,
	pub favicon: String,
	pub logo_dark: String,
	pub logo_light: String,
	pub brand_favicon: String,
	pub title_text: String,
	pub footer_text: String,
	pub breadcrumb_image_left: String,
	pub breadcrumb_image_right: String,
	pub main_hero_image: String,
}

impl SettingsGroup for BrandingSettings {
	const KEY: &'static str = "branding.settings";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::text("siteLogo"),
		FieldSpec::text("siteWhiteLogo"),
		FieldSpec::text("favicon"),
		FieldSpec::text("logoDark"),
		FieldSpec::text("logoLight"),
		FieldSpec::text("brandFavicon"),
		FieldSpec::text("titleText"),
		FieldSpec::text("footerText"),
		FieldSpec::text("breadcrumbImageLeft"),
		FieldSpec::text("breadcrumbImageRight"),
		FieldSpec::text("mainHeroImage"),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			site_logo: fields.text("siteLogo"),
			site_white_logo: fields.text("siteWhiteLogo"),
			favicon: fields.text("favicon"),
			logo_dark: fields.text("logoDark"),
			logo_light: fields.text("logoLight"),
			brand_favicon: fields.text("brandFavicon"),
			title_text: fields.text("titleText"),
			footer_text: fields.text("footerText"),
			breadcrumb_image_left: fields.text("breadcrumbImageLeft"),
			breadcrumb_image_right: fields.text("breadcrumbImageRight"),
			main_hero_image: fields.text("mainHeroImage"),
		}
	}
}

/// Which CMS pages serve as home and pricing, and page-level layout switches
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagesSettings {
	pub home_page_id: Option<String>,
	pub pricing_page_id: Option<String>,
	pub enable_landing_page: bool,
	pub enable_signup: bool,
	#[serde(rename = "enableRTL")]
	pub enable_rtl: bool,
	pub layout_dark: bool,
	pub sidebar_transparent: bool,
	pub category_wise_sidemenu: bool,
}

impl SettingsGroup for PagesSettings {
	const KEY: &'static str = "pages.settings";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::optional_text("homePageId"),
		FieldSpec::optional_text("pricingPageId"),
		FieldSpec::flag("enableLandingPage"),
		FieldSpec::flag("enableSignup"),
		FieldSpec::flag("enableRTL"),
		FieldSpec::flag("layoutDark"),
		FieldSpec::flag("sidebarTransparent"),
		FieldSpec::flag("categoryWiseSidemenu"),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			home_page_id: fields.optional_text("homePageId"),
			pricing_page_id: fields.optional_text("pricingPageId"),
			enable_landing_page: fields.flag("enableLandingPage"),
			enable_signup: fields.flag("enableSignup"),
			enable_rtl: fields.flag("enableRTL"),
			layout_dark: fields.flag("layoutDark"),
			sidebar_transparent: fields.flag("sidebarTransparent"),
			category_wise_sidemenu: fields.flag("categoryWiseSidemenu"),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoSettings {
	pub meta_title: String,
	pub meta_tags: Vec<String>,
	pub meta_keywords: Vec<String>,
	pub meta_description: String,
	pub og_title: String,
	pub og_description: String,
	pub og_image: String,
	pub canonical_type: Option<String>,
}

impl SettingsGroup for SeoSettings {
	const KEY: &'static str = "seo.settings";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::text("metaTitle"),
		FieldSpec::text_list("metaTags"),
		FieldSpec::text_list("metaKeywords"),
		FieldSpec::text("metaDescription"),
		FieldSpec::text("ogTitle"),
		FieldSpec::text("ogDescription"),
		FieldSpec::text("ogImage"),
		FieldSpec::optional_text("canonicalType"),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			meta_title: fields.text("metaTitle"),
			meta_tags: fields.text_list("metaTags"),
			meta_keywords: fields.text_list("metaKeywords"),
			meta_description: fields.text("metaDescription"),
			og_title: fields.text("ogTitle"),
			og_description: fields.text("ogDescription"),
			og_image: fields.text("ogImage"),
			canonical_type: fields.optional_text("canonicalType"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_system_defaults() {
		let system = SystemSettings::project(&json!({ "dateFormat": 12 }));
		assert_eq!(system.date_format, "YYYY-MM-DD");
		assert_eq!(system.default_language, "en");
		assert_eq!(system.time_format, "HH:mm");
		assert_eq!(system.calendar_start_day, "monday");
	}

	#[test]
	fn test_application_coercion() {
		let app = ApplicationSettings::project(&json!({
			"appName": "Shop",
			"isLiveServer": "false",
			"appDebug": 0,
			"subscriptionExpiryWarningDays": "7",
		}));
		assert_eq!(app.app_name, "Shop");
		assert_eq!(app.app_timezone, "UTC");
		// Any non-empty string is truthy
		assert!(app.is_live_server);
		assert!(!app.app_debug);
		assert_eq!(app.subscription_expiry_warning_days, 7);
	}

	#[test]
	fn test_pages_wire_names() {
		let pages = PagesSettings::project(&json!({ "homePageId": "p1", "enableRTL": 1 }));
		assert_eq!(pages.home_page_id.as_deref(), Some("p1"));
		assert_eq!(pages.pricing_page_id, None);
		assert!(pages.enable_rtl);

		let value = pages.to_value();
		assert_eq!(value["enableRTL"], json!(true));
		assert_eq!(value["pricingPageId"], json!(null));
	}

	#[test]
	fn test_seo_lists() {
		let seo = SeoSettings::project(&json!({ "metaTags": "a,b", "metaKeywords": ["x", 1] }));
		assert!(seo.meta_tags.is_empty());
		assert_eq!(seo.meta_keywords, vec!["x"]);
		assert_eq!(seo.canonical_type, None);
	}
}

// vim: ts=4
