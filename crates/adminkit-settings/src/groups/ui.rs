//! Theme switches, palettes and fonts of the public site and admin console

use serde::Serialize;

use crate::fields::Fields;
use crate::group::SettingsGroup;
use crate::schema::FieldSpec;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiToggles {
	pub dark_mode_admin: bool,
	pub sticky_navbar: bool,
	pub admin_nav_sticky: bool,
	pub maintenance_mode: bool,
	pub mouse_cursor_effect: bool,
	pub section_title_extra_design: bool,
	pub language_selector_visible: bool,
	pub backend_preloader_enabled: bool,
	pub payment_gateway_enabled: bool,
	#[serde(rename = "forceSSLRedirect")]
	pub force_ssl_redirect: bool,
	pub require_email_verification: bool,
}

impl SettingsGroup for UiToggles {
	const KEY: &'static str = "ui.toggles";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::flag("darkModeAdmin"),
		FieldSpec::flag("stickyNavbar"),
		FieldSpec::flag("adminNavSticky"),
		FieldSpec::flag("maintenanceMode"),
		FieldSpec::flag("mouseCursorEffect"),
		FieldSpec::flag("sectionTitleExtraDesign"),
		FieldSpec::flag("languageSelectorVisible"),
		FieldSpec::flag("backendPreloaderEnabled"),
		FieldSpec::flag("paymentGatewayEnabled"),
		FieldSpec::flag("forceSSLRedirect"),
		FieldSpec::flag("requireEmailVerification"),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			dark_mode_admin: fields.flag("darkModeAdmin"),
			sticky_navbar: fields.flag("stickyNavbar"),
			admin_nav_sticky: fields.flag("adminNavSticky"),
			maintenance_mode: fields.flag("maintenanceMode"),
			mouse_cursor_effect: fields.flag("mouseCursorEffect"),
			section_title_extra_design: fields.flag("sectionTitleExtraDesign"),
			language_selector_visible: fields.flag("languageSelectorVisible"),
			backend_preloader_enabled: fields.flag("backendPreloaderEnabled"),
			payment_gateway_enabled: fields.flag("paymentGatewayEnabled"),
			force_ssl_redirect: fields.flag("forceSSLRedirect"),
			require_email_verification: fields.flag("requireEmailVerification"),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiColorsLight {
	pub site_main_color1: String,
	pub site_main_color1_rgba: Option<String>,
	pub site_main_color2: String,
	pub site_main_color3: String,
	pub heading_color: String,
	pub heading_color_rgb: Option<String>,
	pub paragraph_color1: String,
	pub paragraph_color2: String,
	pub paragraph_color3: String,
	pub paragraph_color4: String,
}

impl SettingsGroup for UiColorsLight {
	const KEY: &'static str = "ui.colors.light";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::text("siteMainColor1"),
		FieldSpec::optional_text("siteMainColor1Rgba"),
		FieldSpec::text("siteMainColor2"),
		FieldSpec::text("siteMainColor3"),
		FieldSpec::text("headingColor"),
		FieldSpec::optional_text("headingColorRgb"),
		FieldSpec::text("paragraphColor1"),
		FieldSpec::text("paragraphColor2"),
		FieldSpec::text("paragraphColor3"),
		FieldSpec::text("paragraphColor4"),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			site_main_color1: fields.text("siteMainColor1"),
			site_main_color1_rgba: fields.optional_text("siteMainColor1Rgba"),
			site_main_color2: fields.text("siteMainColor2"),
			site_main_color3: fields.text("siteMainColor3"),
			heading_color: fields.text("headingColor"),
			heading_color_rgb: fields.optional_text("headingColorRgb"),
			paragraph_color1: fields.text("paragraphColor1"),
			paragraph_color2: fields.text("paragraphColor2"),
			paragraph_color3: fields.text("paragraphColor3"),
			paragraph_color4: fields.text("paragraphColor4"),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiColorsDark {
	pub background_light_color1: String,
	pub background_light_color2: String,
	pub background_dark_color1: String,
	pub background_dark_color2: String,
	pub secondary_color: String,
	pub base_color2: String,
	pub main_color5: String,
}

impl SettingsGroup for UiColorsDark {
	const KEY: &'static str = "ui.colors.dark";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::text("backgroundLightColor1"),
		FieldSpec::text("backgroundLightColor2"),
		FieldSpec::text("backgroundDarkColor1"),
		FieldSpec::text("backgroundDarkColor2"),
		FieldSpec::text("secondaryColor"),
		FieldSpec::text("baseColor2"),
		FieldSpec::text("mainColor5"),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			background_light_color1: fields.text("backgroundLightColor1"),
			background_light_color2: fields.text("backgroundLightColor2"),
			background_dark_color1: fields.text("backgroundDarkColor1"),
			background_dark_color2: fields.text("backgroundDarkColor2"),
			secondary_color: fields.text("secondaryColor"),
			base_color2: fields.text("baseColor2"),
			main_color5: fields.text("mainColor5"),
		}
	}
}

/// Accent colors of the individual home page templates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiColorsCategories {
	pub portfolio_home_color: String,
	pub logistics_home_color: String,
	pub industry_home_color: String,
	pub construction_home_color: String,
	pub lawyer_home_color: String,
	pub political_home_color: String,
	pub medical_home_color1: String,
	pub medical_home_color2: String,
	pub fruits_home_color: String,
	pub fruits_home_heading_color: String,
	pub portfolio_home_dark_color1: String,
	pub portfolio_home_dark_color2: String,
	pub charity_home_color: String,
	pub design_agency_home_color: String,
	pub cleaning_home_color: String,
	pub cleaning_home_color2: String,
	pub course_home_color: String,
	pub course_home_color2: String,
	pub grocery_home_color: String,
	pub grocery_home_color2: String,
}

impl SettingsGroup for UiColorsCategories {
	const KEY: &'static str = "ui.colors.categories";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::text("portfolioHomeColor"),
		FieldSpec::text("logisticsHomeColor"),
		FieldSpec::text("industryHomeColor"),
		FieldSpec::text("constructionHomeColor"),
		FieldSpec::text("lawyerHomeColor"),
		FieldSpec::text("politicalHomeColor"),
		FieldSpec::text("medicalHomeColor1"),
		FieldSpec::text("medicalHomeColor2"),
		FieldSpec::text("fruitsHomeColor"),
		FieldSpec::text("fruitsHomeHeadingColor"),
		FieldSpec::text("portfolioHomeDarkColor1"),
		FieldSpec::text("portfolioHomeDarkColor2"),
		FieldSpec::text("charityHomeColor"),
		FieldSpec::text("designAgencyHomeColor"),
		FieldSpec::text("cleaningHomeColor"),
		FieldSpec::text("cleaningHomeColor2"),
		FieldSpec::text("courseHomeColor"),
		FieldSpec::text("courseHomeColor2"),
		FieldSpec::text("groceryHomeColor"),
		FieldSpec::text("groceryHomeColor2"),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			portfolio_home_color: fields.text("portfolioHomeColor"),
			logistics_home_color: fields.text("logisticsHomeColor"),
			industry_home_color: fields.text("industryHomeColor"),
			construction_home_color: fields.text("constructionHomeColor"),
			lawyer_home_color: fields.text("lawyerHomeColor"),
			political_home_color: fields.text("politicalHomeColor"),
			medical_home_color1: fields.text("medicalHomeColor1"),
			medical_home_color2: fields.text("medicalHomeColor2"),
			fruits_home_color: fields.text("fruitsHomeColor"),
			fruits_home_heading_color: fields.text("fruitsHomeHeadingColor"),
			portfolio_home_dark_color1: fields.text("portfolioHomeDarkColor1"),
			portfolio_home_dark_color2: fields.text("portfolioHomeDarkColor2"),
			charity_home_color: fields.text("charityHomeColor"),
			design_agency_home_color: fields.text("designAgencyHomeColor"),
			cleaning_home_color: fields.text("cleaningHomeColor"),
			cleaning_home_color2: fields.text("cleaningHomeColor2"),
			course_home_color: fields.text("courseHomeColor"),
			course_home_color2: fields.text("courseHomeColor2"),
			grocery_home_color: fields.text("groceryHomeColor"),
			grocery_home_color2: fields.text("groceryHomeColor2"),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UiTypography {
	pub use_custom_font: bool,
	pub body_font_family: String,
	pub body_font_variants: Vec<String>,
	pub use_heading_font: bool,
	pub heading_font_family: String,
	pub heading_font_variants: Vec<String>,
}

impl SettingsGroup for UiTypography {
	const KEY: &'static str = "ui.typography";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::flag("useCustomFont"),
		FieldSpec::text("bodyFontFamily"),
		FieldSpec::text_list("bodyFontVariants"),
		FieldSpec::flag("useHeadingFont"),
		FieldSpec::text("headingFontFamily"),
		FieldSpec::text_list("headingFontVariants"),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			use_custom_font: fields.flag("useCustomFont"),
			body_font_family: fields.text("bodyFontFamily"),
			body_font_variants: fields.text_list("bodyFontVariants"),
			use_heading_font: fields.flag("useHeadingFont"),
			heading_font_family: fields.text("headingFontFamily"),
			heading_font_variants: fields.text_list("headingFontVariants"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_toggles_wire_names() {
		let toggles = UiToggles::project(&json!({ "forceSSLRedirect": "1", "maintenanceMode": 0 }));
		assert!(toggles.force_ssl_redirect);
		assert!(!toggles.maintenance_mode);
		assert_eq!(toggles.to_value()["forceSSLRedirect"], json!(true));
	}

	#[test]
	fn test_light_optional_colors() {
		let colors = UiColorsLight::project(&json!({
			"siteMainColor1": "#0ea5e9",
			"siteMainColor1Rgba": "",
			"headingColorRgb": "15, 23, 42",
		}));
		assert_eq!(colors.site_main_color1, "#0ea5e9");
		assert_eq!(colors.site_main_color1_rgba, None);
		assert_eq!(colors.heading_color_rgb.as_deref(), Some("15, 23, 42"));
	}

	#[test]
	fn test_typography_variants() {
		let typography = UiTypography::project(&json!({
			"useCustomFont": true,
			"bodyFontFamily": "Inter",
			"bodyFontVariants": ["400", "700"],
			"headingFontVariants": "700",
		}));
		assert_eq!(typography.body_font_variants, vec!["400", "700"]);
		assert!(typography.heading_font_variants.is_empty());
	}
}

// vim: ts=4
