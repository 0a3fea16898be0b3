//! Currency display preferences

use serde::Serialize;

use crate::choice_enum;
use crate::fields::Fields;
use crate::group::SettingsGroup;
use crate::schema::FieldSpec;

choice_enum! {
	/// Character between the integer and fraction digits
	pub enum DecimalSeparator { Dot => "dot", Comma => "comma" } default Dot
}

choice_enum! {
	/// Character between digit groups of the integer part
	pub enum ThousandSeparator {
		Dot => "dot",
		Comma => "comma",
		Space => "space",
		/// No grouping at all
		None => "none",
	} default Dot
}

choice_enum! {
	pub enum FloatNumberFormat { Dot => "dot", Comma => "comma" } default Dot
}

choice_enum! {
	/// Whether a space separates the symbol from the numeral
	pub enum SymbolSpace { With => "with", Without => "without" } default With
}

choice_enum! {
	pub enum SymbolPosition { Pre => "pre", Post => "post" } default Pre
}

choice_enum! {
	/// Show `$` or `USD`
	pub enum SymbolMode { Symbol => "symbol", Name => "name" } default Symbol
}

impl DecimalSeparator {
	pub fn as_char(self) -> char {
		match self {
			Self::Dot => '.',
			Self::Comma => ',',
		}
	}
}

impl ThousandSeparator {
	/// The separator text. Empty means the integer part is not grouped.
	pub fn as_separator(self) -> &'static str {
		match self {
			Self::Dot => ".",
			Self::Comma => ",",
			Self::Space => " ",
			Self::None => "",
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencySettings {
	/// Sample like `0.00` or `0,000`, only the fraction digit count is used
	pub decimal_format: String,
	pub default_currency_code: String,
	pub decimal_separator: DecimalSeparator,
	pub thousand_separator: ThousandSeparator,
	pub float_number_format: FloatNumberFormat,
	pub currency_symbol_space: SymbolSpace,
	pub currency_symbol_position: SymbolPosition,
	pub currency_symbol_mode: SymbolMode,
}

impl SettingsGroup for CurrencySettings {
	const KEY: &'static str = "currency.settings";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::text("decimalFormat"),
		FieldSpec::text("defaultCurrencyCode"),
		FieldSpec::choice::<DecimalSeparator>("decimalSeparator"),
		FieldSpec::choice::<ThousandSeparator>("thousandSeparator"),
		FieldSpec::choice::<FloatNumberFormat>("floatNumberFormat"),
		FieldSpec::choice::<SymbolSpace>("currencySymbolSpace"),
		FieldSpec::choice::<SymbolPosition>("currencySymbolPosition"),
		FieldSpec::choice::<SymbolMode>("currencySymbolMode"),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			decimal_format: fields.text("decimalFormat"),
			default_currency_code: fields.text("defaultCurrencyCode"),
			decimal_separator: fields.choice("decimalSeparator"),
			thousand_separator: fields.choice("thousandSeparator"),
			float_number_format: fields.choice("floatNumberFormat"),
			currency_symbol_space: fields.choice("currencySymbolSpace"),
			currency_symbol_position: fields.choice("currencySymbolPosition"),
			currency_symbol_mode: fields.choice("currencySymbolMode"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_defaults() {
		let settings = CurrencySettings::defaults();
		assert_eq!(
			settings.to_value(),
			json!({
				"decimalFormat": "",
				"defaultCurrencyCode": "",
				"decimalSeparator": "dot",
				"thousandSeparator": "dot",
				"floatNumberFormat": "dot",
				"currencySymbolSpace": "with",
				"currencySymbolPosition": "pre",
				"currencySymbolMode": "symbol",
			})
		);
	}

	#[test]
	fn test_unknown_option_falls_back() {
		let settings = CurrencySettings::project(&json!({
			"thousandSeparator": "none",
			"currencySymbolPosition": "after",
			"currencySymbolMode": 1,
		}));
		assert_eq!(settings.thousand_separator, ThousandSeparator::None);
		assert_eq!(settings.currency_symbol_position, SymbolPosition::Pre);
		assert_eq!(settings.currency_symbol_mode, SymbolMode::Symbol);
	}

	#[test]
	fn test_separators() {
		assert_eq!(DecimalSeparator::Comma.as_char(), ',');
		assert_eq!(ThousandSeparator::Space.as_separator(), " ");
		assert_eq!(ThousandSeparator::None.as_separator(), "");
	}
}

// vim: ts=4
