//! Money amounts rendered the way a tenant configured them.
//!
//! Amounts arrive in minor units (cents, paise) and are never converted to
//! floating point, so the output is exact for any `i64`.

use adminkit_settings::groups::currency::{SymbolMode, SymbolPosition, SymbolSpace};
use adminkit_settings::groups::CurrencySettings;
use regex::Regex;
use std::sync::LazyLock;

const DEFAULT_CURRENCY: &str = "USD";
const DEFAULT_FRACTION_DIGITS: usize = 2;

static FRACTION_PATTERN: LazyLock<Option<Regex>> =
	LazyLock::new(|| Regex::new(r"0[.,](0+)").ok());

const SYMBOLS: &[(&str, &str)] = &[
	("USD", "$"),
	("EUR", "€"),
	("INR", "₹"),
	("GBP", "£"),
	("AUD", "A$"),
	("CAD", "C$"),
	("JPY", "¥"),
];

/// Number of fraction digits requested by a sample format like `0.000`
pub fn fraction_digits(decimal_format: &str) -> usize {
	FRACTION_PATTERN
		.as_ref()
		.and_then(|re| re.captures(decimal_format))
		.and_then(|caps| caps.get(1))
		.map_or(DEFAULT_FRACTION_DIGITS, |zeros| zeros.as_str().len())
}

/// Symbol for a known currency code
pub fn currency_symbol(code: &str) -> Option<&'static str> {
	SYMBOLS.iter().find(|(known, _)| *known == code).map(|(_, symbol)| *symbol)
}

/// Upper-cased code to display: the invoice's own code, else the tenant
/// default, else `USD`. Empty codes count as missing.
pub fn resolve_currency_code(code: Option<&str>, settings: Option<&CurrencySettings>) -> String {
	code.filter(|code| !code.is_empty())
		.or_else(|| {
			settings
				.map(|settings| settings.default_currency_code.as_str())
				.filter(|code| !code.is_empty())
		})
		.unwrap_or(DEFAULT_CURRENCY)
		.to_uppercase()
}

/// Insert `separator` between digit groups of `digits`.
///
/// Western grouping uses groups of three. Indian grouping keeps the last
/// three digits together and pairs the rest (`12,34,567`). An empty
/// separator leaves the digits untouched.
pub fn group_integer(digits: &str, separator: &str, indian: bool) -> String {
	if separator.is_empty() || digits.len() <= 3 || !digits.is_ascii() {
		return digits.to_owned();
	}

	let (head, last3) = digits.split_at(digits.len() - 3);
	let lead = if indian { head.len() % 2 } else { head.len() % 3 };
	let step = if indian { 2 } else { 3 };

	let mut groups: Vec<&str> = Vec::with_capacity(head.len() / step + 2);
	if lead > 0 {
		groups.push(&head[..lead]);
	}
	let mut pos = lead;
	while pos < head.len() {
		groups.push(&head[pos..pos + step]);
		pos += step;
	}
	groups.push(last3);
	groups.join(separator)
}

/// Absolute amount split into integer and fraction digits.
///
/// Fewer than two fraction digits round half away from zero, more are
/// padded with zeros. Rounding is exact on the minor units, so `12.45`
/// shown with one digit is `12.5` where a binary float would give `12.4`.
fn split_minor(abs_minor: u64, digits: usize) -> (String, String) {
	let abs_minor = u128::from(abs_minor);
	if digits >= 2 {
		let fraction = format!("{:02}{}", abs_minor % 100, "0".repeat(digits - 2));
		return ((abs_minor / 100).to_string(), fraction);
	}

	let divisor: u128 = if digits == 1 { 10 } else { 100 };
	let rounded = (abs_minor + divisor / 2) / divisor;
	if digits == 1 {
		((rounded / 10).to_string(), (rounded % 10).to_string())
	} else {
		(rounded.to_string(), String::new())
	}
}

/// Signed amount with two fraction digits and no grouping, e.g. `-1234.50`
fn plain_amount(amount_minor: i64) -> String {
	let (integer, fraction) = split_minor(amount_minor.unsigned_abs(), 2);
	let sign = if amount_minor < 0 { "-" } else { "" };
	format!("{}{}.{}", sign, integer, fraction)
}

/// Format an amount given in minor units.
///
/// Without settings the output is `₹12.50` for INR and `USD 12.50` for any
/// other code. With settings every part (fraction digits, separators,
/// grouping, symbol and its placement) follows the tenant's currency group.
pub fn format_currency(
	amount_minor: i64,
	currency_code: Option<&str>,
	settings: Option<&CurrencySettings>,
) -> String {
	let code = resolve_currency_code(currency_code, settings);

	let Some(settings) = settings else {
		return if code == "INR" {
			format!("₹{}", plain_amount(amount_minor))
		} else {
			format!("{} {}", code, plain_amount(amount_minor))
		};
	};

	let digits = fraction_digits(&settings.decimal_format);
	let (integer, fraction) = split_minor(amount_minor.unsigned_abs(), digits);
	let integer = group_integer(
		&integer,
		settings.thousand_separator.as_separator(),
		code == "INR",
	);
	let numeral = if fraction.is_empty() {
		integer
	} else {
		format!("{}{}{}", integer, settings.decimal_separator.as_char(), fraction)
	};

	let symbol = match settings.currency_symbol_mode {
		SymbolMode::Symbol => currency_symbol(&code).unwrap_or(code.as_str()),
		SymbolMode::Name => code.as_str(),
	};
	let space = if settings.currency_symbol_space == SymbolSpace::With { " " } else { "" };
	let sign = if amount_minor < 0 { "-" } else { "" };

	match settings.currency_symbol_position {
		SymbolPosition::Pre => format!("{}{}{}{}", sign, symbol, space, numeral),
		SymbolPosition::Post => format!("{}{}{}{}", sign, numeral, space, symbol),
	}
}


// vim: ts=4
