//! Loose value coercion for stored settings blobs.
//!
//! Stored values were written by several generations of the admin console and
//! are not guaranteed to have the declared type. These helpers reproduce the
//! JavaScript rules the console has always applied when reading them back:
//! `typeof v === "string"`, `Boolean(v)`, `Number(v)` and `Array.isArray(v)`.

use serde_json::Value;
use std::collections::BTreeMap;

/// The value itself if it is a string
pub fn text(value: Option<&Value>) -> Option<&str> {
	value.and_then(Value::as_str)
}

/// A non-empty string, anything else is treated as unset
pub fn optional_text(value: Option<&Value>) -> Option<&str> {
	text(value).filter(|s| !s.is_empty())
}

/// JavaScript truthiness
pub fn truthy(value: Option<&Value>) -> bool {
	match value {
		None | Some(Value::Null) => false,
		Some(Value::Bool(b)) => *b,
		Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f.abs() > 0.0),
		Some(Value::String(s)) => !s.is_empty(),
		Some(Value::Array(_) | Value::Object(_)) => true,
	}
}

/// JavaScript `Number(value)`. `None` stands for `NaN`.
pub fn number(value: Option<&Value>) -> Option<f64> {
	match value? {
		Value::Null => Some(0.0),
		Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
		Value::Number(n) => n.as_f64(),
		Value::String(s) => parse_number(s),
		// Arrays go through their string form: [] -> "" -> 0, [x] -> String(x)
		Value::Array(items) => match items.as_slice() {
			[] | [Value::Null] => Some(0.0),
			[item @ (Value::Number(_) | Value::String(_) | Value::Array(_))] => number(Some(item)),
			_ => None,
		},
		Value::Object(_) => None,
	}
}

/// `Number(value)` limited to finite results
pub fn finite_number(value: Option<&Value>) -> Option<f64> {
	number(value).filter(|f| f.is_finite())
}

/// `Number(value)` truncated toward zero, if it fits an `i64`
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn integer(value: Option<&Value>) -> Option<i64> {
	let f = finite_number(value)?.trunc();
	if f < i64::MIN as f64 || f >= i64::MAX as f64 {
		return None;
	}
	Some(f as i64)
}

/// The string elements of an array, or nothing if the value is not an array
pub fn text_list(value: Option<&Value>) -> Vec<String> {
	match value {
		Some(Value::Array(items)) => {
			items.iter().filter_map(Value::as_str).map(str::to_owned).collect()
		}
		_ => Vec::new(),
	}
}

/// The boolean members of an object. Other members carry no switch and are dropped.
pub fn flag_map(value: Option<&Value>) -> BTreeMap<String, bool> {
	match value {
		Some(Value::Object(map)) => map
			.iter()
			.filter_map(|(name, member)| member.as_bool().map(|flag| (name.clone(), flag)))
			.collect(),
		_ => BTreeMap::new(),
	}
}

/// String to number conversion following the ECMAScript `StringToNumber` grammar
#[allow(clippy::cast_precision_loss)]
fn parse_number(s: &str) -> Option<f64> {
	let t = s.trim();
	if t.is_empty() {
		return Some(0.0);
	}

	match t {
		"Infinity" | "+Infinity" => return Some(f64::INFINITY),
		"-Infinity" => return Some(f64::NEG_INFINITY),
		_ => {}
	}

	for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
		if let Some(digits) = t.strip_prefix(prefix) {
			if digits.starts_with('+') {
				return None;
			}
			return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
		}
	}

	// Rust's float parser also accepts "inf" and "nan" spellings, JavaScript does not
	if !t.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E')) {
		return None;
	}
	t.parse::<f64>().ok()
}


// vim: ts=4
