//! Declarative field tables for settings groups.
//!
//! Every group describes its stored blob as a static list of fields, each with
//! a coercion kind and a default. The projector in [`crate::fields`] walks the
//! table, so defaults live in exactly one place per group.

use serde_json::{Map, Value};

use crate::choice::Choice;
use crate::coerce;
use crate::fields::project;

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
	/// String, falling back to `default`
	Text { default: &'static str },
	/// Non-empty string or `null`
	OptionalText,
	/// Truthiness
	Flag,
	/// Finite number, falling back to `default`
	Number { default: f64 },
	/// Number truncated toward zero
	Integer { default: i64 },
	/// Array of strings
	TextList,
	/// One of `options`, falling back to `default`
	Choice { options: &'static [&'static str], default: &'static str },
	/// Nested object with its own fields
	Object(&'static [FieldSpec]),
	/// Arbitrary names mapped to nested objects with the same fields
	ObjectMap(&'static [FieldSpec]),
	/// Arbitrary names mapped to booleans, non-boolean members dropped
	FlagMap,
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
	pub name: &'static str,
	pub kind: FieldKind,
}

impl FieldSpec {
	pub const fn text(name: &'static str) -> Self {
		Self { name, kind: FieldKind::Text { default: "" } }
	}

	pub const fn text_or(name: &'static str, default: &'static str) -> Self {
		Self { name, kind: FieldKind::Text { default } }
	}

	pub const fn optional_text(name: &'static str) -> Self {
		Self { name, kind: FieldKind::OptionalText }
	}

	pub const fn flag(name: &'static str) -> Self {
		Self { name, kind: FieldKind::Flag }
	}

	pub const fn number(name: &'static str, default: f64) -> Self {
		Self { name, kind: FieldKind::Number { default } }
	}

	pub const fn integer(name: &'static str, default: i64) -> Self {
		Self { name, kind: FieldKind::Integer { default } }
	}

	pub const fn text_list(name: &'static str) -> Self {
		Self { name, kind: FieldKind::TextList }
	}

	pub const fn choice<C: Choice>(name: &'static str) -> Self {
		Self { name, kind: FieldKind::Choice { options: C::OPTIONS, default: C::DEFAULT_OPTION } }
	}

	pub const fn object(name: &'static str, fields: &'static [FieldSpec]) -> Self {
		Self { name, kind: FieldKind::Object(fields) }
	}

	pub const fn object_map(name: &'static str, fields: &'static [FieldSpec]) -> Self {
		Self { name, kind: FieldKind::ObjectMap(fields) }
	}

	pub const fn flag_map(name: &'static str) -> Self {
		Self { name, kind: FieldKind::FlagMap }
	}

	/// Normalized value of this field given the raw stored value (if any)
	pub fn normalize(&self, raw: Option<&Value>) -> Value {
		match self.kind {
			FieldKind::Text { default } => Value::from(coerce::text(raw).unwrap_or(default)),
			FieldKind::OptionalText => coerce::optional_text(raw).map_or(Value::Null, Value::from),
			FieldKind::Flag => Value::Bool(coerce::truthy(raw)),
			FieldKind::Number { default } => {
				Value::from(coerce::finite_number(raw).unwrap_or(default))
			}
			FieldKind::Integer { default } => Value::from(coerce::integer(raw).unwrap_or(default)),
			FieldKind::TextList => Value::from(coerce::text_list(raw)),
			FieldKind::Choice { options, default } => {
				let value = coerce::text(raw)
					.filter(|s| options.iter().any(|option| option == s))
					.unwrap_or(default);
				Value::from(value)
			}
			FieldKind::Object(fields) => project(fields, raw.unwrap_or(&Value::Null)).into_value(),
			FieldKind::ObjectMap(fields) => {
				let members = raw.and_then(Value::as_object).map_or_else(Map::new, |map| {
					map.iter()
						.map(|(name, member)| (name.clone(), project(fields, member).into_value()))
						.collect()
				});
				Value::Object(members)
			}
			FieldKind::FlagMap => {
				let flags = coerce::flag_map(raw);
				Value::Object(flags.into_iter().map(|(name, flag)| (name, Value::Bool(flag))).collect())
			}
		}
	}
}


// vim: ts=4
