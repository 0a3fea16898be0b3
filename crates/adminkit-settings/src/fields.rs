//! Normalized field bags produced by projecting a raw blob through a schema

use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::choice::Choice;
use crate::coerce;
use crate::schema::FieldSpec;

/// Build a fully populated bag for `schema` out of any stored value.
///
/// Every field of the schema is present in the result with a value of its
/// declared kind. Unknown members of `raw` are dropped. `raw` is not modified.
pub fn project(schema: &[FieldSpec], raw: &Value) -> Fields {
	let members = raw.as_object();
	let mut out = Map::new();
	for field in schema {
		let value = field.normalize(members.and_then(|m| m.get(field.name)));
		out.insert(field.name.to_owned(), value);
	}
	Fields(out)
}

/// Projected values keyed by field name.
///
/// Accessors never fail: a bag built by [`project`] always holds the right
/// kind for each schema field, anything else reads as the zero value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fields(Map<String, Value>);

impl Fields {
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.0.get(name)
	}

	pub fn text(&self, name: &str) -> String {
		self.0.get(name).and_then(Value::as_str).unwrap_or_default().to_owned()
	}

	pub fn optional_text(&self, name: &str) -> Option<String> {
		self.0.get(name).and_then(Value::as_str).map(str::to_owned)
	}

	pub fn flag(&self, name: &str) -> bool {
		self.0.get(name).and_then(Value::as_bool).unwrap_or(false)
	}

	pub fn number(&self, name: &str) -> f64 {
		self.0.get(name).and_then(Value::as_f64).unwrap_or(0.0)
	}

	pub fn integer(&self, name: &str) -> i64 {
		self.0.get(name).and_then(Value::as_i64).unwrap_or(0)
	}

	pub fn text_list(&self, name: &str) -> Vec<String> {
		match self.0.get(name) {
			Some(Value::Array(items)) => {
				items.iter().filter_map(Value::as_str).map(str::to_owned).collect()
			}
			_ => Vec::new(),
		}
	}

	pub fn choice<C: Choice>(&self, name: &str) -> C {
		self.0.get(name).and_then(Value::as_str).map_or(C::DEFAULT, C::from_option)
	}

	pub fn object(&self, name: &str) -> Fields {
		match self.0.get(name) {
			Some(Value::Object(map)) => Fields(map.clone()),
			_ => Fields::default(),
		}
	}

	/// Members of an object map, sorted by name
	pub fn object_map(&self, name: &str) -> BTreeMap<String, Fields> {
		match self.0.get(name) {
			Some(Value::Object(map)) => map
				.iter()
				.map(|(key, member)| {
					let fields = member.as_object().cloned().map(Fields).unwrap_or_default();
					(key.clone(), fields)
				})
				.collect(),
			_ => BTreeMap::new(),
		}
	}

	/// Boolean switches by name, sorted by name
	pub fn flag_map(&self, name: &str) -> BTreeMap<String, bool> {
		coerce::flag_map(self.0.get(name))
	}

	pub fn into_value(self) -> Value {
		Value::Object(self.0)
	}
}


// vim: ts=4
