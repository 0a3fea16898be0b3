//! Common types used throughout the console.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

// TenantId //
//**********//
/// Opaque tenant identifier as issued by the tenant registry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TenantId(pub Box<str>);

impl TenantId {
	pub fn new(id: impl Into<Box<str>>) -> Self {
		TenantId(id.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl std::fmt::Display for TenantId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<&str> for TenantId {
	fn from(id: &str) -> Self {
		TenantId(id.into())
	}
}

impl Serialize for TenantId {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_str(&self.0)
	}
}

impl<'de> Deserialize<'de> for TenantId {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(TenantId(String::deserialize(deserializer)?.into_boxed_str()))
	}
}

// Timestamp //
//***********//
/// Seconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub i64);

impl Timestamp {
	pub fn now() -> Timestamp {
		now()
	}
}

impl std::fmt::Display for Timestamp {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for Timestamp {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: serde::Serializer,
	{
		serializer.serialize_i64(self.0)
	}
}

impl<'de> Deserialize<'de> for Timestamp {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		Ok(Timestamp(i64::deserialize(deserializer)?))
	}
}

pub fn now() -> Timestamp {
	let res = SystemTime::now().duration_since(SystemTime::UNIX_EPOCH).unwrap_or_default();
	Timestamp(i64::try_from(res.as_secs()).unwrap_or(i64::MAX))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tenant_id_serde() {
		let id = TenantId::new("65a0c0ffee");
		let json = serde_json::to_string(&id).unwrap();
		assert_eq!(json, "\"65a0c0ffee\"");
		let back: TenantId = serde_json::from_str(&json).unwrap();
		assert_eq!(back, id);
		assert_eq!(back.to_string(), "65a0c0ffee");
	}

	#[test]
	fn test_timestamp_ordering() {
		assert!(Timestamp(10) < Timestamp(11));
		assert!(now() > Timestamp(1_600_000_000));
	}
}

// vim: ts=4
