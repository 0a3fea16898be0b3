//! Admin access restriction by client address

use serde::Serialize;

use crate::fields::Fields;
use crate::group::SettingsGroup;
use crate::schema::FieldSpec;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IpRestrictionSettings {
	pub enabled: bool,
	/// Exact addresses, `*`, or prefixes ending in `*` such as `192.168.1.*`
	pub allowed_ips: Vec<String>,
}

impl IpRestrictionSettings {
	/// Whether a request from `ip` gets through. Always true while the restriction is off.
	pub fn permits(&self, ip: &str) -> bool {
		!self.enabled || self.allows(ip)
	}

	/// Match `ip` against the allow-list.
	///
	/// Loopback addresses are always allowed and an empty list allows everyone,
	/// so a misconfiguration cannot lock the console out.
	pub fn allows(&self, ip: &str) -> bool {
		if ip.is_empty() {
			return false;
		}
		if ip == "127.0.0.1" || ip == "::1" {
			return true;
		}
		if self.allowed_ips.is_empty() {
			return true;
		}

		self.allowed_ips.iter().any(|pattern| match pattern.as_str() {
			"" => false,
			"*" => true,
			pattern => match pattern.strip_suffix('*') {
				Some(prefix) => ip.starts_with(prefix),
				None => ip == pattern,
			},
		})
	}
}

/// Client address as seen behind a proxy: the first `X-Forwarded-For` hop if
/// any, else the socket address, with an IPv4-mapped IPv6 prefix removed
pub fn client_ip(forwarded_for: Option<&str>, remote: &str) -> String {
	let forwarded = forwarded_for.and_then(|xff| xff.split(',').next()).map_or("", str::trim);
	let ip = if forwarded.is_empty() { remote } else { forwarded };
	ip.replacen("::ffff:", "", 1)
}

impl SettingsGroup for IpRestrictionSettings {
	const KEY: &'static str = "ip-restriction.settings";
	const SCHEMA: &'static [FieldSpec] =
		&[FieldSpec::flag("enabled"), FieldSpec::text_list("allowedIps")];

	fn from_fields(fields: &Fields) -> Self {
		Self { enabled: fields.flag("enabled"), allowed_ips: fields.text_list("allowedIps") }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn restriction(allowed: &[&str]) -> IpRestrictionSettings {
		IpRestrictionSettings {
			enabled: true,
			allowed_ips: allowed.iter().map(|ip| (*ip).to_owned()).collect(),
		}
	}

	#[test]
	fn test_allows() {
		let settings = restriction(&["10.0.0.5", "192.168.1.*", ""]);
		assert!(settings.allows("10.0.0.5"));
		assert!(settings.allows("192.168.1.77"));
		assert!(!settings.allows("192.168.2.1"));
		assert!(!settings.allows("10.0.0.50"));
		assert!(!settings.allows(""));
		assert!(settings.allows("127.0.0.1"));
		assert!(settings.allows("::1"));
	}

	#[test]
	fn test_empty_list_and_wildcard() {
		assert!(restriction(&[]).allows("8.8.8.8"));
		assert!(!restriction(&[]).allows(""));
		assert!(restriction(&["*"]).allows("8.8.8.8"));
	}

	#[test]
	fn test_permits_when_disabled() {
		let mut settings = restriction(&["10.0.0.5"]);
		assert!(!settings.permits("8.8.8.8"));
		settings.enabled = false;
		assert!(settings.permits("8.8.8.8"));
	}

	#[test]
	fn test_client_ip() {
		assert_eq!(client_ip(Some("1.2.3.4, 10.0.0.1"), "10.0.0.1"), "1.2.3.4");
		assert_eq!(client_ip(Some(""), "::ffff:127.0.0.1"), "127.0.0.1");
		assert_eq!(client_ip(None, "10.0.0.9"), "10.0.0.9");
	}
}

// vim: ts=4
