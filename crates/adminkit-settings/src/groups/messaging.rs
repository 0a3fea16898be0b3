//! Outbound messaging: mail transport, notification channels, chat
//! integrations, webhooks and calendar sync

use serde::Serialize;
use std::collections::BTreeMap;

use crate::choice_enum;
use crate::fields::Fields;
use crate::group::SettingsGroup;
use crate::schema::FieldSpec;

choice_enum! {
	pub enum SmtpEncryption { None => "none", Ssl => "ssl", Tls => "tls" } default None
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailSettings {
	pub global_from_email: String,
	pub smtp_host: String,
	pub smtp_username: String,
	pub smtp_password: String,
	pub smtp_driver: String,
	pub smtp_port: i64,
	pub smtp_encryption: SmtpEncryption,
}

impl SettingsGroup for EmailSettings {
	const KEY: &'static str = "email.settings";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::text("globalFromEmail"),
		FieldSpec::text("smtpHost"),
		FieldSpec::text("smtpUsername"),
		FieldSpec::text("smtpPassword"),
		FieldSpec::text("smtpDriver"),
		FieldSpec::integer("smtpPort", 0),
		FieldSpec::choice::<SmtpEncryption>("smtpEncryption"),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			global_from_email: fields.text("globalFromEmail"),
			smtp_host: fields.text("smtpHost"),
			smtp_username: fields.text("smtpUsername"),
			smtp_password: fields.text("smtpPassword"),
			smtp_driver: fields.text("smtpDriver"),
			smtp_port: fields.integer("smtpPort"),
			smtp_encryption: fields.choice("smtpEncryption"),
		}
	}
}

// Notifications //
//***************//

const CHANNEL_FIELDS: &[FieldSpec] = &[
	FieldSpec::flag("email"),
	FieldSpec::flag("inApp"),
	FieldSpec::flag("sms"),
	FieldSpec::flag("push"),
];

/// Delivery channels switched on for one event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationChannel {
	pub email: bool,
	pub in_app: bool,
	pub sms: bool,
	pub push: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NotificationSettings {
	/// Channels by event key, e.g. `billing.invoice_paid`
	pub events: BTreeMap<String, NotificationChannel>,
}

impl NotificationSettings {
	/// Channels stored for `event`, `None` if the event was never configured
	pub fn channel(&self, event: &str) -> Option<NotificationChannel> {
		self.events.get(event).copied()
	}

	/// Email goes out for unconfigured events and for events with email on
	pub fn email_enabled(&self, event: &str) -> bool {
		self.channel(event).is_none_or(|channel| channel.email)
	}

	/// In-app delivery needs an explicit opt-in
	pub fn in_app_enabled(&self, event: &str) -> bool {
		self.channel(event).is_some_and(|channel| channel.in_app)
	}
}

impl SettingsGroup for NotificationSettings {
	const KEY: &'static str = "notification.settings";
	const SCHEMA: &'static [FieldSpec] = &[FieldSpec::object_map("events", CHANNEL_FIELDS)];

	fn from_fields(fields: &Fields) -> Self {
		let events = fields
			.object_map("events")
			.iter()
			.map(|(event, channel)| {
				let channel = NotificationChannel {
					email: channel.flag("email"),
					in_app: channel.flag("inApp"),
					sms: channel.flag("sms"),
					push: channel.flag("push"),
				};
				(event.clone(), channel)
			})
			.collect();
		Self { events }
	}
}

// Integrations //
//**************//

const SLACK_FIELDS: &[FieldSpec] = &[FieldSpec::flag("enabled"), FieldSpec::text("webhookUrl")];
const TELEGRAM_FIELDS: &[FieldSpec] =
	&[FieldSpec::flag("enabled"), FieldSpec::text("botToken"), FieldSpec::text("chatId")];
const TWILIO_FIELDS: &[FieldSpec] = &[
	FieldSpec::flag("enabled"),
	FieldSpec::text("accountSid"),
	FieldSpec::text("authToken"),
	FieldSpec::text("fromNumber"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlackIntegration {
	pub enabled: bool,
	pub webhook_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelegramIntegration {
	pub enabled: bool,
	pub bot_token: String,
	pub chat_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TwilioIntegration {
	pub enabled: bool,
	pub account_sid: String,
	pub auth_token: String,
	pub from_number: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntegrationSettings {
	pub slack: SlackIntegration,
	pub telegram: TelegramIntegration,
	pub twilio: TwilioIntegration,
}

impl IntegrationSettings {
	/// Slack incoming webhook URL, if Slack posting is switched on and configured
	pub fn slack_webhook(&self) -> Option<&str> {
		Some(self.slack.webhook_url.as_str()).filter(|url| self.slack.enabled && !url.is_empty())
	}
}

impl SettingsGroup for IntegrationSettings {
	const KEY: &'static str = "integration.settings";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::object("slack", SLACK_FIELDS),
		FieldSpec::object("telegram", TELEGRAM_FIELDS),
		FieldSpec::object("twilio", TWILIO_FIELDS),
	];

	fn from_fields(fields: &Fields) -> Self {
		let slack = fields.object("slack");
		let telegram = fields.object("telegram");
		let twilio = fields.object("twilio");
		Self {
			slack: SlackIntegration {
				enabled: slack.flag("enabled"),
				webhook_url: slack.text("webhookUrl"),
			},
			telegram: TelegramIntegration {
				enabled: telegram.flag("enabled"),
				bot_token: telegram.text("botToken"),
				chat_id: telegram.text("chatId"),
			},
			twilio: TwilioIntegration {
				enabled: twilio.flag("enabled"),
				account_sid: twilio.text("accountSid"),
				auth_token: twilio.text("authToken"),
				from_number: twilio.text("fromNumber"),
			},
		}
	}
}

// Webhooks //
//**********//

const HOOK_FIELDS: &[FieldSpec] = &[
	FieldSpec::flag("enabled"),
	FieldSpec::text("url"),
	FieldSpec::text("secretHeaderName"),
	FieldSpec::text("secretHeaderValue"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookHook {
	pub enabled: bool,
	pub url: String,
	pub secret_header_name: String,
	pub secret_header_value: String,
}

impl WebhookHook {
	/// Extra header sent with every delivery, if both name and value are set
	pub fn secret_header(&self) -> Option<(&str, &str)> {
		if self.secret_header_name.is_empty() || self.secret_header_value.is_empty() {
			return None;
		}
		Some((&self.secret_header_name, &self.secret_header_value))
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebhookSettings {
	pub hooks: BTreeMap<String, WebhookHook>,
}

impl WebhookSettings {
	/// The hook to deliver `event` to, if one is enabled and has a URL
	pub fn hook(&self, event: &str) -> Option<&WebhookHook> {
		self.hooks.get(event).filter(|hook| hook.enabled && !hook.url.is_empty())
	}
}

impl SettingsGroup for WebhookSettings {
	const KEY: &'static str = "webhook.settings";
	const SCHEMA: &'static [FieldSpec] = &[FieldSpec::object_map("hooks", HOOK_FIELDS)];

	fn from_fields(fields: &Fields) -> Self {
		let hooks = fields
			.object_map("hooks")
			.iter()
			.map(|(event, hook)| {
				let hook = WebhookHook {
					enabled: hook.flag("enabled"),
					url: hook.text("url"),
					secret_header_name: hook.text("secretHeaderName"),
					secret_header_value: hook.text("secretHeaderValue"),
				};
				(event.clone(), hook)
			})
			.collect();
		Self { hooks }
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarSettings {
	pub enabled: bool,
	pub google_calendar_id: String,
	/// Service account key file contents, kept as text
	pub google_service_account_json: String,
}

impl SettingsGroup for CalendarSettings {
	const KEY: &'static str = "calendar.settings";
	const SCHEMA: &'static [FieldSpec] = &[
		FieldSpec::flag("enabled"),
		FieldSpec::text("googleCalendarId"),
		FieldSpec::text("googleServiceAccountJson"),
	];

	fn from_fields(fields: &Fields) -> Self {
		Self {
			enabled: fields.flag("enabled"),
			google_calendar_id: fields.text("googleCalendarId"),
			google_service_account_json: fields.text("googleServiceAccountJson"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_email_port_and_encryption() {
		let email =
			EmailSettings::project(&json!({ "smtpPort": "587", "smtpEncryption": "starttls" }));
		assert_eq!(email.smtp_port, 587);
		assert_eq!(email.smtp_encryption, SmtpEncryption::None);
	}

	#[test]
	fn test_notification_channel() {
		let settings = NotificationSettings::project(&json!({
			"events": { "invoice.paid": { "email": true, "inApp": "yes" } },
		}));
		let channel = settings.channel("invoice.paid").unwrap();
		assert!(channel.email && channel.in_app);
		assert!(!channel.sms && !channel.push);
		assert_eq!(settings.channel("unknown"), None);
	}

	#[test]
	fn test_unconfigured_event_still_emails() {
		let settings = NotificationSettings::project(&json!({}));
		assert!(settings.channel("crm.deal_created").is_none());
		assert!(settings.email_enabled("crm.deal_created"));
		assert!(!settings.in_app_enabled("crm.deal_created"));

		let settings = NotificationSettings::project(&json!({
			"events": { "crm.deal_created": { "email": false, "inApp": true } },
		}));
		assert!(!settings.email_enabled("crm.deal_created"));
		assert!(settings.in_app_enabled("crm.deal_created"));
		assert!(!settings.channel("crm.deal_created").unwrap_or_default().sms);
	}

	#[test]
	fn test_integration_nested_defaults() {
		let settings = IntegrationSettings::project(&json!({ "slack": "on", "twilio": { "enabled": 1 } }));
		assert_eq!(settings.slack, SlackIntegration::default());
		assert!(settings.twilio.enabled);
		assert_eq!(settings.slack_webhook(), None);

		let settings = IntegrationSettings::project(&json!({
			"slack": { "enabled": true, "webhookUrl": "https://hooks.example/1" },
		}));
		assert_eq!(settings.slack_webhook(), Some("https://hooks.example/1"));
	}

	#[test]
	fn test_webhook_hook() {
		let settings = WebhookSettings::project(&json!({
			"hooks": {
				"order.created": {
					"enabled": true,
					"url": "https://example.com/hook",
					"secretHeaderName": "X-Secret",
					"secretHeaderValue": "s3",
				},
				"order.deleted": { "enabled": true },
				"order.updated": { "url": "https://example.com/hook" },
			},
		}));
		let hook = settings.hook("order.created");
		assert_eq!(hook.and_then(WebhookHook::secret_header), Some(("X-Secret", "s3")));
		assert!(settings.hook("order.deleted").is_none());
		assert!(settings.hook("order.updated").is_none());
		assert!(settings.hook("missing").is_none());
	}
}

// vim: ts=4
