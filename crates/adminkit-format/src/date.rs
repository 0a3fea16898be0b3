//! Calendar dates rendered with the tenant's `dateFormat` pattern.
//!
//! The pattern only selects the order of day, month and year and the
//! separator between them. Dates are taken in UTC.

use adminkit_settings::groups::SystemSettings;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc};

/// Abbreviated month names as written in the `en-IN` locale
const MONTHS: [&str; 12] =
	["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sept", "Oct", "Nov", "Dec"];

const SEPARATORS: [char; 4] = ['/', '-', '.', ' '];

/// Anything that can be shown as a date
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
	/// RFC 3339 timestamp, `YYYY-MM-DDTHH:MM:SS[.fff]` or `YYYY-MM-DD`
	Text(String),
	Date(NaiveDate),
	DateTime(NaiveDateTime),
	Utc(DateTime<Utc>),
}

impl From<&str> for DateInput {
	fn from(text: &str) -> Self {
		Self::Text(text.to_owned())
	}
}

impl From<String> for DateInput {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<NaiveDate> for DateInput {
	fn from(date: NaiveDate) -> Self {
		Self::Date(date)
	}
}

impl From<NaiveDateTime> for DateInput {
	fn from(date_time: NaiveDateTime) -> Self {
		Self::DateTime(date_time)
	}
}

impl From<DateTime<Utc>> for DateInput {
	fn from(date_time: DateTime<Utc>) -> Self {
		Self::Utc(date_time)
	}
}

impl DateInput {
	/// UTC calendar date, `None` if the text is not a date
	pub fn to_date(&self) -> Option<NaiveDate> {
		match self {
			Self::Text(text) => parse_date(text),
			Self::Date(date) => Some(*date),
			Self::DateTime(date_time) => Some(date_time.date()),
			Self::Utc(date_time) => Some(date_time.date_naive()),
		}
	}
}

const DATE_TIME_FORMATS: [&str; 4] =
	["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M"];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

fn parse_date(text: &str) -> Option<NaiveDate> {
	let text = text.trim();
	if let Ok(date_time) = DateTime::parse_from_rfc3339(text) {
		return Some(date_time.with_timezone(&Utc).date_naive());
	}
	if let Ok(date_time) = DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M%:z") {
		return Some(date_time.with_timezone(&Utc).date_naive());
	}

	let naive = text.strip_suffix('Z').unwrap_or(text);
	if let Some(date_time) = DATE_TIME_FORMATS
		.iter()
		.find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
	{
		return Some(date_time.date());
	}

	if let Some(date) =
		DATE_FORMATS.iter().find_map(|format| NaiveDate::parse_from_str(text, format).ok())
	{
		return Some(date);
	}
	parse_year_month(text)
}

/// `YYYY-MM` or `YYYY`, taken as the first day of the month or year
fn parse_year_month(text: &str) -> Option<NaiveDate> {
	let (year, month) = match text.split_once('-') {
		Some((year, month)) if month.len() == 2 => (year, month.parse().ok()?),
		Some(_) => return None,
		None => (text, 1),
	};
	if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}
	NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

/// Medium `en-IN` form, e.g. `5 Jan 2024`
pub fn medium_date(date: NaiveDate) -> String {
	format!("{} {} {}", date.day(), MONTHS[date.month0() as usize], date.year())
}

/// Format a date with the `dateFormat` of the system settings.
///
/// Unparsable input gives an empty string. Without a pattern, or with one
/// that does not start with `DD`, `MM` or `YYYY`, the medium form is used.
pub fn format_date(input: impl Into<DateInput>, settings: Option<&SystemSettings>) -> String {
	let Some(date) = input.into().to_date() else {
		return String::new();
	};

	let pattern =
		settings.map_or("", |settings| settings.date_format.as_str()).trim().to_uppercase();
	if pattern.is_empty() {
		return medium_date(date);
	}

	let separator = SEPARATORS.into_iter().find(|sep| pattern.contains(*sep)).unwrap_or('/');
	let day = format!("{:02}", date.day());
	let month = format!("{:02}", date.month());
	let year = format!("{:04}", date.year());

	let parts = if pattern.starts_with("DD") {
		[day, month, year]
	} else if pattern.starts_with("MM") {
		[month, day, year]
	} else if pattern.starts_with("YYYY") {
		let month_second =
			pattern.split(separator).nth(1).is_some_and(|token| token.starts_with("MM"));
		if month_second { [year, month, day] } else { [year, day, month] }
	} else {
		return medium_date(date);
	};

	parts.join(separator.to_string().as_str())
}


// vim: ts=4
