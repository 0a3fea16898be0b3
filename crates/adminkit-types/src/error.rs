//! Error type shared by the settings store boundary and its callers.
//!
//! Projection and formatting never fail, so this type only shows up where
//! settings are read from or written to a store.

pub type AkResult<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
	NotFound,
	DbError,
	ValidationError(String),
	ConfigError(String),
	Internal(String),

	// externals
	Io(std::io::Error),
}

impl From<std::io::Error> for Error {
	fn from(err: std::io::Error) -> Self {
		Self::Io(err)
	}
}

impl From<serde_json::Error> for Error {
	fn from(err: serde_json::Error) -> Self {
		Self::ValidationError(format!("invalid JSON: {}", err))
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Error::NotFound => write!(f, "not found"),
			Error::DbError => write!(f, "database error"),
			Error::ValidationError(msg) => write!(f, "validation error: {}", msg),
			Error::ConfigError(msg) => write!(f, "configuration error: {}", msg),
			Error::Internal(msg) => write!(f, "internal error: {}", msg),
			Error::Io(err) => write!(f, "I/O error: {}", err),
		}
	}
}

impl std::error::Error for Error {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Error::Io(err) => Some(err),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(Error::NotFound.to_string(), "not found");
		assert_eq!(
			Error::ValidationError("tenant id required".into()).to_string(),
			"validation error: tenant id required"
		);
	}

	#[test]
	fn test_from_serde_json() {
		let err = serde_json::from_str::<serde_json::Value>("{").map_err(Error::from);
		assert!(matches!(err, Err(Error::ValidationError(_))));
	}
}

// vim: ts=4
