//! Environment configuration

use std::{env, path};

use adminkit_types::prelude::*;

const DEFAULT_DB_DIR: &str = "./data";
const DEFAULT_CACHE_SIZE: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
	Sqlite,
	Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
	pub db_dir: path::PathBuf,
	pub store: StoreKind,
	pub cache_size: usize,
}

impl Config {
	pub fn from_env() -> AkResult<Self> {
		Self::from_lookup(|name| env::var(name).ok())
	}

	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AkResult<Self> {
		let store = match lookup("SETTINGS_STORE").as_deref() {
			None | Some("sqlite") => StoreKind::Sqlite,
			Some("memory") => StoreKind::Memory,
			Some(other) => {
				return Err(Error::ConfigError(format!("unknown SETTINGS_STORE '{}'", other)));
			}
		};
		let cache_size = match lookup("SETTINGS_CACHE_SIZE") {
			None => DEFAULT_CACHE_SIZE,
			Some(size) => size.trim().parse().map_err(|_| {
				Error::ConfigError(format!("invalid SETTINGS_CACHE_SIZE '{}'", size))
			})?,
		};

		Ok(Config {
			db_dir: path::PathBuf::from(lookup("DB_DIR").unwrap_or(DEFAULT_DB_DIR.to_string())),
			store,
			cache_size,
		})
	}

	pub fn settings_db(&self) -> path::PathBuf {
		self.db_dir.join("settings.db")
	}
}


// vim: ts=4
