//! Preview settings groups and tenant formatting from the command line

#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![forbid(unsafe_code)]

mod config;

use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;

use adminkit_format::Formatter;
use adminkit_settings::{GroupValue, MemorySettingsAdapter, SettingsService};
use adminkit_settings_adapter_sqlite::SettingsAdapterSqlite;
use adminkit_types::prelude::*;
use adminkit_types::settings_adapter::SettingsAdapter;

use crate::config::{Config, StoreKind};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(name = "adminkit-preview")]
struct Cli {
	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Print the effective value of a settings group
	Show { key: String, tenant: Option<String> },
	/// List the stored group keys
	Keys { tenant: Option<String> },
	/// Project a JSON blob through a group and store it
	Set { key: String, json: String, tenant: Option<String> },
	/// Format an amount (in minor units) and optionally a date
	#[command(allow_negative_numbers = true)]
	Format {
		amount_minor: i64,
		currency: Option<String>,
		date: Option<String>,
		tenant: Option<String>,
	},
}

async fn open_service(config: &Config) -> AkResult<SettingsService> {
	let adapter: Arc<dyn SettingsAdapter> = match config.store {
		StoreKind::Sqlite => Arc::new(SettingsAdapterSqlite::new(config.settings_db()).await?),
		StoreKind::Memory => Arc::new(MemorySettingsAdapter::new()),
	};
	Ok(SettingsService::new(adapter, config.cache_size))
}

fn print_group(group: &GroupValue) -> AkResult<()> {
	println!("{}", serde_json::to_string_pretty(&group.to_value())?);
	Ok(())
}

async fn run(command: Command, service: &SettingsService) -> AkResult<()> {
	match command {
		Command::Show { key, tenant } => {
			let tenant = tenant.map(TenantId::new);
			print_group(&service.get_group(&key, tenant.as_ref()).await?)
		}
		Command::Keys { tenant } => {
			let tenant = tenant.map(TenantId::new);
			for key in service.list_keys(tenant.as_ref()).await? {
				println!("{}", key);
			}
			Ok(())
		}
		Command::Set { key, json, tenant } => {
			let tenant = tenant.map(TenantId::new);
			let raw: serde_json::Value = serde_json::from_str(&json)?;
			let group = GroupValue::project(&key, &raw).ok_or_else(|| {
				Error::ValidationError(format!("unknown settings group '{}'", key))
			})?;
			print_group(&service.save_group(&group, tenant.as_ref()).await?)
		}
		Command::Format { amount_minor, currency, date, tenant } => {
			let tenant = tenant.map(TenantId::new);
			let formatter = Formatter::load(service, tenant.as_ref()).await?;
			println!("{}", formatter.currency(amount_minor, currency.as_deref()));
			if let Some(date) = date {
				println!("{}", formatter.date(date));
			}
			Ok(())
		}
	}
}

async fn start(cli: Cli) -> AkResult<()> {
	let config = Config::from_env()?;
	debug!("Config: {:?}", config);
	let service = open_service(&config).await?;
	run(cli.command, &service).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_target(false)
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();
	match start(cli).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("{}", err);
			eprintln!("adminkit-preview: {}", err);
			ExitCode::FAILURE
		}
	}
}

// vim: ts=4
