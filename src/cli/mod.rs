//! Command line definitions of the `angeltrax` binary.

pub mod commands;

use angeltrax::HTTPRequestMethod;
use angeltrax::config::ConfigError;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command line client for the Angeltrax fleet-telematics platform.
#[derive(Parser, Debug)]
#[command(name = "angeltrax", version, about, long_about = None)]
pub struct Cli {
    /// Show more verbose logging, including every request and response.
    #[arg(long, global = true)]
    pub debug: bool,
    /// Config file holding the server, credentials and last session key.
    #[arg(long, global = true, value_name = "PATH")]
    pub config_file: Option<PathBuf>,
    /// Per-request timeout in seconds.
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log in and store the credentials and session key in the config file.
    Login {
        #[arg(long)]
        server: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },
    /// List the device groups and the devices in each of them.
    CenterGroups,
    /// Auto-download task commands.
    Task {
        #[command(subcommand)]
        action: TaskCommand,
    },
    /// Perform a raw request against one of the platform's services.
    RawRequest {
        #[arg(long, default_value = "webclient")]
        service: String,
        #[arg(long, default_value = "GET")]
        method: HTTPRequestMethod,
        /// Query parameter to append, as `key=value`.
        #[arg(long = "query", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        query: Vec<(String, String)>,
        /// Form field to send, as `key=value`.
        #[arg(long = "form", value_name = "KEY=VALUE", value_parser = parse_key_value, conflicts_with = "data")]
        form: Vec<(String, String)>,
        /// JSON document to send as the body.
        #[arg(long, value_name = "JSON")]
        data: Option<String>,
        path: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum TaskCommand {
    /// List the tasks of the matching devices.
    Monitor {
        #[command(flatten)]
        device: DeviceFilter,
    },
    /// Create a task downloading every channel of the first matching device.
    Create {
        #[command(flatten)]
        device: DeviceFilter,
        #[arg(long)]
        task_name: String,
        /// yyyy-mm-dd
        #[arg(long)]
        start_date: String,
        /// yyyy-mm-dd
        #[arg(long)]
        end_date: String,
        /// hh:mm:ss
        #[arg(long)]
        start_time: String,
        /// hh:mm:ss
        #[arg(long)]
        end_time: String,
        #[arg(long, default_value_t = 7)]
        effective_days: u32,
    },
    /// Show the definition of one task.
    MonitorTask { id: String },
    /// Show the task history of the matching devices.
    GlobalReport {
        #[command(flatten)]
        device: DeviceFilter,
        /// Numeric task status to report on.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        status: i64,
        /// yyyy-mm-dd, defaults to a week ago.
        #[arg(long)]
        start_date: Option<String>,
        /// yyyy-mm-dd, defaults to today.
        #[arg(long)]
        end_date: Option<String>,
    },
    /// Show the per-file progress of one task.
    GlobalReportTask {
        id: String,
        #[arg(long, default_value = "")]
        device_id: String,
        /// yyyy-mm-dd
        #[arg(long, default_value = "")]
        date: String,
    },
}

/// Selects devices by id and/or license plate; no filter selects all.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DeviceFilter {
    #[arg(long)]
    pub device_id: Option<String>,
    /// License plate of the vehicle.
    #[arg(long)]
    pub device_name: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    HTTP(#[from] angeltrax::HTTPError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("missing {0}")]
    Missing(&'static str),
    #[error("could not find device")]
    NoDevice,
    #[error("invalid JSON body: {0}")]
    Body(#[from] serde_json::Error),
}

fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(key, value)| (key.to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {arg:?}"))
}
