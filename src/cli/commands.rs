use super::{Cli, CliError, Command, DeviceFilter, TaskCommand};
use angeltrax::config::Config;
use angeltrax::http_handler::http_handler_common::{TaskPeriod, TaskStatus, TaskType};
use angeltrax::http_handler::http_request::auto_download_monitor_post::{
    MonitorAutoDownloadRequest, MonitorAutoDownloadTaskRequest,
};
use angeltrax::http_handler::http_request::auto_download_task_post::CreateAutoDownloadTaskRequest;
use angeltrax::http_handler::http_request::center_device_get::CenterDevicesRequest;
use angeltrax::http_handler::http_request::center_group_get::CenterGroupsRequest;
use angeltrax::http_handler::http_request::global_report_post::{
    GlobalReportAutoDownloadRequest, GlobalReportAutoDownloadTaskRequest,
};
use angeltrax::http_handler::http_request::register_login_post::RegisterLoginRequest;
use angeltrax::http_handler::http_response::center_device::{CenterDevice, CenterDevicesResponse};
use angeltrax::{
    CancellationToken, FormBodyHTTPRequestType, HTTPClient, HTTPClientConfig, HTTPRequestMethod,
    NoBodyHTTPRequestType, RequestBody, Session,
};
use chrono::{Days, Local};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, warn};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Runs the parsed command line to completion.
///
/// # Errors
/// Any [`CliError`] of the command.
pub async fn run(cli: Cli, cancel: CancellationToken) -> Result<(), CliError> {
    let config_path = cli.config_file.or_else(Config::default_path);
    let config = match &config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let client = HTTPClient::new(HTTPClientConfig {
        timeout: cli.timeout.map(Duration::from_secs),
        ..HTTPClientConfig::default()
    })?;

    match cli.command {
        Command::Login { server, username, password } => {
            let config = Config {
                server: server.unwrap_or(config.server),
                username: username.unwrap_or(config.username),
                password: password.unwrap_or(config.password),
                key: config.key,
            };
            login(client, &cancel, config, config_path.as_deref()).await
        }
        Command::CenterGroups => center_groups(&mut connect(client, &cancel, &config).await?).await,
        Command::Task { action } => task(&mut connect(client, &cancel, &config).await?, action).await,
        Command::RawRequest { service, method, query, form, data, path } => {
            let body = match data {
                Some(data) => RequestBody::Json(serde_json::from_str(&data)?),
                None if !form.is_empty() => RequestBody::form(form),
                None => RequestBody::Empty,
            };
            let mut session = connect(client, &cancel, &config).await?;
            raw_request(&mut session, &service, method, &path, query, body).await
        }
    }
}

fn require<'a>(value: &'a str, name: &'static str) -> Result<&'a str, CliError> {
    if value.is_empty() { Err(CliError::Missing(name)) } else { Ok(value) }
}

/// Logs in with the configured server and credentials.
async fn connect(
    client: HTTPClient,
    cancel: &CancellationToken,
    config: &Config,
) -> Result<Session, CliError> {
    let server = require(&config.server, "server")?;
    let username = require(&config.username, "username")?;
    let password = require(&config.password, "password")?;
    Ok(Session::login(client, cancel, server, username, password).await?)
}

async fn login(
    client: HTTPClient,
    cancel: &CancellationToken,
    mut config: Config,
    config_path: Option<&Path>,
) -> Result<(), CliError> {
    let session = connect(client, cancel, &config).await?;
    config.key = session.key().to_owned();
    match config_path {
        Some(path) => {
            config.save(path)?;
            info!("Saved session to {}", path.display());
        }
        None => warn!("No config file location; the session was not saved"),
    }
    Ok(())
}

/// wcms plugins reject calls until the session key has been registered.
async fn register(session: &mut Session) -> Result<(), CliError> {
    let response = RegisterLoginRequest::default().send_request(session).await?;
    if response.is_success() {
        debug!("Registered session key with wcms");
    } else {
        warn!("wcms did not confirm the session key (code {})", response.code());
    }
    Ok(())
}

async fn center_groups(session: &mut Session) -> Result<(), CliError> {
    let groups = CenterGroupsRequest::default().send_request(session).await?;
    let devices = CenterDevicesRequest::default().send_request(session).await?;

    for group in groups.groups() {
        println!("Group #{}: {}", group.id, groups.group_path(group));
        for device in devices.devices().iter().filter(|device| device.group_id == group.id) {
            println!(
                "   Device #{}: {} | Channels: {}",
                device.device_id, device.car_license, device.channel_count
            );
        }
    }
    Ok(())
}

fn selected_devices<'a>(
    devices: &'a CenterDevicesResponse,
    filter: &'a DeviceFilter,
) -> impl Iterator<Item = &'a CenterDevice> + 'a {
    devices.matching(filter.device_id.as_deref(), filter.device_name.as_deref()).inspect(|device| {
        debug!("Device: {} ({})", device.device_id, device.car_license);
    })
}

async fn task(session: &mut Session, action: TaskCommand) -> Result<(), CliError> {
    match action {
        TaskCommand::Monitor { device } => {
            let devices = CenterDevicesRequest::default().send_request(session).await?;
            register(session).await?;
            for selected in selected_devices(&devices, &device) {
                let request = MonitorAutoDownloadRequest { device_id: selected.device_id.clone() };
                let response = request.send_request(session).await?;
                debug!("Total: {}", response.total);
                for task in &response.rows {
                    println!(
                        "Task {}: {} ({}): {} | {} {} - {}",
                        task.task_id,
                        task.device_id,
                        task.car_license,
                        task.task_name,
                        task.date,
                        task.start_time,
                        task.end_time
                    );
                }
            }
        }
        TaskCommand::Create {
            device,
            task_name,
            start_date,
            end_date,
            start_time,
            end_time,
            effective_days,
        } => {
            let devices = CenterDevicesRequest::default().send_request(session).await?;
            register(session).await?;
            let selected = selected_devices(&devices, &device).next().ok_or(CliError::NoDevice)?;
            let request = CreateAutoDownloadTaskRequest {
                task_name,
                device_id: selected.device_id.clone(),
                start_time,
                end_time,
                task_type: TaskType::Video,
                start_execute: start_date,
                end_execute: end_date,
                period: TaskPeriod::Once,
                task_channels: selected.channels(),
                effective_days,
            };
            let response = request.send_request(session).await?;
            println!("Success: {}", response.is_success());
        }
        TaskCommand::MonitorTask { id } => {
            register(session).await?;
            let task = MonitorAutoDownloadTaskRequest { task_id: id }.send_request(session).await?;
            println!("Task #{} ({}) - {} ({})", task.task_id, task.task_name, task.device_id, task.car_license);
            println!("   {} - {}, {} - {}", task.start_execute, task.end_execute, task.start_time, task.end_time);
        }
        TaskCommand::GlobalReport { device, status, start_date, end_date } => {
            let today = Local::now().date_naive();
            let week_ago = today.checked_sub_days(Days::new(7)).unwrap_or(today);
            let start_date = start_date.unwrap_or_else(|| week_ago.format(DATE_FORMAT).to_string());
            let end_date = end_date.unwrap_or_else(|| today.format(DATE_FORMAT).to_string());

            let devices = CenterDevicesRequest::default().send_request(session).await?;
            register(session).await?;
            for selected in selected_devices(&devices, &device) {
                let request = GlobalReportAutoDownloadRequest {
                    device_id: selected.device_id.clone(),
                    status: TaskStatus::from(status),
                    start_date: start_date.clone(),
                    end_date: end_date.clone(),
                };
                for task in request.send_request(session).await?.rows {
                    println!("Task #{} ({}) - {} ({})", task.task_id, task.task_name, task.device_id, task.car_license);
                    println!("   {} - {}", task.start_time, task.end_time);
                    println!("   {} (by {})", task.status, task.username);
                }
            }
        }
        TaskCommand::GlobalReportTask { id, device_id, date } => {
            register(session).await?;
            let request = GlobalReportAutoDownloadTaskRequest { date, device_id, task_id: id };
            for file in request.send_request(session).await?.rows {
                println!("{}, {} of {} ({}%)", file.file_source, file.current_size, file.total_size, file.percent);
                println!("   {}, {} - {}", file.date, file.start_time, file.end_time);
                println!("   status: {}", file.status);
                println!("   speed: {}", file.speed);
            }
        }
    }
    Ok(())
}

async fn raw_request(
    session: &mut Session,
    service: &str,
    method: HTTPRequestMethod,
    path: &str,
    query: Vec<(String, String)>,
    body: RequestBody,
) -> Result<(), CliError> {
    let contents = session.dispatch(service, method, path, query, body).await?;
    println!("{}", String::from_utf8_lossy(&contents));
    Ok(())
}
