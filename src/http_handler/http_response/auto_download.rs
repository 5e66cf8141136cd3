use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::http_handler::http_handler_common::{TaskPeriod, TaskStatus, TaskType};

/// Tasks scheduled for one device, as listed by the monitor plugin.
#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
pub struct MonitorAutoDownloadResponse {
    pub total: i64,
    pub rows: Vec<MonitoredTask>,
}

impl SerdeJSONBodyHTTPResponseType for MonitorAutoDownloadResponse {}

#[derive(serde::Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "PascalCase")]
pub struct MonitoredTask {
    #[serde(rename = "TaskID")]
    pub task_id: i64,
    pub status: TaskStatus,
    #[serde(rename = "Device")]
    pub device_id: String,
    #[serde(rename = "Carlicense")]
    pub car_license: String,
    pub task_name: String,
    pub period: TaskPeriod,
    pub task_type: TaskType,
    /// yyyy-mm-dd
    pub date: String,
    /// hh:mm:ss
    pub start_time: String,
    /// hh:mm:ss
    pub end_time: String,
    /// Comma separated, one-indexed channel numbers.
    #[serde(rename = "Channel")]
    pub channel_list: String,
    /// yyyy-mm-dd hh:mm:ss
    pub create_time: String,
    pub net_mode: String,
}

/// Full definition of one auto-download task.
#[derive(serde::Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "PascalCase")]
pub struct MonitorAutoDownloadTaskResponse {
    #[serde(rename = "TaskID")]
    pub task_id: i64,
    pub task_name: String,
    #[serde(rename = "Device")]
    pub device_id: String,
    pub start_execute: String,
    pub end_execute: String,
    pub start_time: String,
    pub end_time: String,
    pub period: TaskPeriod,
    pub task_type: TaskType,
    // The next three are undocumented lists, kept verbatim.
    pub task_period: Vec<serde_json::Value>,
    pub task_channel: Vec<i64>,
    pub task_event: Vec<serde_json::Value>,
    #[serde(rename = "TaskIO")]
    pub task_io: Vec<serde_json::Value>,
    pub relation: String,
    #[serde(rename = "Carlicense")]
    pub car_license: String,
    /// 1: lan, 2: wifi, 3: wifi and lan, 4: 3G, 7: all
    pub net_mode: String,
    pub effective: i64,
    /// 0: sub, 1: main
    pub stream: i64,
    /// 0: all, 1: normal, 2: alarm
    pub video_type: i64,
    /// 0: main, 1: sub, 2: both
    #[serde(rename = "Storetype")]
    pub store_type: i64,
}

impl SerdeJSONBodyHTTPResponseType for MonitorAutoDownloadTaskResponse {}

/// Whether the task plugin accepted a new task.
#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
pub struct CreateAutoDownloadTaskResponse {
    result: bool,
}

impl SerdeJSONBodyHTTPResponseType for CreateAutoDownloadTaskResponse {}

impl CreateAutoDownloadTaskResponse {
    pub fn is_success(&self) -> bool { self.result }
}
