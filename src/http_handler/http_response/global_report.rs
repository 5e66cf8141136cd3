use super::response_common::SerdeJSONBodyHTTPResponseType;
use crate::http_handler::http_handler_common::{TaskPeriod, TaskStatus, TaskType};

/// Task history of one device from the global report plugin.
#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
pub struct GlobalReportAutoDownloadResponse {
    pub total: i64,
    pub rows: Vec<ReportedTask>,
}

impl SerdeJSONBodyHTTPResponseType for GlobalReportAutoDownloadResponse {}

#[derive(serde::Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "PascalCase")]
pub struct ReportedTask {
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
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "Channel")]
    pub channel_list: String,
    pub create_time: String,
    pub finish_time: String,
    #[serde(rename = "UserName")]
    pub username: String,
}

/// Per-file progress of one task.
#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
pub struct GlobalReportAutoDownloadTaskResponse {
    pub total: i64,
    pub rows: Vec<TaskFile>,
}

impl SerdeJSONBodyHTTPResponseType for GlobalReportAutoDownloadTaskResponse {}

/// Sizes, speed and percentage are decimal numbers sent as strings.
#[derive(serde::Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "PascalCase")]
pub struct TaskFile {
    #[serde(rename = "Device")]
    pub device_id: String,
    pub status: TaskStatus,
    pub percent: String,
    pub speed: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub total_size: String,
    #[serde(rename = "CurSize")]
    pub current_size: String,
    /// One-indexed.
    pub channel: i64,
    pub error: String,
    #[serde(rename = "TaskID")]
    pub task_id: i64,
    pub file_source: String,
    pub pre_alarm: i64,
    pub next_alarm: i64,
}
