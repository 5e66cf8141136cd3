use super::request_common::{FormBodyHTTPRequestType, HTTPRequestType, Params};
use crate::http_handler::common::HTTPRequestMethod;
use crate::http_handler::http_handler_common::{TaskPeriod, TaskType};
use super::auto_download::CreateAutoDownloadTaskResponse;
use crate::http_handler::session::Session;

/// Schedules a new auto-download task for one device.
#[derive(Debug, Clone)]
pub struct CreateAutoDownloadTaskRequest {
    pub task_name: String,
    pub device_id: String,
    /// hh:mm:ss
    pub start_time: String,
    /// hh:mm:ss
    pub end_time: String,
    pub task_type: TaskType,
    /// yyyy-mm-dd
    pub start_execute: String,
    /// yyyy-mm-dd
    pub end_execute: String,
    pub period: TaskPeriod,
    /// One-indexed channel numbers.
    pub task_channels: Vec<u32>,
    pub effective_days: u32,
}

impl FormBodyHTTPRequestType for CreateAutoDownloadTaskRequest {
    fn form_params(&self, _session: &Session) -> Params {
        let channels = self.task_channels.iter().map(u32::to_string).collect::<Vec<_>>().join(",");
        vec![
            ("action", "saveTask".to_owned()),
            ("TaskName", self.task_name.clone()),
            ("nodeType", "1".to_owned()),
            ("nodeName", self.device_id.clone()),
            ("StartTime", self.start_time.clone()),
            ("EndTime", self.end_time.clone()),
            ("TaskType", i64::from(self.task_type).to_string()),
            ("StartExecute", self.start_execute.clone()),
            ("EndExecute", self.end_execute.clone()),
            ("Period", i64::from(self.period).to_string()),
            ("TaskChannel", channels),
            ("TaskPeriod", String::new()),
            ("TaskIO", String::new()),
            ("TaskEvent", "[]".to_owned()),
            // The remaining values are what the vendor's own web UI sends.
            ("NetMode", "7".to_owned()),
            ("Effective", self.effective_days.to_string()),
            ("Stream", "1".to_owned()),
            ("Storetype", "2".to_owned()),
            ("VideoType", "0".to_owned()),
        ]
    }
}

impl HTTPRequestType for CreateAutoDownloadTaskRequest {
    type Response = CreateAutoDownloadTaskResponse;
    fn service(&self) -> &'static str { "wcms" }
    fn endpoint(&self) -> &'static str { "/Plugin/AutoDownload/Task/Default.ashx" }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
