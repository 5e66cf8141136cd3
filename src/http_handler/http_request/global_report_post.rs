use super::request_common::{DEFAULT_ROW_COUNT, FormBodyHTTPRequestType, HTTPRequestType, Params};
use crate::http_handler::common::HTTPRequestMethod;
use crate::http_handler::http_handler_common::TaskStatus;
use super::global_report::{
    GlobalReportAutoDownloadResponse, GlobalReportAutoDownloadTaskResponse,
};
use crate::http_handler::session::Session;

const GLOBAL_REPORT_ENDPOINT: &str = "/Plugin/AutoDownload/GlobalReport/Default.ashx";

/// Task history of one device between two dates.
#[derive(Debug, Clone)]
pub struct GlobalReportAutoDownloadRequest {
    pub device_id: String,
    pub status: TaskStatus,
    /// yyyy-mm-dd
    pub start_date: String,
    /// yyyy-mm-dd
    pub end_date: String,
}

impl FormBodyHTTPRequestType for GlobalReportAutoDownloadRequest {
    fn form_params(&self, _session: &Session) -> Params {
        vec![
            ("action", "queryTask".to_owned()),
            ("NodeType", "1".to_owned()),
            ("Device", self.device_id.clone()),
            ("StartTime", self.start_date.clone()),
            ("EndTime", self.end_date.clone()),
            ("Status", i64::from(self.status).to_string()),
            ("Type", "1".to_owned()),
            ("page", "1".to_owned()),
            ("rows", DEFAULT_ROW_COUNT.to_string()),
        ]
    }
}

impl HTTPRequestType for GlobalReportAutoDownloadRequest {
    type Response = GlobalReportAutoDownloadResponse;
    fn service(&self) -> &'static str { "wcms" }
    fn endpoint(&self) -> &'static str { GLOBAL_REPORT_ENDPOINT }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Per-file progress of one task.
#[derive(Debug, Clone, Default)]
pub struct GlobalReportAutoDownloadTaskRequest {
    /// yyyy-mm-dd
    pub date: String,
    pub device_id: String,
    pub task_id: String,
}

impl FormBodyHTTPRequestType for GlobalReportAutoDownloadTaskRequest {
    fn form_params(&self, _session: &Session) -> Params {
        vec![
            ("action", "queryVideo".to_owned()),
            ("Device", self.device_id.clone()),
            ("Date", self.date.clone()),
            ("TaskID", self.task_id.clone()),
            ("page", "1".to_owned()),
            ("rows", DEFAULT_ROW_COUNT.to_string()),
        ]
    }
}

impl HTTPRequestType for GlobalReportAutoDownloadTaskRequest {
    type Response = GlobalReportAutoDownloadTaskResponse;
    fn service(&self) -> &'static str { "wcms" }
    fn endpoint(&self) -> &'static str { GLOBAL_REPORT_ENDPOINT }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
