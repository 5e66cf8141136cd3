use super::request_common::{FormBodyHTTPRequestType, HTTPRequestType, Params};
use crate::http_handler::common::HTTPRequestMethod;
use super::auto_download::{
    MonitorAutoDownloadResponse, MonitorAutoDownloadTaskResponse,
};
use crate::http_handler::session::Session;

const MONITOR_ENDPOINT: &str = "/Plugin/AutoDownload/Monitor/Default.ashx";

/// Lists the auto-download tasks of one device.
#[derive(Debug)]
pub struct MonitorAutoDownloadRequest {
    pub device_id: String,
}

impl FormBodyHTTPRequestType for MonitorAutoDownloadRequest {
    fn form_params(&self, _session: &Session) -> Params {
        vec![
            ("action", "refreshTask".to_owned()),
            ("id", self.device_id.clone()),
            ("nodetype", "1".to_owned()),
        ]
    }
}

impl HTTPRequestType for MonitorAutoDownloadRequest {
    type Response = MonitorAutoDownloadResponse;
    fn service(&self) -> &'static str { "wcms" }
    fn endpoint(&self) -> &'static str { MONITOR_ENDPOINT }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}

/// Fetches the definition of one task.
#[derive(Debug)]
pub struct MonitorAutoDownloadTaskRequest {
    pub task_id: String,
}

impl FormBodyHTTPRequestType for MonitorAutoDownloadTaskRequest {
    fn form_params(&self, _session: &Session) -> Params {
        vec![("action", "getTask".to_owned()), ("id", self.task_id.clone())]
    }
}

impl HTTPRequestType for MonitorAutoDownloadTaskRequest {
    type Response = MonitorAutoDownloadTaskResponse;
    fn service(&self) -> &'static str { "wcms" }
    fn endpoint(&self) -> &'static str { MONITOR_ENDPOINT }
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Post }
}
