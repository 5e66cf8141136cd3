use super::http_response::{
    auto_download, center_device, center_group, global_report, inner_key, register_login, servers,
};

pub mod auto_download_monitor_post;
pub mod auto_download_task_post;
pub mod center_device_get;
pub mod center_group_get;
pub mod global_report_post;
pub mod inner_key_get;
pub mod register_login_post;
pub mod request_common;
pub mod servers_get;

#[cfg(test)]
mod tests;
