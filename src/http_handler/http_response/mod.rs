pub mod response_common;
pub mod auto_download;
pub mod center_device;
pub mod center_group;
pub mod global_report;
pub mod inner_key;
pub mod register_login;
pub mod servers;
