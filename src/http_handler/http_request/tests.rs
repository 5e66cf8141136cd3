use super::auto_download_monitor_post::{MonitorAutoDownloadRequest, MonitorAutoDownloadTaskRequest};
use super::auto_download_task_post::CreateAutoDownloadTaskRequest;
use super::center_device_get::CenterDevicesRequest;
use super::center_group_get::CenterGroupsRequest;
use super::global_report_post::{GlobalReportAutoDownloadRequest, GlobalReportAutoDownloadTaskRequest};
use super::register_login_post::RegisterLoginRequest;
use super::request_common::{FormBodyHTTPRequestType, NoBodyHTTPRequestType};
use crate::http_handler::common::{HTTPError, DecodeError};
use crate::http_handler::http_handler_common::{TaskPeriod, TaskStatus, TaskType};
use crate::http_handler::test_util::MockPlatform;
use serde_json::json;
use std::collections::HashMap;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

fn form_fields(request: &wiremock::Request) -> HashMap<String, String> {
    url::form_urlencoded::parse(&request.body).into_owned().collect()
}

fn query_fields(request: &wiremock::Request) -> HashMap<String, String> {
    request.url.query_pairs().into_owned().collect()
}

#[tokio::test]
async fn center_groups_carry_key_and_random() {
    let platform = MockPlatform::start().await;
    Mock::given(method("GET"))
        .and(path("/center/group"))
        .and(query_param("key", "abc+def"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errorcode": 200,
            "data": [{"groupfatherid": 0, "groupid": 1, "groupname": "Fleet", "remark": ""}]
        })))
        .expect(1)
        .mount(&platform.server)
        .await;

    let mut session = platform.session("abc+def");
    let response = CenterGroupsRequest::default().send_request(&mut session).await.unwrap();
    assert_eq!(response.groups()[0].name, "Fleet");

    let query = query_fields(&platform.received().await[0]);
    assert!(query["random"].parse::<i64>().is_ok());
}

#[tokio::test]
async fn center_devices_decode() {
    let platform = MockPlatform::start().await;
    Mock::given(method("GET"))
        .and(path("/center/device"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errorcode": 200,
            "data": [{"deviceid": "0099AA", "carlicense": "BUS-12", "channelcount": 4, "groupid": 1}]
        })))
        .mount(&platform.server)
        .await;

    let mut session = platform.session("k");
    let response = CenterDevicesRequest::default().send_request(&mut session).await.unwrap();
    assert_eq!(response.devices()[0].channel_count, 4);
}

#[tokio::test]
async fn register_login_escapes_key_inside_form() {
    let platform = MockPlatform::start().await;
    Mock::given(method("POST"))
        .and(path("/Plugin/RegisterLogin/default.ashx"))
        .and(query_param("Action", "Login"))
        .and(query_param("DataType", "Json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Code": 0, "Result": true})))
        .expect(1)
        .mount(&platform.server)
        .await;

    let mut session = platform.session("abc+def");
    let response = RegisterLoginRequest::default().send_request(&mut session).await.unwrap();
    assert!(response.is_success());

    let received = platform.received().await;
    let body = String::from_utf8(received[0].body.clone()).unwrap();
    assert!(body.contains("Token=abc%252Bdef"), "{body}");
    let form = form_fields(&received[0]);
    assert_eq!(form["Token"], "abc%2Bdef");
    assert_eq!(form["Page"], "alarmcenter");
    assert_eq!(form["IsDES"], "false");
    assert!(query_fields(&received[0])["Guid"].parse::<i64>().is_ok());
}

#[tokio::test]
async fn monitor_requests_post_their_actions() {
    let platform = MockPlatform::start().await;
    Mock::given(method("POST"))
        .and(path("/Plugin/AutoDownload/Monitor/Default.ashx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0, "rows": []})))
        .mount(&platform.server)
        .await;

    let mut session = platform.session("k");
    let tasks = MonitorAutoDownloadRequest { device_id: "0099AA".into() }
        .send_request(&mut session)
        .await
        .unwrap();
    assert_eq!(tasks.total, 0);
    MonitorAutoDownloadTaskRequest { task_id: "17".into() }.send_request(&mut session).await.unwrap();

    let received = platform.received().await;
    let refresh = form_fields(&received[0]);
    assert_eq!(refresh["action"], "refreshTask");
    assert_eq!(refresh["id"], "0099AA");
    assert_eq!(refresh["nodetype"], "1");
    let get = form_fields(&received[1]);
    assert_eq!(get["action"], "getTask");
    assert_eq!(get["id"], "17");
}

#[tokio::test]
async fn create_task_sends_channel_list_and_fixed_settings() {
    let platform = MockPlatform::start().await;
    Mock::given(method("POST"))
        .and(path("/Plugin/AutoDownload/Task/Default.ashx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": true})))
        .expect(1)
        .mount(&platform.server)
        .await;

    let request = CreateAutoDownloadTaskRequest {
        task_name: "night shift".into(),
        device_id: "0099AA".into(),
        start_time: "01:00:00".into(),
        end_time: "02:00:00".into(),
        task_type: TaskType::Video,
        start_execute: "2024-05-01".into(),
        end_execute: "2024-05-02".into(),
        period: TaskPeriod::Once,
        task_channels: vec![1, 2, 3],
        effective_days: 7,
    };
    let mut session = platform.session("k");
    assert!(request.send_request(&mut session).await.unwrap().is_success());

    let form = form_fields(&platform.received().await[0]);
    assert_eq!(form["action"], "saveTask");
    assert_eq!(form["TaskName"], "night shift");
    assert_eq!(form["nodeName"], "0099AA");
    assert_eq!(form["TaskType"], "1");
    assert_eq!(form["Period"], "0");
    assert_eq!(form["TaskChannel"], "1,2,3");
    assert_eq!(form["TaskEvent"], "[]");
    assert_eq!(form["Effective"], "7");
    assert_eq!(form["NetMode"], "7");
}

#[tokio::test]
async fn global_report_requests_page_one_hundred_rows() {
    let platform = MockPlatform::start().await;
    Mock::given(method("POST"))
        .and(path("/Plugin/AutoDownload/GlobalReport/Default.ashx"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"total": 0, "rows": []})))
        .mount(&platform.server)
        .await;

    let mut session = platform.session("k");
    GlobalReportAutoDownloadRequest {
        device_id: "0099AA".into(),
        status: TaskStatus::Finished,
        start_date: "2024-05-01".into(),
        end_date: "2024-05-08".into(),
    }
    .send_request(&mut session)
    .await
    .unwrap();
    GlobalReportAutoDownloadTaskRequest { task_id: "17".into(), ..Default::default() }
        .send_request(&mut session)
        .await
        .unwrap();

    let received = platform.received().await;
    let query_task = form_fields(&received[0]);
    assert_eq!(query_task["action"], "queryTask");
    assert_eq!(query_task["Status"], "3");
    assert_eq!(query_task["rows"], "100");
    let query_video = form_fields(&received[1]);
    assert_eq!(query_video["action"], "queryVideo");
    assert_eq!(query_video["TaskID"], "17");
    assert_eq!(query_video["Date"], "");
}

#[tokio::test]
async fn non_json_response_is_a_decode_error() {
    let platform = MockPlatform::start().await;
    Mock::given(path("/center/group"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>login</html>"))
        .mount(&platform.server)
        .await;

    let mut session = platform.session("k");
    let err = CenterGroupsRequest::default().send_request(&mut session).await.unwrap_err();
    assert!(matches!(err, HTTPError::Decode(DecodeError::Body(_))));
}
