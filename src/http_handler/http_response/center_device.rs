use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response of the addrdata `/center/device` endpoint.
#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
pub struct CenterDevicesResponse {
    #[serde(rename = "errorcode")]
    error_code: i64,
    data: Vec<CenterDevice>,
}

/// A vehicle recorder registered with the platform.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CenterDevice {
    #[serde(rename = "deviceid")]
    pub device_id: String,
    #[serde(rename = "carlicense")]
    pub car_license: String,
    #[serde(rename = "channelcount")]
    pub channel_count: u32,
    #[serde(rename = "groupid")]
    pub group_id: i64,
}

impl SerdeJSONBodyHTTPResponseType for CenterDevicesResponse {}

impl CenterDevicesResponse {
    pub fn error_code(&self) -> i64 { self.error_code }
    pub fn devices(&self) -> &[CenterDevice] { &self.data }

    /// Devices matching the optional id and license plate filters.
    pub fn matching<'a>(
        &'a self,
        device_id: Option<&'a str>,
        car_license: Option<&'a str>,
    ) -> impl Iterator<Item = &'a CenterDevice> + 'a {
        self.data.iter().filter(move |device| {
            device_id.is_none_or(|id| device.device_id == id)
                && car_license.is_none_or(|name| device.car_license == name)
        })
    }
}

impl CenterDevice {
    /// One-indexed channel numbers of the device.
    pub fn channels(&self) -> Vec<u32> { (1..=self.channel_count).collect() }
}
