use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response of the addrdata `/center/group` endpoint.
#[derive(serde::Deserialize, Debug, Default)]
#[serde(default)]
pub struct CenterGroupsResponse {
    #[serde(rename = "errorcode")]
    error_code: i64,
    data: Vec<CenterGroup>,
}

/// A node of the platform's device group tree.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CenterGroup {
    #[serde(rename = "groupfatherid")]
    pub parent_id: i64,
    #[serde(rename = "groupid")]
    pub id: i64,
    #[serde(rename = "groupname")]
    pub name: String,
    pub remark: String,
}

impl SerdeJSONBodyHTTPResponseType for CenterGroupsResponse {}

impl CenterGroupsResponse {
    pub fn error_code(&self) -> i64 { self.error_code }
    pub fn groups(&self) -> &[CenterGroup] { &self.data }

    /// Slash-separated names from the root group down to `group`.
    pub fn group_path(&self, group: &CenterGroup) -> String {
        let mut names = vec![group.name.as_str()];
        let mut current = group;
        // A malformed tree may contain a cycle; no path is longer than the list.
        while names.len() <= self.data.len() {
            let Some(parent) = self.data.iter().find(|g| g.id == current.parent_id && g.id != current.id)
            else {
                break;
            };
            names.push(parent.name.as_str());
            current = parent;
        }
        names.reverse();
        names.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_handler::http_response::response_common::HTTPResponseType;

    const BODY: &[u8] = br#"{"errorcode":200,"data":[
        {"groupfatherid":0,"groupid":1,"groupname":"Fleet","remark":""},
        {"groupfatherid":1,"groupid":2,"groupname":"North","remark":"depot"},
        {"groupfatherid":2,"groupid":3,"groupname":"Buses","remark":""}
    ]}"#;

    #[test]
    fn groups_decode() {
        let response = CenterGroupsResponse::read_response(BODY).unwrap();
        assert_eq!(response.error_code(), 200);
        assert_eq!(response.groups().len(), 3);
        assert_eq!(response.groups()[1].remark, "depot");
    }

    #[test]
    fn path_walks_up_to_the_root() {
        let response = CenterGroupsResponse::read_response(BODY).unwrap();
        assert_eq!(response.group_path(&response.groups()[2]), "Fleet/North/Buses");
        assert_eq!(response.group_path(&response.groups()[0]), "Fleet");
    }

    #[test]
    fn cyclic_tree_terminates() {
        let body = br#"{"data":[
            {"groupfatherid":2,"groupid":1,"groupname":"A"},
            {"groupfatherid":1,"groupid":2,"groupname":"B"}
        ]}"#;
        let response = CenterGroupsResponse::read_response(body).unwrap();
        let path = response.group_path(&response.groups()[0]);
        assert!(path.ends_with('A'));
        assert!(path.split('/').count() <= 3);
    }
}
