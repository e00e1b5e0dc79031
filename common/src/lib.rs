use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[cfg(feature = "ts_export")]
use ts_rs::TS;

/// Fields shared by every user-shaped payload the front-end receives.
#[cfg_attr(feature = "ts_export", derive(TS))]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub username: String,
    pub password: String,
    pub avatar: String,
    pub status: i32,
    pub telephone: String,
    pub last_login_ip: String,
    pub last_login_time: i64, // milliseconds since epoch
    pub creator_id: String,
    pub create_time: i64, // milliseconds since epoch
    pub deleted: i32,
    pub role_id: String,
}

/// Payload of `POST /api/auth/login`.
#[cfg_attr(feature = "ts_export", derive(TS))]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    #[serde(flatten)]
    pub user: UserRecord,
    pub lang: String,
    pub token: String,
}

/// Payload of `GET /api/user/info`: the user plus its fully expanded role.
#[cfg_attr(feature = "ts_export", derive(TS))]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(flatten)]
    pub user: UserRecord,
    pub merchant_code: String,
    pub role: Role,
}

#[cfg_attr(feature = "ts_export", derive(TS))]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    pub describe: String,
    pub status: i32,
    pub creator_id: String,
    pub create_time: i64,
    pub deleted: i32,
    pub permissions: Vec<Permission>,
}

impl Role {
    pub fn permission(&self, permission_id: &str) -> Option<&Permission> {
        self.permissions
            .iter()
            .find(|permission| permission.permission_id == permission_id)
    }
}

/// A permission domain (e.g. the dashboard) and the actions it allows.
///
/// `actions` carries the same list as `action_entity_set`, encoded as a JSON
/// string; the front-end reads either one depending on the screen.
#[cfg_attr(feature = "ts_export", derive(TS))]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub role_id: String,
    pub permission_id: String,
    pub permission_name: String,
    pub actions: String,
    pub action_entity_set: Vec<ActionEntity>,
    pub action_list: Option<Vec<String>>,
    pub data_access: Option<serde_json::Value>,
}

impl Permission {
    /// Decodes the `actions` string back into entities.
    pub fn decoded_actions(&self) -> Result<Vec<ActionEntity>, serde_json::Error> {
        serde_json::from_str(&self.actions)
    }
}

#[cfg_attr(feature = "ts_export", derive(TS))]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActionEntity {
    pub action: String,
    pub default_check: bool,
    pub describe: String,
}

/// Wrapper used by every "success" API response.
#[cfg_attr(feature = "ts_export", derive(TS))]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct Envelope<T> {
    pub result: T,
    pub message: String,
    pub code: u16,
    #[serde(rename = "_status")]
    pub status: u16,
}

impl<T> Envelope<T> {
    pub fn ok(result: T) -> Self {
        Self {
            result,
            message: String::new(),
            code: 200,
            status: 200,
        }
    }
}

/// Two-factor step; `0` means the second step is skipped.
#[cfg_attr(feature = "ts_export", derive(TS))]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepCode {
    pub step_code: u8,
}

#[cfg_attr(feature = "ts_export", derive(TS))]
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct HelloMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn action(name: &str, describe: &str) -> ActionEntity {
        ActionEntity {
            action: name.to_string(),
            default_check: false,
            describe: describe.to_string(),
        }
    }

    #[test]
    fn envelope_uses_underscore_status_key() {
        let value = serde_json::to_value(Envelope::ok("x")).unwrap();
        assert_eq!(
            value,
            json!({ "result": "x", "message": "", "code": 200, "_status": 200 })
        );
    }

    #[test]
    fn user_fields_are_flattened_and_camel_cased() {
        let login = LoginResult {
            user: UserRecord {
                id: "id_001".into(),
                name: "admin".into(),
                username: "admin".into(),
                password: String::new(),
                avatar: String::new(),
                status: 1,
                telephone: String::new(),
                last_login_ip: "127.0.0.1".into(),
                last_login_time: 1,
                creator_id: "admin".into(),
                create_time: 2,
                deleted: 0,
                role_id: "admin".into(),
            },
            lang: "zh-CN".into(),
            token: "t".into(),
        };

        let value = serde_json::to_value(&login).unwrap();
        assert_eq!(value["username"], "admin");
        assert_eq!(value["lastLoginIp"], "127.0.0.1");
        assert_eq!(value["roleId"], "admin");
        assert_eq!(value["token"], "t");
        assert!(value.get("user").is_none());

        let back: LoginResult = serde_json::from_value(value).unwrap();
        assert_eq!(back, login);
    }

    #[test]
    fn permission_actions_string_decodes() {
        let permission = Permission {
            role_id: "admin".into(),
            permission_id: "dashboard".into(),
            permission_name: "Dashboard".into(),
            actions: r#"[{"action":"add","defaultCheck":false,"describe":"add"}]"#.into(),
            action_entity_set: vec![action("add", "add")],
            action_list: None,
            data_access: None,
        };

        assert_eq!(
            permission.decoded_actions().unwrap(),
            permission.action_entity_set
        );

        let value = serde_json::to_value(&permission).unwrap();
        assert!(value["actionList"].is_null());
        assert!(value["dataAccess"].is_null());
        assert_eq!(value["actionEntitySet"][0]["defaultCheck"], false);
    }

    #[test]
    fn role_looks_up_permission_by_id() {
        let role = Role {
            id: "admin".into(),
            name: "Admin".into(),
            describe: String::new(),
            status: 1,
            creator_id: "system".into(),
            create_time: 0,
            deleted: 0,
            permissions: vec![Permission {
                role_id: "admin".into(),
                permission_id: "dashboard".into(),
                permission_name: "Dashboard".into(),
                actions: "[]".into(),
                action_entity_set: vec![],
                action_list: None,
                data_access: None,
            }],
        };

        assert!(role.permission("dashboard").is_some());
        assert!(role.permission("billing").is_none());
    }
}
