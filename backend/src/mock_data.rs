//! Canned records returned by the API handlers.
//!
//! Built on first use and shared read-only for the life of the process;
//! handlers clone what they hand out.

use common::{ActionEntity, LoginResult, Permission, Role, UserInfo, UserRecord};
use once_cell::sync::Lazy;

pub const ADMIN_ROLE_ID: &str = "admin";
pub const ADMIN_TOKEN: &str = "4291d7da9005377ec9aec4a71ea837f";

const LAST_LOGIN_IP: &str = "27.154.74.117";
const LAST_LOGIN_TIME: i64 = 1534837621348;
const CREATE_TIME: i64 = 1497160610259;

pub static LOGIN_RESULT: Lazy<LoginResult> = Lazy::new(|| LoginResult {
    user: admin_user(
        "id_001",
        "admin",
        "https://gw.alipayobjects.com/zos/rmsportal/jZUIxmJycoymBprLOUbT.png",
    ),
    lang: "zh-CN".to_string(),
    token: ADMIN_TOKEN.to_string(),
});

pub static USER_INFO: Lazy<UserInfo> = Lazy::new(|| UserInfo {
    user: admin_user(ADMIN_TOKEN, "天野远子", "/avatar2.jpg"),
    merchant_code: "TLif2btpzg079h15bk".to_string(),
    role: admin_role(),
});

fn admin_user(id: &str, name: &str, avatar: &str) -> UserRecord {
    UserRecord {
        id: id.to_string(),
        name: name.to_string(),
        username: "admin".to_string(),
        password: String::new(),
        avatar: avatar.to_string(),
        status: 1,
        telephone: String::new(),
        last_login_ip: LAST_LOGIN_IP.to_string(),
        last_login_time: LAST_LOGIN_TIME,
        creator_id: "admin".to_string(),
        create_time: CREATE_TIME,
        deleted: 0,
        role_id: ADMIN_ROLE_ID.to_string(),
    }
}

fn admin_role() -> Role {
    Role {
        id: ADMIN_ROLE_ID.to_string(),
        name: "管理员".to_string(),
        describe: "拥有所有权限".to_string(),
        status: 1,
        creator_id: "system".to_string(),
        create_time: CREATE_TIME,
        deleted: 0,
        permissions: vec![dashboard_permission()],
    }
}

fn dashboard_permission() -> Permission {
    let actions = [
        ("add", "新增"),
        ("query", "查询"),
        ("get", "详情"),
        ("update", "修改"),
        ("delete", "删除"),
    ];

    Permission {
        role_id: ADMIN_ROLE_ID.to_string(),
        permission_id: "dashboard".to_string(),
        permission_name: "仪表盘".to_string(),
        actions: r#"[{"action":"add","defaultCheck":false,"describe":"新增"},{"action":"query","defaultCheck":false,"describe":"查询"},{"action":"get","defaultCheck":false,"describe":"详情"},{"action":"update","defaultCheck":false,"describe":"修改"},{"action":"delete","defaultCheck":false,"describe":"删除"}]"#.to_string(),
        action_entity_set: actions
            .iter()
            .map(|(action, describe)| ActionEntity {
                action: action.to_string(),
                default_check: false,
                describe: describe.to_string(),
            })
            .collect(),
        action_list: None,
        data_access: None,
    }
}
