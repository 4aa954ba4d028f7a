//! 角色与权限模型。
//!
//! 角色是封闭枚举：未知角色字符串只存在于系统边界（`Role::parse`），
//! 进入系统后角色必然是合法变体。权限判定是全函数：每个角色对九项
//! 能力都有明确的 true/false，未知角色一律拒绝（fail-closed）。

use serde::{Deserialize, Serialize};

/// 用户角色。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Operator,
}

impl Role {
    /// 解析角色代码；未知值返回 None（由调用方决定 fail-closed 或降级）。
    pub fn parse(code: &str) -> Option<Role> {
        match code {
            "admin" => Some(Role::Admin),
            "operator" => Some(Role::Operator),
            _ => None,
        }
    }

    /// 角色代码（与存储/DTO 中的字符串一致）。
    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Operator => "operator",
        }
    }

    /// 角色的完整权限集。match 穷尽所有角色，不存在缺键。
    pub fn permission_set(&self) -> PermissionSet {
        match self {
            Role::Admin => PermissionSet {
                view_dashboard: true,
                view_buoys: true,
                edit_buoys: true,
                delete_buoys: true,
                view_analytics: true,
                export_data: true,
                view_alerts: true,
                manage_users: true,
                edit_settings: true,
            },
            Role::Operator => PermissionSet {
                view_dashboard: true,
                view_buoys: true,
                edit_buoys: false,
                delete_buoys: false,
                view_analytics: true,
                export_data: true,
                view_alerts: true,
                manage_users: false,
                edit_settings: false,
            },
        }
    }

    /// 判断角色是否持有某项能力。
    pub fn allows(&self, permission: Permission) -> bool {
        self.permission_set().get(permission)
    }
}

/// 能力枚举（九项，封闭集合）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Permission {
    ViewDashboard,
    ViewBuoys,
    EditBuoys,
    DeleteBuoys,
    ViewAnalytics,
    ExportData,
    ViewAlerts,
    ManageUsers,
    EditSettings,
}

impl Permission {
    /// 全部能力（遍历/测试用）。
    pub const ALL: [Permission; 9] = [
        Permission::ViewDashboard,
        Permission::ViewBuoys,
        Permission::EditBuoys,
        Permission::DeleteBuoys,
        Permission::ViewAnalytics,
        Permission::ExportData,
        Permission::ViewAlerts,
        Permission::ManageUsers,
        Permission::EditSettings,
    ];

    /// 能力代码（camelCase，与前端约定一致）。
    pub fn code(&self) -> &'static str {
        match self {
            Permission::ViewDashboard => "viewDashboard",
            Permission::ViewBuoys => "viewBuoys",
            Permission::EditBuoys => "editBuoys",
            Permission::DeleteBuoys => "deleteBuoys",
            Permission::ViewAnalytics => "viewAnalytics",
            Permission::ExportData => "exportData",
            Permission::ViewAlerts => "viewAlerts",
            Permission::ManageUsers => "manageUsers",
            Permission::EditSettings => "editSettings",
        }
    }
}

/// 角色的能力记录：每项能力都有值，不存在缺键。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionSet {
    pub view_dashboard: bool,
    pub view_buoys: bool,
    pub edit_buoys: bool,
    pub delete_buoys: bool,
    pub view_analytics: bool,
    pub export_data: bool,
    pub view_alerts: bool,
    pub manage_users: bool,
    pub edit_settings: bool,
}

impl PermissionSet {
    /// 读取某项能力的值。
    pub fn get(&self, permission: Permission) -> bool {
        match permission {
            Permission::ViewDashboard => self.view_dashboard,
            Permission::ViewBuoys => self.view_buoys,
            Permission::EditBuoys => self.edit_buoys,
            Permission::DeleteBuoys => self.delete_buoys,
            Permission::ViewAnalytics => self.view_analytics,
            Permission::ExportData => self.export_data,
            Permission::ViewAlerts => self.view_alerts,
            Permission::ManageUsers => self.manage_users,
            Permission::EditSettings => self.edit_settings,
        }
    }
}

/// 边界检查：角色字符串 + 能力 → 是否放行。
///
/// 未知角色对所有能力返回 false（fail-closed），不 panic、无副作用。
pub fn check_permission(role: &str, permission: Permission) -> bool {
    match Role::parse(role) {
        Some(role) => role.allows(permission),
        None => false,
    }
}

/// 当前登录用户。
///
/// email/name 由角色推导（单用户演示系统的既定简化，不独立存储）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub name: String,
}

impl User {
    /// 由角色合成用户记录（id 即会话 token）。
    pub fn from_role(id: impl Into<String>, role: Role) -> Self {
        let (email, name) = match role {
            Role::Admin => ("admin@buoysense.com", "Admin User"),
            Role::Operator => ("operator@buoysense.com", "Operator User"),
        };
        Self {
            id: id.into(),
            email: email.to_string(),
            role,
            name: name.to_string(),
        }
    }
}
