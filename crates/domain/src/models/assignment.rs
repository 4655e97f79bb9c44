//! Join-record views linking users, roles, forms, modules and permissions.

use serde::{Deserialize, Serialize};

/// Assignment of a role to a user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRolDto {
    #[serde(default)]
    pub id: i32,
    pub user_id: i32,
    pub rol_id: i32,
}

/// Placement of a form inside a module.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormModuleDto {
    #[serde(default)]
    pub id: i32,
    pub form_id: i32,
    pub module_id: i32,
}

/// Permission granted to a role on a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RolFormPermissionDto {
    #[serde(default)]
    pub id: i32,
    pub rol_id: i32,
    pub form_id: i32,
    pub permission_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assignment_wire_names() {
        let dto: RolFormPermissionDto =
            serde_json::from_str(r#"{"rolId":1,"formId":2,"permissionId":3}"#).unwrap();
        assert_eq!(dto.id, 0);
        assert_eq!((dto.rol_id, dto.form_id, dto.permission_id), (1, 2, 3));
    }
}
