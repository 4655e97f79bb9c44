//! Roles, modules, forms and their assignments through a request scope.

mod common;

use business::ServiceError;
use common::{next_request, test_scope};
use domain::models::{
    FormDto, FormModuleDto, ModuleDto, ModuleUpdateDto, PermissionDto, RolDto,
    RolFormPermissionDto, RolUpdateDto, StatusDto, UserDto, UserRolDto,
};
use persistence::entities::{FormEntity, RolEntity, UserEntity};
use persistence::Store;

#[tokio::test]
async fn test_set_active_round_trip_commits_one_row_each() {
    let (store, scope) = test_scope();
    let rol = scope
        .roles
        .add(RolDto {
            type_rol: "auditor".to_string(),
            active: false,
            ..Default::default()
        })
        .await
        .unwrap();

    let writes = store.write_count();
    assert!(scope.roles.set_active(StatusDto::new(rol.id, true)).await);
    assert_eq!(store.write_count(), writes + 1);
    assert!(scope.roles.get_by_id(rol.id).await.unwrap().unwrap().active);

    assert!(scope.roles.set_active(StatusDto::new(rol.id, false)).await);
    assert_eq!(store.write_count(), writes + 2);
    assert!(!scope.roles.get_by_id(rol.id).await.unwrap().unwrap().active);
    assert_eq!(store.row_count::<RolEntity>(), 1);
}

#[tokio::test]
async fn test_permissions_cannot_be_deactivated() {
    let (store, scope) = test_scope();
    let permission = scope
        .permissions
        .add(PermissionDto {
            name: "write".to_string(),
            display_name: "Write".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    let commits = store.commit_count();

    assert!(!scope.permissions.set_active(StatusDto::new(permission.id, false)).await);
    assert_eq!(store.commit_count(), commits);
    assert_eq!(
        scope.permissions.get_by_id(permission.id).await.unwrap(),
        Some(permission)
    );
}

#[tokio::test]
async fn test_merge_patches_roles_and_modules() {
    let (_, scope) = test_scope();
    let rol = scope
        .roles
        .add(RolDto {
            type_rol: "admin".to_string(),
            description: Some("Everything".to_string()),
            active: true,
            ..Default::default()
        })
        .await
        .unwrap();
    let module = scope
        .modules
        .add(ModuleDto {
            name: "billing".to_string(),
            active: true,
            ..Default::default()
        })
        .await
        .unwrap();

    let rol = scope
        .roles
        .merge(RolUpdateDto {
            id: rol.id,
            description: Some("Most things".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(rol.type_rol, "admin");
    assert_eq!(rol.description.as_deref(), Some("Most things"));
    assert!(rol.active);

    let merged = scope
        .modules
        .merge(ModuleUpdateDto {
            id: module.id,
            name: Some("invoicing".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(merged.name, "invoicing");
    assert_eq!(merged.create_date, module.create_date);

    let missing = scope
        .roles
        .merge(RolUpdateDto {
            id: 404,
            ..Default::default()
        })
        .await;
    assert!(matches!(missing, Err(ServiceError::NotFound { id: 404, .. })));
}

#[tokio::test]
async fn test_assignments_link_catalog_rows() {
    let (store, scope) = test_scope();
    let user = scope
        .users
        .add(UserDto {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            password: "s3cret-pass".to_string(),
            active: true,
            person_id: 1,
            ..Default::default()
        })
        .await
        .unwrap();
    let rol = scope
        .roles
        .add(RolDto {
            type_rol: "admin".to_string(),
            active: true,
            ..Default::default()
        })
        .await
        .unwrap();
    let module = scope
        .modules
        .add(ModuleDto {
            name: "billing".to_string(),
            active: true,
            ..Default::default()
        })
        .await
        .unwrap();
    let form = scope
        .forms
        .add(FormDto {
            name: "invoice".to_string(),
            active: true,
            ..Default::default()
        })
        .await
        .unwrap();
    let permission = scope
        .permissions
        .add(PermissionDto {
            name: "read".to_string(),
            display_name: "Read".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    scope
        .user_roles
        .add(UserRolDto {
            user_id: user.id,
            rol_id: rol.id,
            ..Default::default()
        })
        .await
        .unwrap();
    scope
        .form_modules
        .add(FormModuleDto {
            form_id: form.id,
            module_id: module.id,
            ..Default::default()
        })
        .await
        .unwrap();
    scope
        .rol_form_permissions
        .add(RolFormPermissionDto {
            rol_id: rol.id,
            form_id: form.id,
            permission_id: permission.id,
            ..Default::default()
        })
        .await
        .unwrap();

    let later = next_request(&store);
    let links = later.user_roles.get_all().await.unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!((links[0].user_id, links[0].rol_id), (user.id, rol.id));
    assert_eq!(later.form_modules.get_all().await.unwrap().len(), 1);
    assert_eq!(later.rol_form_permissions.get_all().await.unwrap().len(), 1);

    assert!(later.users.set_active(StatusDto::new(user.id, false)).await);
    assert!(later.forms.set_active(StatusDto::new(form.id, false)).await);
    assert_eq!(store.row_count::<UserEntity>(), 1);
    assert_eq!(store.row_count::<FormEntity>(), 1);
}

#[tokio::test]
async fn test_store_failure_on_set_active_is_reported_as_false() {
    let (store, scope) = test_scope();
    let module = scope
        .modules
        .add(ModuleDto {
            name: "billing".to_string(),
            active: true,
            ..Default::default()
        })
        .await
        .unwrap();

    store.fail_next_commit();
    assert!(!scope.modules.set_active(StatusDto::new(module.id, false)).await);
    assert!(scope.modules.get_by_id(module.id).await.unwrap().unwrap().active);

    store.fail_next_commit();
    let result = scope.modules.delete(module.id).await;
    assert!(matches!(result, Err(ServiceError::Store(_))));
}

#[tokio::test]
async fn test_user_round_trip_through_json_keeps_stored_password() {
    let (store, scope) = test_scope();
    let created = scope
        .users
        .add(UserDto {
            username: "marta".to_string(),
            email: "marta@example.com".to_string(),
            password: "s3cret-hash".to_string(),
            active: true,
            person_id: 1,
            ..Default::default()
        })
        .await
        .unwrap();

    let fetched = scope.users.get_by_id(created.id).await.unwrap().unwrap();
    let body = serde_json::to_string(&fetched).unwrap();
    let mut edited: UserDto = serde_json::from_str(&body).unwrap();
    assert!(edited.password.is_empty());
    edited.email = "marta@example.org".to_string();

    next_request(&store).users.update(edited).await.unwrap();

    let stored: UserEntity = store.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.email, "marta@example.org");
    assert_eq!(stored.password, "s3cret-hash");
}
