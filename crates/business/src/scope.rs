//! Request scope wiring.

use anyhow::Context;
use persistence::repositories::Repository;
use persistence::{PgStore, Session, Store};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::Config;
use crate::services::{
    FormModuleService, FormService, ModuleService, PermissionService, PersonService,
    RolFormPermissionService, RolService, Service, UserRolService, UserService,
};

/// Every service for one request, all sharing one session.
///
/// A scope is built per request and dropped with it.
pub struct RequestScope<S = PgStore> {
    session_id: Uuid,
    pub persons: PersonService<S>,
    pub users: UserService<S>,
    pub roles: RolService<S>,
    pub modules: ModuleService<S>,
    pub forms: FormService<S>,
    pub permissions: PermissionService<S>,
    pub user_roles: UserRolService<S>,
    pub form_modules: FormModuleService<S>,
    pub rol_form_permissions: RolFormPermissionService<S>,
}

impl<S: Store> RequestScope<S> {
    /// Opens a fresh session on `store` and builds the services on it.
    pub fn open(store: Arc<S>) -> Self {
        let session = Session::open(store);
        Self {
            session_id: session.id(),
            persons: PersonService::new(session.clone()),
            users: Service::new(Repository::new(session.clone())),
            roles: Service::new(Repository::new(session.clone())),
            modules: Service::new(Repository::new(session.clone())),
            forms: Service::new(Repository::new(session.clone())),
            permissions: Service::new(Repository::new(session.clone())),
            user_roles: Service::new(Repository::new(session.clone())),
            form_modules: Service::new(Repository::new(session.clone())),
            rol_form_permissions: Service::new(Repository::new(session)),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }
}

/// Process-wide handle on the PostgreSQL store.
#[derive(Clone)]
pub struct Backend {
    store: Arc<PgStore>,
}

impl Backend {
    /// Connects the pool described by `config` and applies pending migrations.
    pub async fn connect(config: &Config) -> anyhow::Result<Self> {
        let pool = persistence::db::create_pool(&(&config.database).into())
            .await
            .context("Failed to connect to database")?;

        tracing::info!("Running database migrations...");
        persistence::db::run_migrations(&pool)
            .await
            .context("Failed to run migrations")?;
        tracing::info!("Migrations completed");

        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            store: Arc::new(PgStore::new(pool)),
        }
    }

    pub fn store(&self) -> &Arc<PgStore> {
        &self.store
    }

    /// Opens the scope for one inbound request.
    pub fn begin_request(&self) -> RequestScope {
        persistence::metrics::record_pool_metrics(self.store.pool());
        RequestScope::open(Arc::clone(&self.store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::models::{PermissionDto, RolDto};
    use persistence::MemoryStore;

    #[tokio::test]
    async fn test_scopes_share_the_store_but_not_the_session() {
        let store = Arc::new(MemoryStore::new());
        let first = RequestScope::open(Arc::clone(&store));
        let second = RequestScope::open(Arc::clone(&store));
        assert_ne!(first.session_id(), second.session_id());

        let created = first
            .roles
            .add(RolDto {
                type_rol: "admin".to_string(),
                active: true,
                ..Default::default()
            })
            .await
            .unwrap();

        let seen = second.roles.get_by_id(created.id).await.unwrap();
        assert_eq!(seen, Some(created));
    }

    #[tokio::test]
    async fn test_services_in_a_scope_use_separate_tables() {
        let store = Arc::new(MemoryStore::new());
        let scope = RequestScope::open(Arc::clone(&store));

        scope
            .permissions
            .add(PermissionDto {
                name: "read".to_string(),
                display_name: "Read".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(scope.permissions.get_all().await.unwrap().len(), 1);
        assert!(scope.roles.get_all().await.unwrap().is_empty());
    }
}
