//! Client context: every long-lived component, built once at startup.
//!
//! Front ends construct one [`ClientContext`] and hand it out by reference.
//! There are no process-wide singletons; each component receives what it
//! needs through its constructor.

use std::sync::Arc;

use bk_core::domain::value_objects::SessionState;
use bk_core::repositories::CredentialStore;
use bk_core::services::{
    ApiTransport, AuthService, CustomerService, MechanicJobService, MechanicRosterService,
    PaymentService, ServiceCatalogService, SessionController, ShopOrderService, ShopSetupService,
};
use bk_shared::config::{AppConfig, PaymentConfig};
use tracing::info;

use crate::http::HttpApiClient;
use crate::storage::{open_credential_store, FileCredentialStore};
use crate::InfrastructureError;

pub type DefaultTransport = HttpApiClient<FileCredentialStore>;

/// Every role-scoped service module over one shared transport and store
pub struct Services<T, S>
where
    T: ApiTransport,
    S: CredentialStore,
{
    pub auth: Arc<AuthService<T, S>>,
    pub shop_setup: ShopSetupService<T>,
    pub catalog: ServiceCatalogService<T>,
    pub roster: MechanicRosterService<T>,
    pub shop_orders: ShopOrderService<T>,
    pub mechanic_jobs: MechanicJobService<T>,
    pub customer: CustomerService<T, S>,
    pub payment: PaymentService<T>,
}

impl<T, S> Services<T, S>
where
    T: ApiTransport,
    S: CredentialStore,
{
    pub fn new(transport: Arc<T>, store: Arc<S>, payment: PaymentConfig) -> Self {
        Self {
            auth: Arc::new(AuthService::new(transport.clone(), store.clone())),
            shop_setup: ShopSetupService::new(transport.clone()),
            catalog: ServiceCatalogService::new(transport.clone()),
            roster: MechanicRosterService::new(transport.clone()),
            shop_orders: ShopOrderService::new(transport.clone()),
            mechanic_jobs: MechanicJobService::new(transport.clone()),
            customer: CustomerService::new(transport.clone(), store),
            payment: PaymentService::new(transport, payment),
        }
    }
}

pub struct ClientContext {
    config: AppConfig,
    store: Arc<FileCredentialStore>,
    transport: Arc<DefaultTransport>,
    services: Services<DefaultTransport, FileCredentialStore>,
    session: SessionController<DefaultTransport, FileCredentialStore>,
}

impl ClientContext {
    pub fn build(config: AppConfig) -> Result<Self, InfrastructureError> {
        let store = Arc::new(open_credential_store(&config.storage));
        let transport = Arc::new(HttpApiClient::new(config.api.clone(), store.clone())?);
        let services = Services::new(transport.clone(), store.clone(), config.payment.clone());
        let session = SessionController::new(services.auth.clone(), store.clone());

        info!(
            environment = %config.environment,
            namespace = %config.storage.namespace,
            "Client context built"
        );

        Ok(Self {
            config,
            store,
            transport,
            services,
            session,
        })
    }

    /// Resolve the startup session from the credential store
    pub async fn start(&self) -> SessionState {
        self.session.initialize().await
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<FileCredentialStore> {
        &self.store
    }

    pub fn transport(&self) -> &Arc<DefaultTransport> {
        &self.transport
    }

    pub fn services(&self) -> &Services<DefaultTransport, FileCredentialStore> {
        &self.services
    }

    pub fn session(&self) -> &SessionController<DefaultTransport, FileCredentialStore> {
        &self.session
    }
}
