//! Application state for shared collaborators.

use std::sync::Arc;

use axum::response::{Html, IntoResponse, Response};
use serde_json::Value;

use super::views::ViewRenderer;
use crate::config::AppConfig;
use crate::infrastructure::{
    CorporatePages, CustomerAgent, DownloadAgent, EmailSender, FeatureFlags, HttpClientTrait,
    HubspotForms, OrgAgent, PackageAgent,
};

/// Shared client handle; agents stay generic, the state type-erases.
pub type DynHttpClient = Arc<dyn HttpClientTrait>;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub features: FeatureFlags,
    pub renderer: Arc<dyn ViewRenderer>,
    pub email: Arc<dyn EmailSender>,
    pub http: DynHttpClient,
    pub packages: PackageAgent<DynHttpClient>,
    pub downloads: DownloadAgent<DynHttpClient>,
    pub hubspot: HubspotForms<DynHttpClient>,
    pub corporate: CorporatePages<DynHttpClient>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        http: DynHttpClient,
        renderer: Arc<dyn ViewRenderer>,
        email: Arc<dyn EmailSender>,
    ) -> Self {
        let services = &config.services;

        let packages = PackageAgent::new(
            http.clone(),
            &services.user_api,
            &services.explicit_installs_url,
        );
        let downloads = DownloadAgent::new(http.clone(), &services.downloads_api);
        let hubspot = HubspotForms::new(http.clone(), &services.hubspot_ula_form_url);
        let corporate = CorporatePages::new(http.clone(), &services.corporate_content);
        let features = FeatureFlags::new(config.features.clone());

        Self {
            config: Arc::new(config),
            features,
            renderer,
            email,
            http,
            packages,
            downloads,
            hubspot,
            corporate,
        }
    }

    /// Org agents are built per request: they carry the caller's bearer.
    pub fn org_agent(&self, bearer: impl Into<String>) -> OrgAgent<DynHttpClient> {
        OrgAgent::new(self.http.clone(), &self.config.services.user_api, bearer)
    }

    pub fn customer_agent(&self) -> CustomerAgent<DynHttpClient> {
        CustomerAgent::new(self.http.clone(), &self.config.services.license_api)
    }

    /// Renders a success view as an HTML response.
    pub fn render_page(&self, template: &str, context: &Value) -> Response {
        Html(self.renderer.render(template, context)).into_response()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::collections::HashMap;

    use crate::config::ServicesConfig;
    use crate::infrastructure::{HttpClient, LogOnlyEmailSender};
    use crate::api::views::BasicRenderer;

    /// State wired to a single stub backend, with every service routed to
    /// its own path prefix.
    pub(crate) fn test_state(base_url: &str, features: HashMap<String, bool>) -> AppState {
        let config = AppConfig {
            services: ServicesConfig {
                user_api: base_url.to_string(),
                downloads_api: format!("{base_url}/downloads"),
                license_api: format!("{base_url}/license"),
                corporate_content: format!("{base_url}/content"),
                explicit_installs_url: format!("{base_url}/explicit-installs"),
                hubspot_ula_form_url: format!("{base_url}/hubspot/ula"),
            },
            features,
            ..AppConfig::default()
        };

        AppState::new(
            config,
            Arc::new(HttpClient::new()),
            Arc::new(BasicRenderer),
            Arc::new(LogOnlyEmailSender),
        )
    }
}
