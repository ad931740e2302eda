//! Corporate content pages served from markdown repositories.
//!
//! Page names are validated before any fetch; content comes from the
//! configured raw-content host and is converted to HTML on the way out.

use once_cell::sync::Lazy;
use pulldown_cmark::{html, Parser};
use regex::Regex;
use serde_json::Value;

use crate::domain::AgentError;
use crate::infrastructure::agents::{map_response, StatusTable};
use crate::infrastructure::http_client::{ApiRequest, HttpClientTrait};

static PAGE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9-_]+$").expect("valid page-name pattern"));

const STATIC_PAGES_REPO: &str = "static-pages";
const POLICIES_REPO: &str = "policies";
const BRANCH: &str = "master";

#[derive(Debug, Clone)]
pub struct CorporatePages<C: HttpClientTrait> {
    client: C,
    content_host: String,
}

impl<C: HttpClientTrait> CorporatePages<C> {
    /// `content_host` points at the raw-content root for the org, e.g.
    /// `https://raw.githubusercontent.com/npm`.
    pub fn new(client: C, content_host: impl Into<String>) -> Self {
        Self {
            client,
            content_host: content_host.into().trim_end_matches('/').to_string(),
        }
    }

    /// A static corporate page (about, jobs, ...), rendered to HTML.
    pub async fn static_page(&self, name: &str) -> Result<String, AgentError> {
        self.fetch_page(STATIC_PAGES_REPO, name).await
    }

    /// A policy document, rendered to HTML.
    pub async fn policy_page(&self, name: &str) -> Result<String, AgentError> {
        self.fetch_page(POLICIES_REPO, name).await
    }

    async fn fetch_page(&self, repo: &str, name: &str) -> Result<String, AgentError> {
        if !PAGE_NAME.is_match(name) {
            return Err(AgentError::validation(format!(
                "invalid page name '{name}'"
            )));
        }

        let url = format!("{}/{}/{}/{}.md", self.content_host, repo, BRANCH, name);
        let response = self.client.execute(ApiRequest::get(url)).await?;

        // The raw-content host answers missing paths with a 200 "Not Found"
        // text body as well as real 404s; both mean the page does not exist.
        if response.body == Value::String("Not Found".to_string()) {
            return Err(AgentError::status(404, format!("page '{name}' not found")));
        }

        let body = map_response(response, &StatusTable::new())?;
        let markdown = match body {
            Value::String(s) => s,
            other => other.to_string(),
        };

        Ok(render_markdown(&markdown))
    }
}

fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::infrastructure::http_client::HttpClient;

    fn pages(server: &MockServer) -> CorporatePages<HttpClient> {
        CorporatePages::new(HttpClient::new(), server.uri())
    }

    #[tokio::test]
    async fn test_static_page_renders_markdown() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/static-pages/master/jobs.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("# Jobs\n\nCome work here."))
            .mount(&server)
            .await;

        let html = pages(&server).static_page("jobs").await.unwrap();
        assert!(html.contains("<h1>Jobs</h1>"));
        assert!(html.contains("<p>Come work here.</p>"));
    }

    #[tokio::test]
    async fn test_policy_page_uses_policies_repo() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/policies/master/privacy.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("privacy text"))
            .mount(&server)
            .await;

        let html = pages(&server).policy_page("privacy").await.unwrap();
        assert!(html.contains("privacy text"));
    }

    #[tokio::test]
    async fn test_invalid_name_rejected_before_fetch() {
        let server = MockServer::start().await;
        let err = pages(&server).static_page("../secrets").await.unwrap_err();
        assert!(matches!(err, AgentError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_not_found_body_maps_to_404() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/static-pages/master/ghost.md"))
            .respond_with(ResponseTemplate::new(200).set_body_string("Not Found"))
            .mount(&server)
            .await;

        let err = pages(&server).static_page("ghost").await.unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
