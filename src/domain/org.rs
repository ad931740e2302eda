//! Organization models as served by the user API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::page::PagedResult;

/// Org metadata from `GET /org/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgInfo {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A member of an org, annotated for display.
///
/// `avatar` and `sponsoredByOrg` are derived by the aggregate, not sent by
/// the backend; `sponsored` is the backend's raw value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgUser {
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sponsored: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, rename = "sponsoredByOrg")]
    pub sponsored_by_org: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A package owned by an org.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgPackage {
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A team within an org.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parameters for creating an org.
#[derive(Debug, Clone, Deserialize)]
pub struct NewOrg {
    pub scope: String,
    #[serde(default)]
    pub human_name: Option<String>,
}

/// Parameters for adding a team to an org.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTeam {
    /// Overwritten from the request path; optional in payloads.
    #[serde(default)]
    pub org_scope: String,
    pub team_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Composite view of an org: metadata plus its users, packages and teams,
/// fetched concurrently and merged. Built fresh per request, never cached.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateOrgView {
    pub info: OrgInfo,
    pub users: PagedResult<OrgUser>,
    pub packages: PagedResult<OrgPackage>,
    pub teams: PagedResult<Team>,
}
