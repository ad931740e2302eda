//! Org agent: one client per backend organization resource.
//!
//! Every method is a single call through the client adapter plus this
//! endpoint's status table; `get` is the fan-out aggregate over four of them.

use serde_json::{json, Value};

use super::{decode, map_response, StatusTable};
use crate::domain::{
    AgentError, AggregateOrgView, NewOrg, NewTeam, OrgInfo, OrgPackage, OrgUser, PagedResult, Team,
};
use crate::infrastructure::avatar::avatar_url;
use crate::infrastructure::http_client::{ApiRequest, HttpClientTrait};

const PER_PAGE: u32 = 100;

/// Raw value the backend uses to mark an org-sponsored user.
const SPONSORED_BY_ORG: &str = "by-org";

#[derive(Debug, Clone)]
pub struct OrgAgent<C: HttpClientTrait> {
    client: C,
    base_url: String,
    bearer: String,
}

impl<C: HttpClientTrait> OrgAgent<C> {
    /// A bearer token is required; it is forwarded on every call and never
    /// stored anywhere else.
    pub fn new(client: C, base_url: impl Into<String>, bearer: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer: bearer.into(),
        }
    }

    fn org_url(&self, name: &str) -> String {
        format!("{}/org/{}", self.base_url, name)
    }

    fn ensure_scope(name: &str) -> Result<(), AgentError> {
        if name.is_empty() {
            return Err(AgentError::validation("org scope must be a non-empty string"));
        }
        Ok(())
    }

    /// PUT /org
    pub async fn create(&self, org: &NewOrg) -> Result<OrgInfo, AgentError> {
        Self::ensure_scope(&org.scope)?;

        let mut resource = json!({});
        if let Some(human_name) = &org.human_name {
            resource["human_name"] = json!(human_name);
        }

        let request = ApiRequest::put(format!("{}/org", self.base_url))
            .bearer(&self.bearer)
            .body(json!({ "name": org.scope, "resource": resource }));

        let table = StatusTable::new()
            .entry(
                401,
                format!("no bearer token included in creation of {}", org.scope),
            )
            .entry(409, "The provided Org's @scope name is already in use");

        let body = map_response(self.client.execute(request).await?, &table)?;
        decode(body)
    }

    /// GET /org/{name}
    pub async fn get_info(&self, name: &str) -> Result<OrgInfo, AgentError> {
        Self::ensure_scope(name)?;

        let request = ApiRequest::get(self.org_url(name)).bearer(&self.bearer);
        let table = StatusTable::new().entry(404, "Org not found");

        let body = map_response(self.client.execute(request).await?, &table)?;
        decode(body)
    }

    /// POST /org/{name} with the full org object.
    pub async fn update(&self, org: &OrgInfo) -> Result<OrgInfo, AgentError> {
        Self::ensure_scope(&org.name)?;

        let request = ApiRequest::post(self.org_url(&org.name))
            .bearer(&self.bearer)
            .body(serde_json::to_value(org).unwrap_or(Value::Null));

        let table = StatusTable::new()
            .entry(401, "user is unauthorized to modify this organization")
            .entry(404, "org not found");

        let body = map_response(self.client.execute(request).await?, &table)?;
        decode(body)
    }

    /// DELETE /org/{name}
    pub async fn delete(&self, name: &str) -> Result<Value, AgentError> {
        Self::ensure_scope(name)?;

        let request = ApiRequest::delete(self.org_url(name)).bearer(&self.bearer);
        let table = StatusTable::new()
            .entry(401, "user is unauthorized to delete this organization")
            .entry(404, "org not found");

        map_response(self.client.execute(request).await?, &table)
    }

    /// GET /org/{name}/user?per_page=100&page={page}
    pub async fn get_users(&self, name: &str, page: u32) -> Result<PagedResult<OrgUser>, AgentError> {
        Self::ensure_scope(name)?;

        let request = ApiRequest::get(format!("{}/user", self.org_url(name)))
            .bearer(&self.bearer)
            .query("per_page", PER_PAGE)
            .query("page", page);

        let table = StatusTable::new().entry(404, "org not found");

        let body = map_response(self.client.execute(request).await?, &table)?;
        decode(body)
    }

    /// PUT /org/{name}/user
    pub async fn add_user(&self, name: &str, user: &Value) -> Result<OrgUser, AgentError> {
        Self::ensure_scope(name)?;
        if !user.is_object() {
            return Err(AgentError::validation("must pass a user object"));
        }

        let request = ApiRequest::put(format!("{}/user", self.org_url(name)))
            .bearer(&self.bearer)
            .body(user.clone());

        let table = StatusTable::new()
            .entry(
                401,
                "bearer is unauthorized to add this user to this organization",
            )
            .entry(404, "user not found");

        let body = map_response(self.client.execute(request).await?, &table)?;
        decode(body)
    }

    /// DELETE /org/{name}/user/{userId}
    pub async fn remove_user(&self, name: &str, user_id: &str) -> Result<Value, AgentError> {
        Self::ensure_scope(name)?;

        let request = ApiRequest::delete(format!("{}/user/{}", self.org_url(name), user_id))
            .bearer(&self.bearer);

        let table = StatusTable::new().entry(404, "org or user not found");

        map_response(self.client.execute(request).await?, &table)
    }

    /// GET /org/{name}/package?per_page=100&page={page}
    pub async fn get_packages(
        &self,
        name: &str,
        page: u32,
    ) -> Result<PagedResult<OrgPackage>, AgentError> {
        Self::ensure_scope(name)?;

        let request = ApiRequest::get(format!("{}/package", self.org_url(name)))
            .bearer(&self.bearer)
            .query("per_page", PER_PAGE)
            .query("page", page);

        let table = StatusTable::new().entry(404, "org not found");

        let body = map_response(self.client.execute(request).await?, &table)?;
        decode(body)
    }

    /// GET /org/{name}/team?per_page=100&page={page}
    ///
    /// 401 is NOT an error here: team visibility is optional, so an
    /// unauthorized caller gets a successful empty page. Every other method
    /// treats 401 as a failure.
    pub async fn get_teams(&self, name: &str, page: u32) -> Result<PagedResult<Team>, AgentError> {
        Self::ensure_scope(name)?;

        let request = ApiRequest::get(format!("{}/team", self.org_url(name)))
            .bearer(&self.bearer)
            .query("per_page", PER_PAGE)
            .query("page", page);

        let response = self.client.execute(request).await?;
        if response.status == 401 {
            return Ok(PagedResult::empty());
        }

        let table = StatusTable::new().entry(404, "Org or Team not found");

        let body = map_response(response, &table)?;
        decode(body)
    }

    /// PUT /org/{orgScope}/team
    pub async fn add_team(&self, team: &NewTeam) -> Result<Team, AgentError> {
        Self::ensure_scope(&team.org_scope)?;

        let request = ApiRequest::put(format!("{}/team", self.org_url(&team.org_scope)))
            .bearer(&self.bearer)
            .body(json!({
                "scope": team.org_scope,
                "name": team.team_name,
                "description": team.description,
            }));

        let table = StatusTable::new()
            .entry(
                401,
                format!("no bearer token included in adding of team {}", team.team_name),
            )
            .entry(404, "Org not found")
            .entry(409, "The provided Team's name is already in use for this Org");

        let body = map_response(self.client.execute(request).await?, &table)?;
        decode(body)
    }

    /// Fan-out aggregate: info, users, packages and teams fetched
    /// concurrently with no ordering dependency; the first failure fails the
    /// whole view and the remaining branches are dropped. Users come back
    /// annotated with their avatar and sponsorship flag.
    pub async fn get(&self, name: &str) -> Result<AggregateOrgView, AgentError> {
        Self::ensure_scope(name)?;

        let (info, mut users, packages, teams) = tokio::try_join!(
            self.get_info(name),
            self.get_users(name, 0),
            self.get_packages(name, 0),
            self.get_teams(name, 0),
        )?;

        for user in &mut users.items {
            user.avatar = Some(avatar_url(&user.email));
            user.sponsored_by_org = user.sponsored.as_deref() == Some(SPONSORED_BY_ORG);
        }

        Ok(AggregateOrgView {
            info,
            users,
            packages,
            teams,
        })
    }
}
