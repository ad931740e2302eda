//! Package agent: registry-wide package listings for the homepage.
//!
//! Listing responses are cached in-process with a per-call freshness window
//! (the homepage uses 60 s for recently-modified, 30 min for
//! most-depended-upon). Entries carry their own deadline and are expired
//! lazily on read.

use std::time::Duration;

use moka::future::Cache;

use super::{decode, map_response, StatusTable};
use crate::domain::{AgentError, PackageSort, PackageSummary};
use crate::infrastructure::http_client::{ApiRequest, HttpClientTrait};

#[derive(Debug, Clone)]
struct CachedListing {
    packages: Vec<PackageSummary>,
    expires_at: u64,
}

#[derive(Debug, Clone)]
pub struct PackageAgent<C: HttpClientTrait> {
    client: C,
    base_url: String,
    explicit_installs_url: String,
    cache: Cache<String, CachedListing>,
}

impl<C: HttpClientTrait> PackageAgent<C> {
    pub fn new(
        client: C,
        base_url: impl Into<String>,
        explicit_installs_url: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            explicit_installs_url: explicit_installs_url.into(),
            cache: Cache::builder().max_capacity(64).build(),
        }
    }

    fn now_millis() -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }

    fn is_expired(entry: &CachedListing) -> bool {
        Self::now_millis() > entry.expires_at
    }

    /// GET /package?sort={sort}&count={count}, cached for `ttl`.
    pub async fn list(
        &self,
        sort: PackageSort,
        count: u32,
        ttl: Duration,
    ) -> Result<Vec<PackageSummary>, AgentError> {
        let key = format!("{sort}:{count}");

        if let Some(entry) = self.cache.get(&key).await {
            if !Self::is_expired(&entry) {
                return Ok(entry.packages);
            }
            self.cache.remove(&key).await;
        }

        let request = ApiRequest::get(format!("{}/package", self.base_url))
            .query("sort", sort)
            .query("count", count);

        let body = map_response(self.client.execute(request).await?, &StatusTable::new())?;
        let packages: Vec<PackageSummary> = decode(body)?;

        self.cache
            .insert(
                key,
                CachedListing {
                    packages: packages.clone(),
                    expires_at: Self::now_millis() + ttl.as_millis() as u64,
                },
            )
            .await;

        Ok(packages)
    }

    /// GET /package/-/count: the registry-wide package total. Never cached;
    /// the homepage treats this branch as best-effort.
    pub async fn count(&self) -> Result<u64, AgentError> {
        let request = ApiRequest::get(format!("{}/package/-/count", self.base_url));
        let body = map_response(self.client.execute(request).await?, &StatusTable::new())?;
        decode(body)
    }

    /// The curated "explicit installs" payload, served from its own URL.
    pub async fn explicit_installs(&self) -> Result<Vec<PackageSummary>, AgentError> {
        let request = ApiRequest::get(&self.explicit_installs_url);
        let body = map_response(self.client.execute(request).await?, &StatusTable::new())?;
        decode(body)
    }
}
