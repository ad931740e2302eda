//! Homepage handler and its fan-out aggregate.

use std::time::Duration;

use axum::extract::State;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use tracing::error;

use crate::api::extract::CorrelationId;
use crate::api::state::AppState;
use crate::domain::{AgentError, HomepageView, PackageSort, RegistryStats};

const MINUTE: u64 = 60; // seconds
const MODIFIED_TTL: Duration = Duration::from_secs(MINUTE);
const DEPENDENTS_TTL: Duration = Duration::from_secs(30 * MINUTE);
const LIST_COUNT: u32 = 12;

/// GET /
pub async fn show_homepage(
    State(state): State<AppState>,
    CorrelationId(correlation_id): CorrelationId,
) -> Response {
    match build_view(&state).await {
        Ok(view) => {
            let context = serde_json::to_value(&view).unwrap_or(Value::Null);
            state.render_page("homepage", &context)
        }
        Err(err) => state.error_page(&err, &correlation_id).into_response(),
    }
}

/// Builds the homepage context.
///
/// The flag decides the branch set once, before any future exists: under
/// `npmo` the downloads and total-count requests are never constructed, not
/// merely discarded. The total-count branch alone is best-effort; its
/// failure logs and yields null while a downloads failure fails the whole
/// aggregate.
pub(crate) async fn build_view(state: &AppState) -> Result<HomepageView, AgentError> {
    let include_stats = !state.features.enabled("npmo");

    let modified = state
        .packages
        .list(PackageSort::Modified, LIST_COUNT, MODIFIED_TTL);
    let dependents = state
        .packages
        .list(PackageSort::Dependents, LIST_COUNT, DEPENDENTS_TTL);
    let explicit = state.packages.explicit_installs();

    if include_stats {
        let downloads = state.downloads.get_all();
        let total_packages = async {
            match state.packages.count().await {
                Ok(count) => Ok::<_, AgentError>(Some(count)),
                Err(err) => {
                    error!(error = %err, "total package count unavailable");
                    Ok(None)
                }
            }
        };

        let (modified, dependents, explicit, downloads, total_packages) =
            tokio::try_join!(modified, dependents, explicit, downloads, total_packages)?;

        Ok(HomepageView {
            modified,
            dependents,
            explicit,
            stats: Some(RegistryStats {
                downloads,
                total_packages,
            }),
        })
    } else {
        let (modified, dependents, explicit) = tokio::try_join!(modified, dependents, explicit)?;

        Ok(HomepageView {
            modified,
            dependents,
            explicit,
            stats: None,
        })
    }
}
