//! Homepage view model.

use serde::Serialize;

use super::package::{DownloadTotals, PackageSummary};

/// Registry-wide stats shown on the homepage, fetched only when the `npmo`
/// flag is off. `total_packages` is None (JSON null) when its best-effort
/// fetch failed; `downloads` has no such fallback, its failure fails the
/// whole aggregate.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryStats {
    pub downloads: DownloadTotals,
    #[serde(rename = "totalPackages")]
    pub total_packages: Option<u64>,
}

/// The merged homepage context. When `stats` is None the `downloads` and
/// `totalPackages` keys are absent from the serialized context entirely,
/// which is how the template distinguishes "skipped" from "unavailable".
#[derive(Debug, Clone, Serialize)]
pub struct HomepageView {
    pub modified: Vec<PackageSummary>,
    pub dependents: Vec<PackageSummary>,
    pub explicit: Vec<PackageSummary>,
    #[serde(flatten)]
    pub stats: Option<RegistryStats>,
}
