//! Registry-wide package listings and download totals.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sort orders accepted by the package listing endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageSort {
    Modified,
    Dependents,
}

impl PackageSort {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Modified => "modified",
            Self::Dependents => "dependents",
        }
    }
}

impl std::fmt::Display for PackageSort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A package as shown on listing pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageSummary {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Registry-wide download counts from the downloads service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadTotals {
    pub day: u64,
    pub week: u64,
    pub month: u64,
}
