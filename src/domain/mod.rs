//! Request-scoped value objects and the error taxonomy.

pub mod customer;
pub mod error;
pub mod homepage;
pub mod org;
pub mod package;
pub mod page;

pub use customer::{Customer, Trial};
pub use error::AgentError;
pub use homepage::{HomepageView, RegistryStats};
pub use org::{AggregateOrgView, NewOrg, NewTeam, OrgInfo, OrgPackage, OrgUser, Team};
pub use package::{DownloadTotals, PackageSort, PackageSummary};
pub use page::PagedResult;
