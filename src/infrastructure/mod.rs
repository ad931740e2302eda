//! Outbound collaborators: the HTTP client adapter, resource agents, and the
//! seams for avatar resolution, feature flags, email and content fetching.

pub mod agents;
pub mod avatar;
pub mod corporate;
pub mod email;
pub mod features;
pub mod http_client;
pub mod hubspot;
pub mod logging;

pub use agents::{CustomerAgent, DownloadAgent, OrgAgent, PackageAgent};
pub use avatar::avatar_url;
pub use corporate::CorporatePages;
pub use email::{EmailSender, LogOnlyEmailSender};
pub use features::FeatureFlags;
pub use http_client::{ApiRequest, HttpClient, HttpClientTrait, RawResponse};
pub use hubspot::{HubspotForms, UlaSignup};
