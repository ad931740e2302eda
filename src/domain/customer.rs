//! Enterprise customer records from the license service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An on-site trial; the verification key goes into the signup email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trial {
    pub verification_key: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
