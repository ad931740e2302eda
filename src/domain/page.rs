use serde::{Deserialize, Serialize};

/// One page of a backend listing.
///
/// `page`/`per_page` are request parameters, not part of the page itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagedResult<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

impl<T> PagedResult<T> {
    /// The empty page returned where the backend declines to list at all.
    pub fn empty() -> Self {
        Self {
            count: 0,
            items: Vec::new(),
        }
    }
}

impl<T> Default for PagedResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}
