//! Named boolean feature flags.
//!
//! Flags alter which branches of an aggregate run (`npmo` is the one the
//! homepage and error pipeline consult). The set is fixed at startup.

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct FeatureFlags {
    flags: HashMap<String, bool>,
}

impl FeatureFlags {
    pub fn new(flags: HashMap<String, bool>) -> Self {
        Self { flags }
    }

    pub fn enabled(&self, name: &str) -> bool {
        self.flags.get(name).copied().unwrap_or(false)
    }
}
