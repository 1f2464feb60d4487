use std::collections::HashMap;

use serde::Deserialize;

use crate::webhooks::{Error, Repository};

#[derive(Debug, Default, Clone, Deserialize)]
pub struct HooksConfig {
    /// Secret used for repositories without a secret of their own
    #[serde(default)]
    pub default_secret: Option<String>,
    /// Per repository secrets, keyed by the repository's full name (`namespace/name`)
    #[serde(default)]
    pub secrets: HashMap<String, String>,
}

impl HooksConfig {
    pub fn secret_for(&self, repo: &Repository) -> Result<String, Error> {
        let full_name = repo.full_name();
        self.secrets
            .get(&full_name)
            .or(self.default_secret.as_ref())
            .cloned()
            .ok_or_else(|| Error::Secret(format!("no secret configured for `{}`", full_name)))
    }
}
