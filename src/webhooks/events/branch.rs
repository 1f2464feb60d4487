use serde::{Deserialize, Serialize};

use crate::webhooks::events::{Action, Reference, Repository, User};

/// A branch was created or deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct BranchHook {
    pub r#ref: Reference,
    pub repo: Repository,
    pub action: Action,
    pub sender: User,
}
