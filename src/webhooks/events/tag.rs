use serde::{Deserialize, Serialize};

use crate::webhooks::events::{Action, Reference, Repository, User};

/// A tag was created or deleted.
///
/// Same shape as [`BranchHook`](crate::webhooks::events::BranchHook), kept apart so the two
/// never get mixed up once serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TagHook {
    pub r#ref: Reference,
    pub repo: Repository,
    pub action: Action,
    pub sender: User,
}
