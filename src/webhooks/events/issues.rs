use serde::{Deserialize, Serialize};

use crate::webhooks::events::{Action, Issue, Repository, User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct IssueHook {
    pub action: Action,
    pub repo: Repository,
    pub issue: Issue,
    pub sender: User,
}
