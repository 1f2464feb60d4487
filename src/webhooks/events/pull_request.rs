use serde::{Deserialize, Serialize};

use crate::webhooks::events::{Action, Label, PullRequest, Repository, User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PullRequestHook {
    pub action: Action,
    pub repo: Repository,
    pub label: Label,
    pub pull_request: PullRequest,
    pub sender: User,
    pub changes: PullRequestHookChanges,
    #[serde(rename = "GUID")]
    pub guid: String,
}

impl PullRequestHook {
    /// Previous base branch name, when this event retargeted the pull request.
    pub fn previous_base(&self) -> Option<&str> {
        let from = &self.changes.base.r#ref.from;
        if from.is_empty() {
            None
        } else {
            Some(from)
        }
    }
}

/// Tracks a base branch rename on an edited pull request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PullRequestHookChanges {
    pub base: PullRequestHookBranch,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PullRequestHookBranch {
    pub r#ref: PullRequestHookBranchFrom,
    pub sha: PullRequestHookBranchFrom,
    pub repo: Repository,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PullRequestHookBranchFrom {
    pub from: String,
}
