use serde::{Deserialize, Serialize};

use crate::webhooks::events::{Action, Comment, PullRequest, Repository, User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PullRequestCommentHook {
    pub action: Action,
    pub repo: Repository,
    pub pull_request: PullRequest,
    pub comment: Comment,
    pub sender: User,
}
