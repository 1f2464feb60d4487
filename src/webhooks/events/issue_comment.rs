use serde::{Deserialize, Serialize};

use crate::webhooks::events::{Action, Comment, Issue, Repository, User};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct IssueCommentHook {
    pub action: Action,
    pub repo: Repository,
    pub issue: Issue,
    pub comment: Comment,
    pub sender: User,
}
