use serde::{Deserialize, Serialize};

use crate::webhooks::events::{Action, PullRequest, Repository, Review};

// no sender here, the review author is the one who acted
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ReviewCommentHook {
    pub action: Action,
    pub repo: Repository,
    pub pull_request: PullRequest,
    pub review: Review,
}
