use serde::{Deserialize, Serialize};

use crate::webhooks::events::{Commit, Repository, User};

/// A push to a branch, commits are kept in push order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PushHook {
    pub r#ref: String,
    pub base_ref: String,
    pub repo: Repository,
    pub before: String,
    pub after: String,
    pub created: bool,
    pub deleted: bool,
    pub forced: bool,
    pub compare: String,
    pub commits: Vec<PushCommit>,
    pub commit: Commit,
    pub sender: User,
    #[serde(rename = "GUID")]
    pub guid: String,
}

impl PushHook {
    /// The branch name when the push targets `refs/heads/<branch>`.
    pub fn branch(&self) -> Option<&str> {
        self.r#ref.strip_prefix("refs/heads/")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PushCommit {
    #[serde(rename = "ID")]
    pub id: String,
    pub message: String,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub modified: Vec<String>,
}

impl PushCommit {
    pub fn title(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch() {
        let mut hook = PushHook {
            r#ref: "refs/heads/main".to_string(),
            ..Default::default()
        };
        assert_eq!(hook.branch(), Some("main"));

        hook.r#ref = "refs/tags/v1.0".to_string();
        assert_eq!(hook.branch(), None);
    }

    #[test]
    fn test_commit_title() {
        let commit = PushCommit {
            message: "fix the thing\n\nlonger explanation".to_string(),
            ..Default::default()
        };
        assert_eq!(commit.title(), "fix the thing");
        assert_eq!(PushCommit::default().title(), "");
    }
}
