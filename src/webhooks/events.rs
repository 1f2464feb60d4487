use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod branch;
mod deploy;
mod issue_comment;
mod issues;
mod pull_request;
mod pull_request_comment;
mod push;
mod review_comment;
mod tag;

pub use branch::*;
pub use deploy::*;
pub use issue_comment::*;
pub use issues::*;
pub use pull_request::*;
pub use pull_request_comment::*;
pub use push::*;
pub use review_comment::*;
pub use tag::*;

/// What happened to the object an event is about.
///
/// Providers use many spellings for the same thing, the normalized model only keeps these.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
    #[serde(rename = "created")]
    Create,
    #[serde(rename = "updated")]
    Update,
    #[serde(rename = "deleted")]
    Delete,
    #[serde(rename = "opened")]
    Open,
    #[serde(rename = "reopened")]
    Reopen,
    #[serde(rename = "closed")]
    Close,
    #[serde(rename = "labeled")]
    Label,
    #[serde(rename = "unlabeled")]
    Unlabel,
    #[serde(rename = "synchronized")]
    Sync,
    #[serde(rename = "merged")]
    Merge,
    #[serde(rename = "reviewed")]
    Review,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct User {
    pub login: String,
    pub name: String,
    pub email: String,
    pub avatar: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Perm {
    pub pull: bool,
    pub push: bool,
    pub admin: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Repository {
    #[serde(rename = "ID")]
    pub id: String,
    pub namespace: String,
    pub name: String,
    pub perm: Option<Perm>,
    pub branch: String,
    pub archived: bool,
    pub private: bool,
    pub visibility: String,
    pub clone: String,
    #[serde(rename = "CloneSSH")]
    pub clone_ssh: String,
    pub link: String,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Repository {
    /// `namespace/name`, or just the name for repositories without a namespace.
    pub fn full_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.namespace, self.name)
        }
    }
}

impl Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

/// A git reference, eg a branch or a tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Reference {
    pub name: String,
    pub path: String,
    pub sha: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Signature {
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
    pub login: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Commit {
    pub sha: String,
    pub message: String,
    pub author: Signature,
    pub committer: Signature,
    pub link: String,
}

/// Label on a PR
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Label {
    #[serde(rename = "URL")]
    pub url: String,
    pub name: String,
    pub description: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub link: String,
    pub labels: Vec<String>,
    pub closed: bool,
    pub locked: bool,
    pub author: User,
    // an issue can be a PR, some providers only tell us through this flag
    pub pull_request: bool,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{} ({})", self.number, self.title)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Comment {
    #[serde(rename = "ID")]
    pub id: u64,
    pub body: String,
    pub author: User,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub sha: String,
    pub r#ref: String,
    pub source: String,
    pub target: String,
    pub fork: String,
    pub link: String,
    pub diff: String,
    pub closed: bool,
    pub merged: bool,
    pub base: Reference,
    pub head: Reference,
    pub author: User,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub labels: Vec<Label>,
}

impl Display for PullRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PR #{}: {} by {}",
            self.number, self.title, self.author.login
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Review {
    #[serde(rename = "ID")]
    pub id: u64,
    pub body: String,
    pub path: String,
    pub sha: String,
    pub line: u64,
    pub link: String,
    pub author: User,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Review {
    pub fn location(&self) -> Option<String> {
        if self.path.is_empty() {
            None
        } else {
            Some(format!("on file {} @ {}", self.path, self.line))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let mut repo = Repository {
            name: "hello-world".to_string(),
            ..Default::default()
        };
        assert_eq!(repo.full_name(), "hello-world");

        repo.namespace = "octocat".to_string();
        assert_eq!(repo.full_name(), "octocat/hello-world");
        assert_eq!(repo.to_string(), "octocat/hello-world");
    }

    #[test]
    fn test_action_names() {
        assert_eq!(serde_json::to_string(&Action::Sync).unwrap(), "\"synchronized\"");
        assert_eq!(
            serde_json::from_str::<Action>("\"opened\"").unwrap(),
            Action::Open
        );
        assert_eq!(Action::default(), Action::Unknown);
    }

    #[test]
    fn test_go_style_field_names() {
        let label = Label {
            url: "https://example.com/labels/bug".to_string(),
            name: "bug".to_string(),
            ..Default::default()
        };
        let value = serde_json::to_value(&label).unwrap();
        assert_eq!(value["URL"], "https://example.com/labels/bug");
        assert_eq!(value["Name"], "bug");

        let repo: Repository =
            serde_json::from_value(serde_json::json!({ "ID": "42", "CloneSSH": "git@x:y" }))
                .unwrap();
        assert_eq!(repo.id, "42");
        assert_eq!(repo.clone_ssh, "git@x:y");
    }

    #[test]
    fn test_review_location() {
        let mut review = Review::default();
        assert_eq!(review.location(), None);

        review.path = "src/lib.rs".to_string();
        review.line = 12;
        assert_eq!(review.location().unwrap(), "on file src/lib.rs @ 12");
    }
}
