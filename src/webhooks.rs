use std::{any::Any, fmt::Debug, fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

pub mod codec;
pub mod events;
pub mod signing;

pub use codec::{decode, encode};
pub use events::*;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("`{0}` is not a concrete webhook type")]
    UnsupportedVariant(&'static str),
    #[error("unknown webhook type `{0}`")]
    UnknownDiscriminator(String),
    #[error("couldn't decode {kind} payload")]
    PayloadDecode {
        kind: WebhookKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("malformed webhook envelope")]
    Envelope(#[source] serde_json::Error),
    #[error("couldn't encode webhook")]
    Encode(#[source] serde_json::Error),
    #[error("invalid webhook signature")]
    InvalidSignature,
    #[error("no secret available: {0}")]
    Secret(String),
}

/// Common capability of every webhook: the repository it concerns.
///
/// Lets generic code route an event without matching on its concrete type. Only the types of
/// this module can be serialized by [`encode`], any other implementation is rejected there.
pub trait Hook: Any + Debug + Send + Sync {
    fn repository(&self) -> &Repository;

    fn as_any(&self) -> &dyn Any;

    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

macro_rules! impl_hook {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Hook for $ty {
                fn repository(&self) -> &Repository {
                    &self.repo
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )+
    };
}

impl_hook!(
    PushHook,
    BranchHook,
    DeployHook,
    TagHook,
    IssueHook,
    IssueCommentHook,
    PullRequestHook,
    PullRequestCommentHook,
    ReviewCommentHook,
);

/// Discriminator identifying a webhook variant once serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WebhookKind {
    PushHook,
    BranchHook,
    DeployHook,
    TagHook,
    IssueHook,
    IssueCommentHook,
    PullRequestHook,
    PullRequestCommentHook,
    ReviewCommentHook,
}

impl WebhookKind {
    pub const ALL: [WebhookKind; 9] = [
        Self::PushHook,
        Self::BranchHook,
        Self::DeployHook,
        Self::TagHook,
        Self::IssueHook,
        Self::IssueCommentHook,
        Self::PullRequestHook,
        Self::PullRequestCommentHook,
        Self::ReviewCommentHook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PushHook => "pushHook",
            Self::BranchHook => "branchHook",
            Self::DeployHook => "deployHook",
            Self::TagHook => "tagHook",
            Self::IssueHook => "issueHook",
            Self::IssueCommentHook => "issueCommentHook",
            Self::PullRequestHook => "pullRequestHook",
            Self::PullRequestCommentHook => "pullRequestCommentHook",
            Self::ReviewCommentHook => "reviewCommentHook",
        }
    }
}

impl Display for WebhookKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WebhookKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownDiscriminator(s.to_owned()))
    }
}

/// Any webhook of the normalized model.
///
/// Serializes as `{ "type": <kind>, "webhook": <payload> }`, see [`codec`].
#[derive(Debug, Clone, PartialEq)]
pub enum Webhook {
    Push(PushHook),
    Branch(BranchHook),
    Deploy(DeployHook),
    Tag(TagHook),
    Issue(IssueHook),
    IssueComment(IssueCommentHook),
    PullRequest(PullRequestHook),
    PullRequestComment(PullRequestCommentHook),
    ReviewComment(ReviewCommentHook),
}

impl Webhook {
    pub fn kind(&self) -> WebhookKind {
        match self {
            Webhook::Push(_) => WebhookKind::PushHook,
            Webhook::Branch(_) => WebhookKind::BranchHook,
            Webhook::Deploy(_) => WebhookKind::DeployHook,
            Webhook::Tag(_) => WebhookKind::TagHook,
            Webhook::Issue(_) => WebhookKind::IssueHook,
            Webhook::IssueComment(_) => WebhookKind::IssueCommentHook,
            Webhook::PullRequest(_) => WebhookKind::PullRequestHook,
            Webhook::PullRequestComment(_) => WebhookKind::PullRequestCommentHook,
            Webhook::ReviewComment(_) => WebhookKind::ReviewCommentHook,
        }
    }

    /// The wrapped event, as its shared capability.
    pub fn as_hook(&self) -> &dyn Hook {
        match self {
            Webhook::Push(hook) => hook,
            Webhook::Branch(hook) => hook,
            Webhook::Deploy(hook) => hook,
            Webhook::Tag(hook) => hook,
            Webhook::Issue(hook) => hook,
            Webhook::IssueComment(hook) => hook,
            Webhook::PullRequest(hook) => hook,
            Webhook::PullRequestComment(hook) => hook,
            Webhook::ReviewComment(hook) => hook,
        }
    }

    pub fn repository(&self) -> &Repository {
        self.as_hook().repository()
    }
}

impl Hook for Webhook {
    fn repository(&self) -> &Repository {
        Webhook::repository(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

macro_rules! impl_from_hook {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Webhook {
                fn from(hook: $ty) -> Self {
                    Webhook::$variant(hook)
                }
            }
        )+
    };
}

impl_from_hook!(
    PushHook => Push,
    BranchHook => Branch,
    DeployHook => Deploy,
    TagHook => Tag,
    IssueHook => Issue,
    IssueCommentHook => IssueComment,
    PullRequestHook => PullRequest,
    PullRequestCommentHook => PullRequestComment,
    ReviewCommentHook => ReviewComment,
);
