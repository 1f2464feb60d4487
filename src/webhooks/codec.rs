//! Type preserving serialization of webhooks.
//!
//! A webhook is stored wrapped in an envelope naming its concrete type:
//!
//! ```json
//! { "type": "pushHook", "webhook": { "Ref": "refs/heads/main", ... } }
//! ```
//!
//! On the way back in the `type` member alone decides which type the payload is decoded into.
//! Unknown members of the payload are ignored and missing ones take their zero value, but a
//! member of the wrong shape fails the whole decode.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use tracing::trace;

use crate::webhooks::{
    BranchHook, DeployHook, Error, Hook, IssueCommentHook, IssueHook, PullRequestCommentHook,
    PullRequestHook, PushHook, ReviewCommentHook, TagHook, Webhook, WebhookKind,
};

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    r#type: WebhookKind,
    webhook: &'a T,
}

#[derive(Deserialize)]
struct RawEnvelope {
    r#type: String,
    webhook: Box<RawValue>,
}

fn envelope<T: Serialize>(kind: WebhookKind, webhook: &T) -> Result<Vec<u8>, Error> {
    trace!("encoding {} envelope", kind);
    serde_json::to_vec(&Envelope {
        r#type: kind,
        webhook,
    })
    .map_err(Error::Encode)
}

/// Serializes any webhook of the model along with its type.
///
/// Fails with [`Error::UnsupportedVariant`] for a [`Hook`] implementation that isn't part of
/// the model.
pub fn encode(hook: &dyn Hook) -> Result<Vec<u8>, Error> {
    let any = hook.as_any();

    if let Some(webhook) = any.downcast_ref::<Webhook>() {
        return webhook.to_json();
    }

    macro_rules! encode_as {
        ($any:ident; $($ty:ty => $kind:ident),+ $(,)?) => {
            $(
                if let Some(hook) = $any.downcast_ref::<$ty>() {
                    return envelope(WebhookKind::$kind, hook);
                }
            )+
        };
    }

    encode_as!(any;
        PushHook => PushHook,
        BranchHook => BranchHook,
        DeployHook => DeployHook,
        TagHook => TagHook,
        IssueHook => IssueHook,
        IssueCommentHook => IssueCommentHook,
        PullRequestHook => PullRequestHook,
        PullRequestCommentHook => PullRequestCommentHook,
        ReviewCommentHook => ReviewCommentHook,
    );

    Err(Error::UnsupportedVariant(hook.type_name()))
}

/// Reads back a webhook serialized by [`encode`].
pub fn decode(bytes: &[u8]) -> Result<Webhook, Error> {
    let RawEnvelope { r#type, webhook } =
        serde_json::from_slice(bytes).map_err(Error::Envelope)?;
    let kind = r#type.parse::<WebhookKind>()?;
    trace!("decoding {} payload", kind);

    Webhook::from_payload(kind, webhook.get())
}

impl Webhook {
    /// Decodes a bare payload, without envelope, as the given kind of webhook.
    pub fn from_payload(kind: WebhookKind, payload: &str) -> Result<Self, Error> {
        let webhook = match kind {
            WebhookKind::PushHook => serde_json::from_str(payload).map(Webhook::Push),
            WebhookKind::BranchHook => serde_json::from_str(payload).map(Webhook::Branch),
            WebhookKind::DeployHook => serde_json::from_str(payload).map(Webhook::Deploy),
            WebhookKind::TagHook => serde_json::from_str(payload).map(Webhook::Tag),
            WebhookKind::IssueHook => serde_json::from_str(payload).map(Webhook::Issue),
            WebhookKind::IssueCommentHook => {
                serde_json::from_str(payload).map(Webhook::IssueComment)
            }
            WebhookKind::PullRequestHook => {
                serde_json::from_str(payload).map(Webhook::PullRequest)
            }
            WebhookKind::PullRequestCommentHook => {
                serde_json::from_str(payload).map(Webhook::PullRequestComment)
            }
            WebhookKind::ReviewCommentHook => {
                serde_json::from_str(payload).map(Webhook::ReviewComment)
            }
        };

        webhook.map_err(|source| Error::PayloadDecode { kind, source })
    }

    /// Serializes this webhook inside its typed envelope.
    pub fn to_json(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(Error::Encode)
    }
}

impl Serialize for Webhook {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let r#type = self.kind();
        match self {
            Webhook::Push(webhook) => Envelope { r#type, webhook }.serialize(serializer),
            Webhook::Branch(webhook) => Envelope { r#type, webhook }.serialize(serializer),
            Webhook::Deploy(webhook) => Envelope { r#type, webhook }.serialize(serializer),
            Webhook::Tag(webhook) => Envelope { r#type, webhook }.serialize(serializer),
            Webhook::Issue(webhook) => Envelope { r#type, webhook }.serialize(serializer),
            Webhook::IssueComment(webhook) => Envelope { r#type, webhook }.serialize(serializer),
            Webhook::PullRequest(webhook) => Envelope { r#type, webhook }.serialize(serializer),
            Webhook::PullRequestComment(webhook) => {
                Envelope { r#type, webhook }.serialize(serializer)
            }
            Webhook::ReviewComment(webhook) => Envelope { r#type, webhook }.serialize(serializer),
        }
    }
}

// The payload is kept as raw JSON until the type is known, so this only works with serde_json.
impl<'de> Deserialize<'de> for Webhook {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let RawEnvelope { r#type, webhook } = RawEnvelope::deserialize(deserializer)?;
        let kind = r#type.parse::<WebhookKind>().map_err(de::Error::custom)?;

        Webhook::from_payload(kind, webhook.get()).map_err(|e| match e {
            Error::PayloadDecode { kind, source } => {
                de::Error::custom(format!("{} payload: {}", kind, source))
            }
            e => de::Error::custom(e),
        })
    }
}
