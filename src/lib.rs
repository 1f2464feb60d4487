//! Normalized source control webhooks, and a serialization format that remembers which kind of
//! webhook was stored.

pub mod config;
pub mod webhooks;

pub use webhooks::{decode, encode, Error, Hook, Webhook, WebhookKind};
