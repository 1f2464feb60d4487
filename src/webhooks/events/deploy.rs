use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::webhooks::events::{Reference, Repository, User};

/// A deployment request. Only GitHub sends these for now.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DeployHook {
    /// Provider payload attached to the deployment, passed through untouched.
    pub data: Value,
    pub desc: String,
    pub r#ref: Reference,
    pub repo: Repository,
    pub sender: User,
    pub target: String,
    #[serde(rename = "TargetURL")]
    pub target_url: String,
    pub task: String,
}
