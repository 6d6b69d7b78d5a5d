use serde::{Deserialize, Serialize};

/// One entry of the task catalog used for icon resolution.
///
/// Async-task nodes match on `node_type`, webhook nodes match on `webhook`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDefinition {
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub webhook: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
}

impl NodeDefinition {
    pub fn new(node_type: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            webhook: None,
            icon: Some(icon.into()),
        }
    }

    pub fn with_webhook(mut self, webhook: impl Into<String>) -> Self {
        self.webhook = Some(webhook.into());
        self
    }
}
