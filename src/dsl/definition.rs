use serde::Deserialize;

/// The structural form of a DSL document, before any graph semantics are applied.
///
/// A well-formed document populates exactly one of `workflow` / `pipeline`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct DslDocument {
    #[serde(default)]
    pub trigger: Option<TriggerSpec>,
    #[serde(default)]
    pub workflow: Option<Vec<RawTaskSpec>>,
    #[serde(default)]
    pub pipeline: Option<Vec<RawTaskSpec>>,
}

/// A single task entry as it appears in a `workflow` or `pipeline` section.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RawTaskSpec {
    /// Stable identity, used for edges.
    #[serde(rename = "ref")]
    pub reference: String,
    /// Display hint. Falls back to `reference` when absent.
    #[serde(default)]
    pub name: Option<String>,
    /// Task-type tag, or one of the reserved `start` / `end` / `condition` tags.
    pub task: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub needs: Vec<String>,
}

impl RawTaskSpec {
    /// The text a node shows for this task: `name`, else `ref`.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.reference)
    }
}

/// The `trigger` section. Which field is consulted depends on the trigger type
/// the caller compiles with.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct TriggerSpec {
    /// Cron expression.
    #[serde(default)]
    pub schedule: Option<String>,
    /// Webhook identifier, optionally `<name>@<namespace>`.
    #[serde(default)]
    pub webhook: Option<String>,
}
