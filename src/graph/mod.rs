//! The compiled graph: the interchange format handed to layout selection and the view.
//!
//! Field names serialize in camelCase and `type` tags in SCREAMING_SNAKE_CASE, since
//! renderer-side collaborators pattern-match on `type` and `uniqueKey`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of node kinds a compiled graph may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NodeType {
    Start,
    End,
    AsyncTask,
    /// Reserved. Condition tasks currently compile to `AsyncTask`.
    Condition,
    Cron,
    Webhook,
    /// Synthetic join point with no task semantics.
    FlowNode,
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NodeType::Start => "START",
            NodeType::End => "END",
            NodeType::AsyncTask => "ASYNC_TASK",
            NodeType::Condition => "CONDITION",
            NodeType::Cron => "CRON",
            NodeType::Webhook => "WEBHOOK",
            NodeType::FlowNode => "FLOW_NODE",
        };
        write!(f, "{}", s)
    }
}

/// Which kind of document a graph was compiled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DslKind {
    /// Tasks form an explicit dependency graph via `needs`.
    #[default]
    Workflow,
    /// Tasks form an implicit chain in declaration order.
    Pipeline,
}

/// What initiates a run. Selects which part of the `trigger` section is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerType {
    Cron,
    Webhook,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub id: String,
    /// At most ten display characters, plus an ellipsis when truncated.
    pub label: String,
    pub description: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Icon lookup key. Never used for identity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unique_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl GraphNode {
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
        node_type: NodeType,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            description: description.into(),
            node_type,
            unique_key: None,
            icon_url: None,
            x: None,
            y: None,
        }
    }

    pub fn with_unique_key(mut self, key: impl Into<String>) -> Self {
        self.unique_key = Some(key.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeType {
    #[default]
    Flow,
}

/// A directed edge, dependency -> dependent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default)]
    pub edge_type: EdgeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl GraphEdge {
    pub fn flow(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            edge_type: EdgeType::Flow,
            label: None,
        }
    }
}

/// The output of one compilation. Replaced wholesale on any DSL change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompiledGraph {
    pub dsl_kind: DslKind,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl CompiledGraph {
    pub fn empty(dsl_kind: DslKind) -> Self {
        Self {
            dsl_kind,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
