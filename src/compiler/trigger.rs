use super::GraphParts;
use crate::dsl::TriggerSpec;
use crate::graph::{DslKind, GraphEdge, GraphNode, NodeType, TriggerType};

pub const CRON_NODE_ID: &str = "CRON";
pub const DEFAULT_WEBHOOK_ID: &str = "webhook";

/// A trigger resolved from the DSL `trigger` section and the caller's trigger type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    Cron { schedule: String },
    /// `None` when the document names no webhook.
    Webhook { name: Option<String> },
}

impl Trigger {
    /// Returns `None` when there is nothing to draw: a manual trigger, or a cron
    /// trigger without a schedule.
    pub fn resolve(trigger_type: TriggerType, spec: Option<&TriggerSpec>) -> Option<Self> {
        match trigger_type {
            TriggerType::Cron => spec
                .and_then(|s| s.schedule.as_deref())
                .filter(|s| !s.is_empty())
                .map(|schedule| Trigger::Cron {
                    schedule: schedule.to_string(),
                }),
            TriggerType::Webhook => {
                // The namespace after `@` is not part of the node's identity.
                let name = spec
                    .and_then(|s| s.webhook.as_deref())
                    .and_then(|w| w.split('@').next())
                    .filter(|w| !w.is_empty())
                    .map(str::to_string);
                Some(Trigger::Webhook { name })
            }
            TriggerType::Manual => None,
        }
    }

    fn node(&self) -> GraphNode {
        match self {
            Trigger::Cron { schedule } => {
                GraphNode::new(CRON_NODE_ID, "cron", schedule.as_str(), NodeType::Cron)
            }
            Trigger::Webhook { name: Some(name) } => {
                GraphNode::new(name.as_str(), name.as_str(), name.as_str(), NodeType::Webhook)
                    .with_unique_key(name.as_str())
            }
            Trigger::Webhook { name: None } => GraphNode::new(
                DEFAULT_WEBHOOK_ID,
                DEFAULT_WEBHOOK_ID,
                DEFAULT_WEBHOOK_ID,
                NodeType::Webhook,
            ),
        }
    }
}

/// Inserts the trigger node first and wires it into the graph's entry node:
/// the `START` node of a workflow, or the first task of a pipeline.
pub(super) fn inject_trigger(
    parts: GraphParts,
    trigger: Option<Trigger>,
    dsl_kind: DslKind,
) -> GraphParts {
    let Some(trigger) = trigger else {
        return parts;
    };

    let entry = match dsl_kind {
        DslKind::Workflow => parts.nodes.iter().find(|n| n.node_type == NodeType::Start),
        DslKind::Pipeline => parts.nodes.first(),
    };
    let Some(entry_id) = entry.map(|n| n.id.clone()) else {
        tracing::warn!(?trigger, ?dsl_kind, "no entry node to wire the trigger to, skipping");
        return parts;
    };

    let trigger_node = trigger.node();
    tracing::debug!(trigger = %trigger_node.id, entry = %entry_id, "injecting trigger node");

    let edge = GraphEdge::flow(trigger_node.id.as_str(), entry_id);
    let nodes = std::iter::once(trigger_node).chain(parts.nodes).collect();
    let edges = parts.edges.into_iter().chain(std::iter::once(edge)).collect();

    GraphParts { nodes, edges }
}
