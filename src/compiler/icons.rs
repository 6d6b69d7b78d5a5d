use super::{GraphParts, SHELL_NODE_TYPE};
use crate::catalog::NodeDefinition;
use crate::graph::{GraphNode, NodeType};
use ahash::AHashMap;

/// Assigns `icon_url` from the task catalog.
///
/// Shell tasks always get `shell_icon`. Webhook nodes match a catalog entry by
/// `webhook`, async tasks by `type`; the first matching entry wins. Anything
/// unmatched is left without an icon.
pub(super) fn resolve_icons(
    parts: GraphParts,
    catalog: &[NodeDefinition],
    shell_icon: &str,
) -> GraphParts {
    let mut by_type: AHashMap<&str, &NodeDefinition> = AHashMap::new();
    let mut by_webhook: AHashMap<&str, &NodeDefinition> = AHashMap::new();
    for definition in catalog {
        by_type
            .entry(definition.node_type.as_str())
            .or_insert(definition);
        if let Some(webhook) = definition.webhook.as_deref() {
            by_webhook.entry(webhook).or_insert(definition);
        }
    }

    let nodes = parts
        .nodes
        .into_iter()
        .map(|node| {
            let icon_url = match node.unique_key.as_deref() {
                None => return node,
                Some(SHELL_NODE_TYPE) => Some(shell_icon.to_string()),
                Some(key) => match node.node_type {
                    NodeType::Webhook => by_webhook.get(key).and_then(|d| d.icon.clone()),
                    NodeType::AsyncTask => by_type.get(key).and_then(|d| d.icon.clone()),
                    _ => None,
                },
            };
            GraphNode { icon_url, ..node }
        })
        .collect();

    GraphParts {
        nodes,
        edges: parts.edges,
    }
}
