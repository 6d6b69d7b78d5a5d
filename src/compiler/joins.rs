use super::GraphParts;
use crate::graph::{GraphEdge, GraphNode, NodeType};
use ahash::AHashSet;
use indexmap::IndexMap;
use itertools::Itertools;

/// Merges converging edges into synthetic `FLOW_NODE` join points.
///
/// Edges are grouped by target. Every target fed by more than one edge gets a
/// join key: its source ids, sorted case-insensitively (lowercase first on a
/// case-only tie) and joined with `_`. When two or more
/// targets share a key, their edges are replaced by one join node wired from
/// each source (edge list of the first target) and to every target. A key used
/// by a single target is left alone.
pub(super) fn synthesize_joins(parts: GraphParts) -> GraphParts {
    let GraphParts { mut nodes, edges } = parts;

    let mut by_target: IndexMap<&str, Vec<usize>> = IndexMap::new();
    for (index, edge) in edges.iter().enumerate() {
        by_target
            .entry(edge.target.as_str())
            .or_default()
            .push(index);
    }

    let mut by_key: IndexMap<String, Vec<(&str, &[usize])>> = IndexMap::new();
    for (target, indices) in &by_target {
        if indices.len() < 2 {
            continue;
        }
        let key = indices
            .iter()
            .map(|&i| edges[i].source.as_str())
            .sorted_by(|a, b| {
                a.to_lowercase()
                    .cmp(&b.to_lowercase())
                    .then_with(|| b.cmp(a))
            })
            .join("_");
        by_key
            .entry(key)
            .or_default()
            .push((*target, indices.as_slice()));
    }

    let mut removed: AHashSet<usize> = AHashSet::new();
    let mut added: Vec<GraphEdge> = Vec::new();

    for (key, groups) in &by_key {
        if groups.len() < 2 {
            continue;
        }

        nodes.push(GraphNode::new(key.as_str(), "", "", NodeType::FlowNode));

        let (_, template) = groups[0];
        added.extend(template.iter().map(|&i| GraphEdge {
            target: key.clone(),
            ..edges[i].clone()
        }));

        for (target, indices) in groups {
            removed.extend(indices.iter().copied());
            added.push(GraphEdge::flow(key.as_str(), *target));
        }
    }

    if !removed.is_empty() {
        tracing::debug!(
            join_nodes = by_key.values().filter(|g| g.len() > 1).count(),
            removed_edges = removed.len(),
            "synthesized join nodes"
        );
    }

    let edges = edges
        .iter()
        .enumerate()
        .filter(|(i, _)| !removed.contains(i))
        .map(|(_, edge)| edge.clone())
        .chain(added)
        .collect();

    GraphParts { nodes, edges }
}
