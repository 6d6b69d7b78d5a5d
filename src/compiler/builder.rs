use super::{GraphParts, MAX_LABEL_LENGTH, SHELL_NODE_TYPE};
use crate::dsl::RawTaskSpec;
use crate::graph::{GraphEdge, GraphNode, NodeType};

/// Builds the base nodes and edges of a workflow: one node per task, one edge
/// per `needs` entry, directed `need -> ref`.
pub(super) fn build_workflow(tasks: &[RawTaskSpec]) -> GraphParts {
    let mut nodes = Vec::with_capacity(tasks.len());
    let mut edges = Vec::new();

    for task in tasks {
        nodes.push(task_node(task));
        edges.extend(
            task.needs
                .iter()
                .map(|need| GraphEdge::flow(need.as_str(), task.reference.as_str())),
        );
    }

    GraphParts { nodes, edges }
}

/// Builds a pipeline: every task is an async task, chained in declaration order.
pub(super) fn build_pipeline(tasks: &[RawTaskSpec]) -> GraphParts {
    let nodes: Vec<GraphNode> = tasks
        .iter()
        .map(|task| {
            GraphNode::new(
                task.reference.as_str(),
                truncate_label(task.display_name()),
                task.display_name(),
                NodeType::AsyncTask,
            )
            .with_unique_key(task_unique_key(task))
        })
        .collect();

    let edges = nodes
        .windows(2)
        .map(|pair| GraphEdge::flow(pair[0].id.as_str(), pair[1].id.as_str()))
        .collect();

    GraphParts { nodes, edges }
}

fn task_node(task: &RawTaskSpec) -> GraphNode {
    let label = truncate_label(task.display_name());
    let tag = task.task.trim();

    if tag.eq_ignore_ascii_case("start") {
        GraphNode::new(task.reference.as_str(), label, task.display_name(), NodeType::Start)
    } else if tag.eq_ignore_ascii_case("end") {
        GraphNode::new(task.reference.as_str(), label, task.display_name(), NodeType::End)
    } else {
        GraphNode::new(
            task.reference.as_str(),
            label,
            task.display_name(),
            NodeType::AsyncTask,
        )
        .with_unique_key(task_unique_key(task))
    }
}

/// Icon lookup key: the shell marker for image-based tasks, else the task tag.
fn task_unique_key(task: &RawTaskSpec) -> String {
    match task.image.as_deref() {
        Some(image) if !image.is_empty() => SHELL_NODE_TYPE.to_string(),
        _ => task.task.clone(),
    }
}

/// Shortens `text` to [`MAX_LABEL_LENGTH`] characters followed by `...`.
pub fn truncate_label(text: &str) -> String {
    if text.chars().count() > MAX_LABEL_LENGTH {
        let head: String = text.chars().take(MAX_LABEL_LENGTH).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}
