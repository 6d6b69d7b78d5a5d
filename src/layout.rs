//! Layout Strategy Selector: hierarchical vs. grid, with derived spacing.

use crate::graph::DslKind;
use serde::{Deserialize, Serialize};

/// Graphs with fewer nodes than this always use the hierarchical layout.
pub const HIERARCHY_NODE_THRESHOLD: usize = 8;

/// Spacing between nodes of the same rank, top-to-bottom.
pub const NODE_SEP_VERTICAL: f64 = 60.0;
/// Spacing between nodes of the same rank, left-to-right.
pub const NODE_SEP_HORIZONTAL: f64 = 35.0;
pub const RANK_SEP: f64 = 70.0;

/// Node diameter used by the grid layout's collision detection.
pub const GRID_NODE_SIZE: f64 = 60.0;
pub const GRID_OVERLAP_PADDING: f64 = 130.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GraphDirection {
    #[default]
    Horizontal,
    Vertical,
}

/// Rank direction of a hierarchical layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RankDir {
    /// Left to right.
    LR,
    /// Top to bottom.
    TB,
}

impl From<GraphDirection> for RankDir {
    fn from(direction: GraphDirection) -> Self {
        match direction {
            GraphDirection::Horizontal => RankDir::LR,
            GraphDirection::Vertical => RankDir::TB,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HierarchicalLayout {
    pub rankdir: RankDir,
    /// Spacing between nodes within a rank.
    pub nodesep: f64,
    /// Spacing between adjacent ranks.
    pub ranksep: f64,
    /// Keep control points of routed edges.
    pub control_points: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridLayout {
    pub prevent_overlap: bool,
    pub node_size: f64,
    pub prevent_overlap_padding: f64,
    pub cols: usize,
    pub rows: usize,
    /// Ordering weight per node, indexed by the node's position in the graph.
    pub order_weights: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum LayoutConfig {
    Hierarchical(HierarchicalLayout),
    Grid(GridLayout),
}

impl LayoutConfig {
    /// Horizontal only for a left-to-right hierarchical layout.
    pub fn direction(&self) -> GraphDirection {
        match self {
            LayoutConfig::Hierarchical(HierarchicalLayout {
                rankdir: RankDir::LR,
                ..
            }) => GraphDirection::Horizontal,
            _ => GraphDirection::Vertical,
        }
    }
}

/// Chooses the layout for a compiled graph.
///
/// Workflows and small graphs are laid out hierarchically; larger pipelines use a
/// serpentine grid so the declaration order reads as a back-and-forth path.
pub fn select_layout(
    dsl_kind: DslKind,
    node_count: usize,
    direction: GraphDirection,
) -> LayoutConfig {
    if dsl_kind == DslKind::Workflow || node_count < HIERARCHY_NODE_THRESHOLD {
        let rankdir = RankDir::from(direction);
        tracing::debug!(?rankdir, node_count, "selected hierarchical layout");
        return LayoutConfig::Hierarchical(HierarchicalLayout {
            rankdir,
            nodesep: match rankdir {
                RankDir::TB => NODE_SEP_VERTICAL,
                RankDir::LR => NODE_SEP_HORIZONTAL,
            },
            ranksep: RANK_SEP,
            control_points: true,
        });
    }

    let (cols, rows) = grid_dimensions(node_count);
    tracing::debug!(cols, rows, node_count, "selected grid layout");

    LayoutConfig::Grid(GridLayout {
        prevent_overlap: true,
        node_size: GRID_NODE_SIZE,
        prevent_overlap_padding: GRID_OVERLAP_PADDING,
        cols,
        rows,
        order_weights: serpentine_weights(node_count, cols),
    })
}

/// Column count as a step function of node count.
pub fn grid_columns(node_count: usize) -> usize {
    match node_count {
        n if n < 13 => 3,
        n if n < 28 => 5,
        _ => 10,
    }
}

/// Final `(cols, rows)`. An even row count is reduced by one and the columns
/// recomputed, so the row count is always odd.
pub fn grid_dimensions(node_count: usize) -> (usize, usize) {
    let mut cols = grid_columns(node_count);
    let mut rows = node_count.div_ceil(cols);

    if rows > 0 && rows % 2 == 0 {
        rows -= 1;
        cols = node_count.div_ceil(rows);
    }

    (cols, rows)
}

/// Ordering weights for a boustrophedon walk: even rows run left to right,
/// odd rows right to left. Weights are negated so that earlier nodes sort first.
pub fn serpentine_weights(node_count: usize, cols: usize) -> Vec<i64> {
    let cols = cols.max(1);
    let mut weights = vec![0i64; node_count];

    for (row, start) in (0..node_count).step_by(cols).enumerate() {
        let len = cols.min(node_count - start);
        for k in 0..len {
            let j = if row % 2 == 0 { k } else { len - 1 - k };
            weights[start + k] = -((row * cols + j) as i64);
        }
    }

    weights
}
