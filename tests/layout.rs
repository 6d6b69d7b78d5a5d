//! Tests for layout strategy selection and grid sizing.
mod common;
use common::*;
use pretty_assertions::assert_eq;
use zukei::layout::{
    GRID_NODE_SIZE, GRID_OVERLAP_PADDING, GridLayout, HierarchicalLayout, RankDir, grid_columns,
    grid_dimensions, serpentine_weights,
};
use zukei::prelude::*;

#[test]
fn test_grid_column_step_function() {
    assert_eq!(grid_columns(12), 3);
    assert_eq!(grid_columns(13), 5);
    assert_eq!(grid_columns(27), 5);
    assert_eq!(grid_columns(28), 10);
    assert_eq!(grid_columns(100), 10);
}

#[test]
fn test_grid_rows_are_always_odd() {
    for n in 8..=120 {
        let (cols, rows) = grid_dimensions(n);
        assert_eq!(rows % 2, 1, "{} nodes gave {} rows", n, rows);
        assert!(cols * rows >= n, "{} nodes do not fit {}x{}", n, cols, rows);
    }
}

#[test]
fn test_even_rows_are_reduced_and_columns_widened() {
    // 12 nodes in 3 columns is 4 rows, forced down to 3 rows of 4.
    assert_eq!(grid_dimensions(12), (4, 3));
    // 9 nodes in 3 columns is already 3 rows.
    assert_eq!(grid_dimensions(9), (3, 3));
    // 28 nodes in 10 columns is 3 rows.
    assert_eq!(grid_dimensions(28), (10, 3));
}

#[test]
fn test_serpentine_weights() {
    // Row 0 runs left to right, row 1 right to left.
    assert_eq!(serpentine_weights(5, 3), vec![0, -1, -2, -4, -3]);
    assert_eq!(serpentine_weights(6, 3), vec![0, -1, -2, -5, -4, -3]);
    assert_eq!(serpentine_weights(0, 3), Vec::<i64>::new());
}

#[test]
fn test_workflow_always_hierarchical() {
    let layout = select_layout(DslKind::Workflow, 50, GraphDirection::Vertical);
    assert_eq!(
        layout,
        LayoutConfig::Hierarchical(HierarchicalLayout {
            rankdir: RankDir::TB,
            nodesep: 60.0,
            ranksep: 70.0,
            control_points: true,
        })
    );
    assert_eq!(layout.direction(), GraphDirection::Vertical);
}

#[test]
fn test_horizontal_spacing() {
    let layout = select_layout(DslKind::Workflow, 3, GraphDirection::Horizontal);
    let LayoutConfig::Hierarchical(h) = &layout else {
        panic!("expected hierarchical layout, got {:?}", layout);
    };
    assert_eq!(h.rankdir, RankDir::LR);
    assert_eq!(h.nodesep, 35.0);
    assert_eq!(layout.direction(), GraphDirection::Horizontal);
}

#[test]
fn test_small_pipeline_is_hierarchical() {
    let layout = select_layout(DslKind::Pipeline, 7, GraphDirection::Horizontal);
    assert!(matches!(layout, LayoutConfig::Hierarchical(_)));
}

#[test]
fn test_large_pipeline_uses_serpentine_grid() {
    let graph = compile_manual(&pipeline_of(12));
    let layout = select_layout(graph.dsl_kind, graph.nodes.len(), GraphDirection::Horizontal);

    assert_eq!(
        layout,
        LayoutConfig::Grid(GridLayout {
            prevent_overlap: true,
            node_size: GRID_NODE_SIZE,
            prevent_overlap_padding: GRID_OVERLAP_PADDING,
            cols: 4,
            rows: 3,
            order_weights: serpentine_weights(12, 4),
        })
    );
    assert_eq!(layout.direction(), GraphDirection::Vertical);
}

#[test]
fn test_layout_json_shape() {
    let grid = serde_json::to_value(select_layout(
        DslKind::Pipeline,
        8,
        GraphDirection::Horizontal,
    ))
    .unwrap();
    assert_eq!(grid["type"], "grid");
    assert_eq!(grid["preventOverlap"], true);
    assert_eq!(grid["cols"], 3);
    assert_eq!(grid["rows"], 3);

    let dagre =
        serde_json::to_value(select_layout(DslKind::Workflow, 8, GraphDirection::Vertical))
            .unwrap();
    assert_eq!(dagre["type"], "hierarchical");
    assert_eq!(dagre["rankdir"], "TB");
    assert_eq!(dagre["controlPoints"], true);
}
