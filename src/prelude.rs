//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the zukei crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use zukei::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let dsl = std::fs::read_to_string("path/to/workflow.yaml")?;
//! let graph = compile(Some(dsl.as_str()), Some(TriggerType::Manual), None)?;
//! println!("{} nodes, {} edges", graph.nodes.len(), graph.edges.len());
//! # Ok(())
//! # }
//! ```

// Compilation
pub use crate::catalog::NodeDefinition;
pub use crate::compiler::{Compiler, compile};
pub use crate::graph::{
    CompiledGraph, DslKind, EdgeType, GraphEdge, GraphNode, NodeType, TriggerType,
};

// Layout and viewing
pub use crate::config::ViewerConfig;
pub use crate::layout::{GraphDirection, LayoutConfig, select_layout};
pub use crate::record::{ExecutionRecordSource, TaskExecutionRecord, TaskStatus};
pub use crate::renderer::{BBox, GraphRenderer, ItemRef, ItemState, Point, RenderBackend, Size};
pub use crate::tool::{EditorCanvas, ZoomTool, ZoomType};
pub use crate::view::{GraphView, NodeHoverInfo, ViewOptions};

// Error types
pub use crate::error::{CompileError, ConfigError, DslError, RenderError, ViewError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
