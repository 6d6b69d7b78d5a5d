//! # Zukei - Workflow DSL Graph Compiler and Viewer Core
//!
//! **Zukei** turns declarative CI/CD-style workflow and pipeline definitions, written in a
//! YAML DSL, into directed graphs ready for automatic layout, and drives a rendered graph's
//! zoom, fit and status highlighting.
//!
//! ## Core Workflow
//!
//! 1.  **Compile**: Use `Compiler::builder` to create a compiler, optionally with a task
//!     catalog for icon resolution, and compile DSL text for a trigger type. Converging
//!     workflow edges get synthetic join nodes; cron and webhook triggers get their own
//!     entry node.
//! 2.  **Choose a Layout**: `select_layout` picks a hierarchical layout for workflows and
//!     small graphs, and a serpentine grid for larger pipelines.
//! 3.  **View**: Mount the graph on a renderer through `GraphView`. The renderer itself is
//!     supplied by the host through the `RenderBackend` and `GraphRenderer` traits.
//! 4.  **Reflect Execution**: Feed task execution records to `update_node_states` and
//!     highlight a status with `highlight_node_state`.
//!
//! ## Quick Start
//!
//! ```rust
//! use zukei::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let dsl = r#"
//! trigger:
//!   schedule: "0 0 * * *"
//! workflow:
//!   - ref: start
//!     task: start
//!   - ref: checkout
//!     task: git-clone
//!     needs: [start]
//!   - ref: build
//!     name: Build the project
//!     task: maven
//!     needs: [checkout]
//!   - ref: end
//!     task: end
//!     needs: [build]
//! "#;
//!
//!     let compiler = Compiler::builder().build();
//!     let graph = compiler.compile(Some(dsl), Some(TriggerType::Cron))?;
//!
//!     // The cron node feeds the start node.
//!     assert_eq!(graph.nodes[0].node_type, NodeType::Cron);
//!     assert_eq!(graph.node("build").map(|n| n.label.as_str()), Some("Build the ..."));
//!
//!     let layout = select_layout(graph.dsl_kind, graph.nodes.len(), GraphDirection::Horizontal);
//!     println!("{}", serde_json::to_string_pretty(&layout)?);
//!     Ok(())
//! }
//! ```

pub mod catalog;
pub mod compiler;
pub mod config;
pub mod dsl;
pub mod error;
pub mod graph;
pub mod layout;
pub mod prelude;
pub mod record;
pub mod renderer;
pub mod tool;
pub mod view;
