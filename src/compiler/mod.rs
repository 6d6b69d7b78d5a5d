//! Graph Compiler: DSL sections to a node/edge graph.
//!
//! Compilation is a chain of value-to-value stages:
//! parse -> base nodes/edges -> join synthesis (workflows only) -> trigger
//! injection -> icon resolution. No stage reaches back into an earlier one.

use crate::catalog::NodeDefinition;
use crate::dsl::{self, DslDocument};
use crate::error::CompileError;
use crate::graph::{CompiledGraph, DslKind, GraphEdge, GraphNode, TriggerType};

mod builder;
mod icons;
mod joins;
pub mod trigger;

use builder::{build_pipeline, build_workflow};
pub use builder::truncate_label;
use icons::resolve_icons;
use joins::synthesize_joins;
use trigger::{Trigger, inject_trigger};

/// Maximum label length, in characters, before truncation.
pub const MAX_LABEL_LENGTH: usize = 10;

/// `uniqueKey` marker for tasks that run a container image.
pub const SHELL_NODE_TYPE: &str = "shell";

/// Intermediate nodes and edges passed between stages.
#[derive(Debug, Default)]
pub(crate) struct GraphParts {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

pub struct Compiler {
    catalog: Option<Vec<NodeDefinition>>,
    shell_icon: String,
}

pub struct CompilerBuilder {
    catalog: Option<Vec<NodeDefinition>>,
    shell_icon: String,
}

impl Default for CompilerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CompilerBuilder {
    pub fn new() -> Self {
        Self {
            catalog: None,
            shell_icon: crate::config::ViewerConfig::default().shell_icon,
        }
    }
    /// Enables icon resolution against the given task catalog.
    pub fn with_catalog(mut self, catalog: Vec<NodeDefinition>) -> Self {
        self.catalog = Some(catalog);
        self
    }
    pub fn with_shell_icon(mut self, icon: impl Into<String>) -> Self {
        self.shell_icon = icon.into();
        self
    }
    pub fn build(self) -> Compiler {
        Compiler {
            catalog: self.catalog,
            shell_icon: self.shell_icon,
        }
    }
}

impl Compiler {
    pub fn builder() -> CompilerBuilder {
        CompilerBuilder::new()
    }

    /// Compiles DSL text for the given trigger type.
    ///
    /// Missing text or trigger type is the "not yet configured" state and yields an
    /// empty workflow-kind graph. Malformed YAML is an error; nothing is partially built.
    pub fn compile(
        &self,
        dsl_text: Option<&str>,
        trigger_type: Option<TriggerType>,
    ) -> Result<CompiledGraph, CompileError> {
        let (Some(text), Some(trigger_type)) =
            (dsl_text.filter(|t| !t.trim().is_empty()), trigger_type)
        else {
            tracing::debug!("dsl or trigger type absent, returning empty graph");
            return Ok(CompiledGraph::empty(DslKind::Workflow));
        };

        let document = dsl::parse(text)?;
        Ok(self.compile_document(&document, trigger_type))
    }

    /// Compiles an already parsed document.
    pub fn compile_document(
        &self,
        document: &DslDocument,
        trigger_type: TriggerType,
    ) -> CompiledGraph {
        let (dsl_kind, parts) = match (&document.workflow, &document.pipeline) {
            (Some(tasks), _) => (DslKind::Workflow, synthesize_joins(build_workflow(tasks))),
            (None, Some(tasks)) => (DslKind::Pipeline, build_pipeline(tasks)),
            (None, None) => (DslKind::Workflow, GraphParts::default()),
        };

        let trigger = Trigger::resolve(trigger_type, document.trigger.as_ref());
        let parts = inject_trigger(parts, trigger, dsl_kind);

        let parts = match &self.catalog {
            Some(catalog) => resolve_icons(parts, catalog, &self.shell_icon),
            None => parts,
        };

        tracing::debug!(
            ?dsl_kind,
            nodes = parts.nodes.len(),
            edges = parts.edges.len(),
            "compiled graph"
        );

        CompiledGraph {
            dsl_kind,
            nodes: parts.nodes,
            edges: parts.edges,
        }
    }
}

/// One-shot compilation with an optional task catalog.
pub fn compile(
    dsl_text: Option<&str>,
    trigger_type: Option<TriggerType>,
    catalog: Option<&[NodeDefinition]>,
) -> Result<CompiledGraph, CompileError> {
    let mut builder = Compiler::builder();
    if let Some(catalog) = catalog {
        builder = builder.with_catalog(catalog.to_vec());
    }
    builder.build().compile(dsl_text, trigger_type)
}
