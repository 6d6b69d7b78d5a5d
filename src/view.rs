//! Graph View Controller: owns one rendered graph and manages zoom, fit,
//! status stamping, highlighting and hover translation.

use crate::compiler::Compiler;
use crate::config::ViewerConfig;
use crate::error::{RenderError, ViewError};
use crate::graph::{CompiledGraph, GraphNode, NodeType, TriggerType};
use crate::layout::{GraphDirection, LayoutConfig, select_layout};
use crate::record::{ExecutionRecordSource, TaskStatus};
use crate::renderer::{GraphRenderer, ItemRef, ItemState, Point, RenderBackend, Size};
use ahash::AHashMap;
use serde::Serialize;

/// Shapes whose name contains this marker are decorative and ignored on hover.
const ANIMATION_SHAPE_MARKER: &str = "animate_";

/// What a hover callback receives: the node's on-screen box in client space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeHoverInfo {
    pub id: String,
    pub description: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub type HoverCallback = Box<dyn FnMut(&NodeHoverInfo)>;

/// Construction options for a [`GraphView`].
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub direction: GraphDirection,
    pub viewport: Size,
    pub config: ViewerConfig,
}

pub struct GraphView<R: GraphRenderer> {
    renderer: R,
    graph: CompiledGraph,
    layout: LayoutConfig,
    config: ViewerConfig,
    stamps: AHashMap<String, TaskStatus>,
    active_highlight: Option<TaskStatus>,
    hover: Option<HoverCallback>,
    settle_pending: bool,
}

impl<R: GraphRenderer> GraphView<R> {
    /// Compiles the DSL, then mounts the result. See [`GraphView::mount`].
    pub fn from_dsl<B>(
        backend: &B,
        compiler: &Compiler,
        dsl_text: Option<&str>,
        trigger_type: Option<TriggerType>,
        options: ViewOptions,
    ) -> Result<Self, ViewError>
    where
        B: RenderBackend<Renderer = R>,
    {
        let graph = compiler.compile(dsl_text, trigger_type)?;
        Ok(Self::mount(backend, graph, options)?)
    }

    /// Selects a layout, constructs the renderer and renders while hidden.
    ///
    /// Exactly one settle step is scheduled: the host calls [`GraphView::settle`]
    /// once the renderer's own layout pass has finished (the next event-loop tick),
    /// which fits the content and reveals the canvas.
    pub fn mount<B>(backend: &B, graph: CompiledGraph, options: ViewOptions) -> Result<Self, RenderError>
    where
        B: RenderBackend<Renderer = R>,
    {
        let layout = select_layout(graph.dsl_kind, graph.nodes.len(), options.direction);
        let mut renderer = backend.create(&graph, &layout, options.viewport)?;

        renderer.set_visible(false);
        renderer.render();

        Ok(Self {
            renderer,
            graph,
            layout,
            config: options.config,
            stamps: AHashMap::new(),
            active_highlight: None,
            hover: None,
            settle_pending: true,
        })
    }

    /// Runs the post-render settle step. Returns `false` if it already ran.
    pub fn settle(&mut self) -> bool {
        if !self.settle_pending {
            return false;
        }
        self.settle_pending = false;
        self.fit_to_canvas();
        self.renderer.set_visible(true);
        true
    }

    pub fn is_settle_pending(&self) -> bool {
        self.settle_pending
    }

    pub fn graph(&self) -> &CompiledGraph {
        &self.graph
    }

    pub fn nodes(&self) -> &[GraphNode] {
        &self.graph.nodes
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Derived from the active layout's rank direction.
    pub fn direction(&self) -> GraphDirection {
        self.layout.direction()
    }

    pub fn change_size(&mut self, width: f64, height: f64) {
        self.renderer.change_size(width, height);
    }

    pub fn destroy(mut self) {
        self.renderer.destroy();
    }

    /// Zooms to `percent` (100 = natural size) about the graph center.
    pub fn zoom_to(&mut self, percent: f64) {
        let center = self.renderer.graph_center_point();
        self.renderer.zoom_to(percent / 100.0, center);
    }

    /// Current zoom in percent.
    pub fn zoom(&self) -> f64 {
        self.renderer.zoom() * 100.0
    }

    /// Centers the content when it fits at 100%, otherwise fits it to the view
    /// without going below the minimum zoom.
    pub fn fit_to_canvas(&mut self) {
        if !self.content_overflows(1.0) {
            tracing::debug!("content fits at 100%, centering");
            self.renderer.fit_center();
            return;
        }
        if self.clamp_to_min_zoom() {
            return;
        }
        self.renderer.fit_view();
    }

    /// Fits the content to the view without going below the minimum zoom.
    pub fn fit_to_view(&mut self) {
        if !self.content_overflows(1.0) {
            self.renderer.fit_view();
            return;
        }
        if self.clamp_to_min_zoom() {
            return;
        }
        self.renderer.fit_view();
    }

    /// When content overflows even at the minimum zoom, centers it and zooms to
    /// the minimum, leaving the overflow in place.
    fn clamp_to_min_zoom(&mut self) -> bool {
        let min_ratio = self.config.zoom.min_ratio();
        if !self.content_overflows(min_ratio) {
            return false;
        }

        tracing::debug!(min_ratio, "content overflows at minimum zoom");
        self.renderer.fit_center();
        let center = self.renderer.graph_center_point();
        self.renderer.zoom_to(min_ratio, center);
        true
    }

    /// Whether any drawn item's far edge lies beyond the viewport at `ratio`.
    fn content_overflows(&self, ratio: f64) -> bool {
        let width = self.renderer.width() / ratio;
        let height = self.renderer.height() / ratio;

        self.renderer
            .canvas_bboxes()
            .iter()
            .any(|b| b.max_x > width || b.max_y > height)
    }

    /// Stamps every task node with its latest status (`INIT` when it has no
    /// record), then marks each edge running when either endpoint is running.
    pub fn update_node_states<S>(&mut self, records: &S)
    where
        S: ExecutionRecordSource + ?Sized,
    {
        for node in self
            .graph
            .nodes
            .iter()
            .filter(|n| n.node_type == NodeType::AsyncTask)
        {
            let status = records
                .latest_for(&node.id)
                .map(|r| r.status)
                .unwrap_or(TaskStatus::Init);

            self.stamps.insert(node.id.clone(), status);
            self.renderer
                .set_item_state(ItemRef::Node(&node.id), ItemState::Status(status));
        }

        for edge in &self.graph.edges {
            let running = [&edge.source, &edge.target]
                .iter()
                .any(|id| self.stamps.get(id.as_str()) == Some(&TaskStatus::Running));

            self.renderer.set_item_state(
                ItemRef::Edge {
                    source: &edge.source,
                    target: &edge.target,
                },
                ItemState::Running(running),
            );
        }
    }

    /// The status stamped on a node by the last [`GraphView::update_node_states`].
    pub fn node_status(&self, id: &str) -> Option<TaskStatus> {
        self.stamps.get(id).copied()
    }

    pub fn active_highlight(&self) -> Option<TaskStatus> {
        self.active_highlight
    }

    /// Toggles the highlight on the task nodes stamped with `status`.
    ///
    /// At most one status is lit at a time: lighting a new status first turns
    /// off the previous one.
    pub fn highlight_node_state(&mut self, status: TaskStatus, active: bool) {
        if active {
            if let Some(previous) = self.active_highlight.filter(|s| *s != status) {
                self.apply_highlight(previous, false);
            }
            self.apply_highlight(status, true);
            self.active_highlight = Some(status);
        } else {
            self.apply_highlight(status, false);
            if self.active_highlight == Some(status) {
                self.active_highlight = None;
            }
        }
    }

    /// Re-applies the active highlight after node states changed: nodes stamped
    /// with the active status are lit, every other task node is cleared.
    pub fn refresh_node_state_highlight(&mut self) {
        let Some(active) = self.active_highlight else {
            return;
        };

        for node in self
            .graph
            .nodes
            .iter()
            .filter(|n| n.node_type == NodeType::AsyncTask)
        {
            let lit = self.stamps.get(node.id.as_str()) == Some(&active);
            self.renderer
                .set_item_state(ItemRef::Node(&node.id), ItemState::Highlight(lit));
        }
    }

    fn apply_highlight(&mut self, status: TaskStatus, on: bool) {
        for node in self.graph.nodes.iter().filter(|n| {
            n.node_type == NodeType::AsyncTask && self.stamps.get(n.id.as_str()) == Some(&status)
        }) {
            self.renderer
                .set_item_state(ItemRef::Node(&node.id), ItemState::Highlight(on));
        }
    }

    /// Registers the callback that receives node hover boxes.
    pub fn on_node_hover(&mut self, callback: impl FnMut(&NodeHoverInfo) + 'static) {
        self.hover = Some(Box::new(callback));
    }

    /// Translates a hover over `shape_name` of node `node_id` into client space
    /// and delivers it to the hover callback.
    ///
    /// Join nodes and decorative animation shapes are ignored.
    pub fn handle_node_hover(&mut self, node_id: &str, shape_name: &str) -> Option<NodeHoverInfo> {
        let node = self.graph.node(node_id)?;
        if node.node_type == NodeType::FlowNode || shape_name.contains(ANIMATION_SHAPE_MARKER) {
            return None;
        }

        let position = self.renderer.node_position(node_id).or_else(|| {
            node.x
                .zip(node.y)
                .map(|(x, y)| Point::new(x, y))
        })?;

        let zoom = self.renderer.zoom();
        let client = self.renderer.client_by_point(position);

        let info = NodeHoverInfo {
            id: node.id.clone(),
            description: node.description.clone(),
            node_type: node.node_type,
            x: client.x,
            y: client.y,
            width: self.config.node_size.width * zoom,
            height: self.config.node_size.height * zoom,
        };

        if let Some(callback) = self.hover.as_mut() {
            callback(&info);
        }
        Some(info)
    }
}
