//! Capability interfaces the view controller needs from a graph renderer.
//!
//! The renderer owns layout execution, drawing and DOM wiring. The core only
//! drives it through these traits.

use crate::error::RenderError;
use crate::graph::CompiledGraph;
use crate::layout::LayoutConfig;
use crate::record::TaskStatus;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned bounding box in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + width,
            max_y: y + height,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }
}

/// A drawn item the controller can restyle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRef<'a> {
    Node(&'a str),
    Edge { source: &'a str, target: &'a str },
}

/// Named visual states applied to items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    /// Execution status stamp on a task node.
    Status(TaskStatus),
    /// Status highlight on a task node.
    Highlight(bool),
    /// Work flowing through an edge.
    Running(bool),
}

/// A constructed, rendered graph instance.
pub trait GraphRenderer {
    fn render(&mut self);
    fn destroy(&mut self);
    /// Hides the canvas until the first fit has been applied.
    fn set_visible(&mut self, visible: bool);
    fn change_size(&mut self, width: f64, height: f64);

    /// Zooms to `ratio` (1.0 = natural size) about `center`.
    fn zoom_to(&mut self, ratio: f64, center: Point);
    /// Current zoom ratio.
    fn zoom(&self) -> f64;
    fn width(&self) -> f64;
    fn height(&self) -> f64;
    fn graph_center_point(&self) -> Point;
    /// Centers content at the current zoom.
    fn fit_center(&mut self);
    /// Zooms and pans so content fills the viewport.
    fn fit_view(&mut self);

    /// Canvas bounding boxes of every drawn node and edge.
    fn canvas_bboxes(&self) -> Vec<BBox>;
    /// Laid-out position of a node, if it exists.
    fn node_position(&self, id: &str) -> Option<Point>;
    /// Converts a canvas point to client (screen) coordinates.
    fn client_by_point(&self, point: Point) -> Point;

    fn set_item_state(&mut self, item: ItemRef<'_>, state: ItemState);
}

/// Constructs renderers for compiled graphs.
pub trait RenderBackend {
    type Renderer: GraphRenderer;

    fn create(
        &self,
        graph: &CompiledGraph,
        layout: &LayoutConfig,
        viewport: Size,
    ) -> Result<Self::Renderer, RenderError>;
}
