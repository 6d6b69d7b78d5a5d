//! Common test utilities: DSL fixtures and recording renderer/canvas doubles.
use ahash::AHashMap;
use zukei::prelude::*;
use zukei::tool::SelectionBoxStyle;

/// `start -> {a, b} -> {x, y} -> end`. Both `x` and `y` need exactly `a` and `b`,
/// so compiling it synthesizes the `a_b` join node.
#[allow(dead_code)]
pub const DIAMOND_WORKFLOW: &str = r#"
trigger:
  schedule: "0 * * * *"
  webhook: "gitlab@team-a"
workflow:
  - ref: s1
    task: start
  - ref: a
    task: git-clone
    needs: [s1]
  - ref: b
    name: Build container image
    task: docker-build
    image: alpine:3
    needs: [s1]
  - ref: x
    task: maven
    needs: [a, b]
  - ref: y
    task: npm
    needs: [a, b]
  - ref: e1
    task: end
    needs: [x, y]
"#;

/// Four pipeline steps, chained in declaration order.
#[allow(dead_code)]
pub const SIMPLE_PIPELINE: &str = r#"
trigger:
  webhook: github
pipeline:
  - ref: checkout
    task: git-clone
  - ref: compile
    name: Compile all modules
    task: maven
  - ref: test
    task: maven
  - ref: package
    task: shell
    image: busybox
"#;

/// A pipeline with `count` steps named `step0`, `step1`, ...
#[allow(dead_code)]
pub fn pipeline_of(count: usize) -> String {
    let mut dsl = String::from("pipeline:\n");
    for i in 0..count {
        dsl.push_str(&format!("  - ref: step{}\n    task: shell\n", i));
    }
    dsl
}

#[allow(dead_code)]
pub fn compile_manual(dsl: &str) -> CompiledGraph {
    compile(Some(dsl), Some(TriggerType::Manual), None).unwrap()
}

#[allow(dead_code)]
pub fn edge_pairs(graph: &CompiledGraph) -> Vec<(String, String)> {
    graph
        .edges
        .iter()
        .map(|e| (e.source.clone(), e.target.clone()))
        .collect()
}

#[allow(dead_code)]
pub fn pair(source: &str, target: &str) -> (String, String) {
    (source.to_string(), target.to_string())
}

#[allow(dead_code)]
pub fn record(node: &str, status: TaskStatus, start_time: Option<u64>) -> TaskExecutionRecord {
    TaskExecutionRecord {
        business_id: None,
        node_name: node.to_string(),
        status,
        start_time,
    }
}

/// A renderer double that records every call and holds the latest item states.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct MockRenderer {
    pub calls: Vec<String>,
    pub zoom: f64,
    /// Zoom ratio `fit_view` settles on.
    pub fit_zoom: f64,
    pub width: f64,
    pub height: f64,
    pub bboxes: Vec<BBox>,
    pub positions: AHashMap<String, Point>,
    /// Canvas origin in client space.
    pub client_offset: Point,
    pub visible: bool,
    pub destroyed: bool,
    pub statuses: AHashMap<String, TaskStatus>,
    pub highlights: AHashMap<String, bool>,
    pub edge_running: AHashMap<(String, String), bool>,
}

impl Default for MockRenderer {
    fn default() -> Self {
        Self {
            calls: Vec::new(),
            zoom: 1.0,
            fit_zoom: 1.0,
            width: 800.0,
            height: 600.0,
            bboxes: Vec::new(),
            positions: AHashMap::new(),
            client_offset: Point::default(),
            visible: true,
            destroyed: false,
            statuses: AHashMap::new(),
            highlights: AHashMap::new(),
            edge_running: AHashMap::new(),
        }
    }
}

#[allow(dead_code)]
impl MockRenderer {
    pub fn with_bboxes(mut self, bboxes: Vec<BBox>) -> Self {
        self.bboxes = bboxes;
        self
    }

    pub fn with_position(mut self, id: &str, x: f64, y: f64) -> Self {
        self.positions.insert(id.to_string(), Point::new(x, y));
        self
    }

    pub fn called(&self, call: &str) -> bool {
        self.calls.iter().any(|c| c == call)
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlights.get(id).copied().unwrap_or(false)
    }
}

impl GraphRenderer for MockRenderer {
    fn render(&mut self) {
        self.calls.push("render".to_string());
    }

    fn destroy(&mut self) {
        self.destroyed = true;
        self.calls.push("destroy".to_string());
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.calls.push(format!("set_visible({})", visible));
    }

    fn change_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.calls.push(format!("change_size({}, {})", width, height));
    }

    fn zoom_to(&mut self, ratio: f64, _center: Point) {
        self.zoom = ratio;
        self.calls.push(format!("zoom_to({})", ratio));
    }

    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn graph_center_point(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    fn fit_center(&mut self) {
        self.calls.push("fit_center".to_string());
    }

    fn fit_view(&mut self) {
        self.zoom = self.fit_zoom;
        self.calls.push("fit_view".to_string());
    }

    fn canvas_bboxes(&self) -> Vec<BBox> {
        self.bboxes.clone()
    }

    fn node_position(&self, id: &str) -> Option<Point> {
        self.positions.get(id).copied()
    }

    fn client_by_point(&self, point: Point) -> Point {
        Point::new(
            point.x * self.zoom + self.client_offset.x,
            point.y * self.zoom + self.client_offset.y,
        )
    }

    fn set_item_state(&mut self, item: ItemRef<'_>, state: ItemState) {
        match (item, state) {
            (ItemRef::Node(id), ItemState::Status(status)) => {
                self.statuses.insert(id.to_string(), status);
            }
            (ItemRef::Node(id), ItemState::Highlight(on)) => {
                self.highlights.insert(id.to_string(), on);
            }
            (ItemRef::Edge { source, target }, ItemState::Running(on)) => {
                self.edge_running
                    .insert((source.to_string(), target.to_string()), on);
            }
            (item, state) => panic!("unexpected state {:?} on {:?}", state, item),
        }
    }
}

/// Hands out clones of a template renderer sized to the requested viewport.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    pub template: MockRenderer,
    pub fail_with: Option<String>,
}

impl RenderBackend for MockBackend {
    type Renderer = MockRenderer;

    fn create(
        &self,
        _graph: &CompiledGraph,
        _layout: &LayoutConfig,
        viewport: Size,
    ) -> std::result::Result<MockRenderer, RenderError> {
        if let Some(message) = &self.fail_with {
            return Err(RenderError::Backend(message.clone()));
        }
        let mut renderer = self.template.clone();
        renderer.width = viewport.width;
        renderer.height = viewport.height;
        Ok(renderer)
    }
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[allow(dead_code)]
pub fn viewport() -> Size {
    Size::new(800.0, 600.0)
}

#[allow(dead_code)]
pub fn options(direction: GraphDirection) -> ViewOptions {
    ViewOptions {
        direction,
        viewport: viewport(),
        config: ViewerConfig::default(),
    }
}

/// An editor canvas double. `zoom_to_fit` jumps to `fit_zoom`.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct MockCanvas {
    pub zoom: f64,
    pub fit_zoom: f64,
    pub bbox: BBox,
    pub calls: Vec<String>,
    pub last_center: Option<Point>,
    pub selection_style: Option<SelectionBoxStyle>,
}

#[allow(dead_code)]
impl MockCanvas {
    pub fn at(percent: f64) -> Self {
        Self {
            zoom: percent / 100.0,
            fit_zoom: 1.0,
            bbox: BBox::new(0.0, 0.0, 400.0, 200.0),
            calls: Vec::new(),
            last_center: None,
            selection_style: None,
        }
    }

    pub fn fitting_to(mut self, percent: f64) -> Self {
        self.fit_zoom = percent / 100.0;
        self
    }

    pub fn zoom_to_calls(&self) -> usize {
        self.calls.iter().filter(|c| c.starts_with("zoom_to(")).count()
    }
}

impl EditorCanvas for MockCanvas {
    fn zoom(&self) -> f64 {
        self.zoom
    }

    fn zoom_to(&mut self, ratio: f64, center: Point) {
        self.zoom = ratio;
        self.last_center = Some(center);
        self.calls.push(format!("zoom_to({})", ratio));
    }

    fn zoom_to_fit(&mut self) {
        self.zoom = self.fit_zoom;
        self.calls.push("zoom_to_fit".to_string());
    }

    fn center_content(&mut self) {
        self.calls.push("center_content".to_string());
    }

    fn content_bbox(&self) -> BBox {
        self.bbox
    }

    fn apply_selection_box_style(&mut self, style: SelectionBoxStyle) {
        self.selection_style = Some(style);
    }
}
