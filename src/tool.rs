//! Zoom Tool for the workflow editor canvas.
//!
//! Steps the editor zoom in fixed percent increments and keeps the selection
//! outline at a constant on-screen thickness.

use crate::config::{ViewerConfig, ZoomBounds};
use crate::renderer::{BBox, Point};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ZoomType {
    In,
    Out,
    /// Fit content, but never above 100%.
    Center,
    /// Fit content to fill the viewport.
    Fit,
    /// Center content at 100%.
    Original,
}

/// Geometry of the rubber-band selection outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectionBoxStyle {
    pub border_width: f64,
    pub margin_left: f64,
    pub margin_top: f64,
}

/// What the zoom tool needs from the editor canvas. Zoom values are ratios.
pub trait EditorCanvas {
    fn zoom(&self) -> f64;
    fn zoom_to(&mut self, ratio: f64, center: Point);
    fn zoom_to_fit(&mut self);
    fn center_content(&mut self);
    fn content_bbox(&self) -> BBox;
    fn apply_selection_box_style(&mut self, style: SelectionBoxStyle);
}

pub struct ZoomTool<C: EditorCanvas> {
    canvas: C,
    bounds: ZoomBounds,
    selected_border_width: f64,
}

impl<C: EditorCanvas> ZoomTool<C> {
    pub fn new(canvas: C, config: &ViewerConfig) -> Self {
        Self {
            canvas,
            bounds: config.zoom,
            selected_border_width: config.selected_border_width,
        }
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }

    /// Current zoom in percent.
    pub fn current(&self) -> f64 {
        self.canvas.zoom() * 100.0
    }

    /// Applies one zoom action and returns the resulting zoom in percent.
    pub fn zoom(&mut self, zoom_type: ZoomType) -> f64 {
        let min = f64::from(self.bounds.min);
        let max = f64::from(self.bounds.max);

        let target = match zoom_type {
            ZoomType::In => {
                let (snapped, _) = self.snapped_zoom();
                (snapped + i64::from(self.bounds.step)).min(i64::from(self.bounds.max)) as f64
            }
            ZoomType::Out => {
                let (snapped, remainder) = self.snapped_zoom();
                let step = i64::from(self.bounds.step);
                let mut stepped = snapped - step;
                // 95% steps out to 90%: the boundary below was not reached yet.
                if remainder > 0 {
                    stepped += step;
                }
                stepped.max(i64::from(self.bounds.min)) as f64
            }
            ZoomType::Center => match self.fit_within(min, 100.0) {
                Some(target) => target,
                None => return self.finish(),
            },
            ZoomType::Fit => match self.fit_within(min, max) {
                Some(target) => target,
                None => return self.finish(),
            },
            ZoomType::Original => {
                self.canvas.center_content();
                100.0
            }
        };

        tracing::debug!(?zoom_type, target, "zooming editor canvas");
        let center = self.canvas.content_bbox().center();
        self.canvas.zoom_to(target / 100.0, center);
        self.finish()
    }

    /// Rounded zoom snapped down to the step boundary, and the remainder above it.
    fn snapped_zoom(&self) -> (i64, i64) {
        let rounded = self.current().round() as i64;
        let step = i64::from(self.bounds.step.max(1));
        let remainder = rounded.rem_euclid(step);
        (rounded - remainder, remainder)
    }

    /// Fits content, then returns the clamped zoom only if fitting left it out of
    /// `[lower, upper]`, compared at whole-percent precision. The lower bound wins
    /// when the bounds cross.
    fn fit_within(&mut self, lower: f64, upper: f64) -> Option<f64> {
        self.canvas.zoom_to_fit();
        let fitted = self.current().round();
        let clamped = fitted.clamp(lower, upper.max(lower));
        (clamped != fitted).then_some(clamped)
    }

    fn finish(&mut self) -> f64 {
        self.optimize_selection_box_style();
        self.current()
    }

    fn optimize_selection_box_style(&mut self) {
        let border_width = self.selected_border_width * self.canvas.zoom();
        self.canvas.apply_selection_box_style(SelectionBoxStyle {
            border_width,
            margin_left: -border_width,
            margin_top: -border_width,
        });
    }
}
