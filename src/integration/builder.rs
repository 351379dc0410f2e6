//! Builder for creating Detection objects from various input formats.

use crate::tracker::{Detection, Rect};

/// Builder for creating `Detection` objects from various input formats.
///
/// Box setters overwrite each other; `normalized` and `flip_vertical` apply
/// to whatever box is set at the time they are called.
#[derive(Debug, Clone, Default)]
pub struct DetectionBuilder {
    bbox: Rect,
    score: f32,
    class_id: Option<i32>,
}

impl DetectionBuilder {
    /// Create a new detection builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set bounding box from two opposite corners (x1, y1, x2, y2).
    ///
    /// Corners may come in either order; the box never has negative size.
    pub fn tlbr(mut self, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        self.bbox = Rect::from_tlbr(x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2));
        self
    }

    /// Set bounding box in XYWH format (center_x, center_y, width, height).
    pub fn xywh(mut self, cx: f32, cy: f32, w: f32, h: f32) -> Self {
        self.bbox = Rect::from_xywh(cx, cy, w, h);
        self
    }

    /// Set bounding box in TLWH format (left, top, width, height).
    pub fn tlwh(mut self, x: f32, y: f32, w: f32, h: f32) -> Self {
        self.bbox = Rect::new(x, y, w, h);
        self
    }

    /// Divide pixel coordinates by the image size, giving a 0-1 box.
    ///
    /// A zero-sized image leaves the box untouched.
    pub fn normalized(mut self, image_width: f32, image_height: f32) -> Self {
        if image_width > 0.0 && image_height > 0.0 {
            self.bbox = Rect::new(
                self.bbox.x / image_width,
                self.bbox.y / image_height,
                self.bbox.width / image_width,
                self.bbox.height / image_height,
            );
        }
        self
    }

    /// Move a normalized box between top-left and bottom-left origin.
    pub fn flip_vertical(mut self) -> Self {
        self.bbox.y = 1.0 - self.bbox.y - self.bbox.height;
        self
    }

    /// Set the confidence score.
    pub fn score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    /// Set the class identifier.
    pub fn class_id(mut self, class_id: i32) -> Self {
        self.class_id = Some(class_id);
        self
    }

    /// Build the final `Detection`.
    pub fn build(self) -> Detection {
        Detection {
            class_id: self.class_id,
            ..Detection::from_rect(self.bbox, self.score)
        }
    }
}
