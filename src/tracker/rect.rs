/// Axis-aligned bounding box.
///
/// Stored as TLWH (origin x, origin y, width, height). The tracker is
/// unit-agnostic: pixel and normalized coordinates both work as long as one
/// session sticks to one of them.
///
/// Helpers convert to and from:
/// - TLBR: Top-Left X, Top-Left Y, Bottom-Right X, Bottom-Right Y
/// - XYWH: Center X, Center Y, Width, Height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// Origin x coordinate
    pub x: f32,
    /// Origin y coordinate
    pub y: f32,
    /// Width of the bounding box
    pub width: f32,
    /// Height of the bounding box
    pub height: f32,
}

impl Rect {
    /// Create a new Rect from origin coordinates and dimensions (TLWH format).
    #[inline]
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a Rect from TLBR format (top-left x, top-left y, bottom-right x, bottom-right y).
    #[inline]
    pub fn from_tlbr(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            x: x1,
            y: y1,
            width: x2 - x1,
            height: y2 - y1,
        }
    }

    /// Create a Rect from its center point and size.
    #[inline]
    pub fn from_xywh(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            x: cx - width / 2.0,
            y: cy - height / 2.0,
            width,
            height,
        }
    }

    /// Convert to TLBR format: (x1, y1, x2, y2).
    #[inline]
    pub fn to_tlbr(&self) -> [f32; 4] {
        [self.x, self.y, self.x + self.width, self.y + self.height]
    }

    /// Convert to TLWH format: (x, y, width, height).
    #[inline]
    pub fn to_tlwh(&self) -> [f32; 4] {
        [self.x, self.y, self.width, self.height]
    }

    /// Convert to center/size format: (center_x, center_y, width, height).
    #[inline]
    pub fn to_xywh(&self) -> [f32; 4] {
        let (cx, cy) = self.center();
        [cx, cy, self.width, self.height]
    }

    /// Get the center point of the bounding box.
    #[inline]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Get the area of the bounding box.
    #[inline]
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Overlapping region of two boxes, `None` when they only touch or are disjoint.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = (self.x + self.width).min(other.x + other.width);
        let y2 = (self.y + self.height).min(other.y + other.height);

        if x2 > x1 && y2 > y1 {
            Some(Rect::from_tlbr(x1, y1, x2, y2))
        } else {
            None
        }
    }

    /// Calculate Intersection over Union (IoU) with another bounding box.
    ///
    /// Returns 0 for disjoint boxes and whenever the union is empty, so two
    /// degenerate zero-area boxes never divide by zero.
    pub fn iou(&self, other: &Rect) -> f32 {
        let inter_area = self.intersection(other).map_or(0.0, |r| r.area());
        let union_area = self.area() + other.area() - inter_area;

        if union_area > 0.0 {
            inter_area / union_area
        } else {
            0.0
        }
    }
}

use ndarray::Array2;

/// Calculate IoU matrix between two sets of bounding boxes.
///
/// Returns a matrix of shape (M, N) where M is the length of `boxes_a`
/// and N is the length of `boxes_b`.
pub fn iou_batch(boxes_a: &[Rect], boxes_b: &[Rect]) -> Array2<f32> {
    let mut ious = Array2::zeros((boxes_a.len(), boxes_b.len()));
    for (i, a) in boxes_a.iter().enumerate() {
        for (j, b) in boxes_b.iter().enumerate() {
            ious[[i, j]] = a.iou(b);
        }
    }
    ious
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rect_conversions() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);

        assert_eq!(rect.to_tlwh(), [10.0, 20.0, 30.0, 40.0]);
        assert_eq!(rect.to_tlbr(), [10.0, 20.0, 40.0, 60.0]);
        assert_eq!(rect.to_xywh(), [25.0, 40.0, 30.0, 40.0]);
    }

    #[test]
    fn test_from_tlbr() {
        let rect = Rect::from_tlbr(10.0, 20.0, 40.0, 60.0);
        assert_eq!(rect.to_tlwh(), [10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_from_xywh() {
        let rect = Rect::from_xywh(25.0, 40.0, 30.0, 40.0);
        assert_relative_eq!(rect.x, 10.0);
        assert_relative_eq!(rect.y, 20.0);
        assert_relative_eq!(rect.width, 30.0);
        assert_relative_eq!(rect.height, 40.0);
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert_eq!(a.intersection(&b), Some(Rect::new(5.0, 5.0, 5.0, 5.0)));

        // Sharing an edge is not an overlap.
        let c = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert_eq!(a.intersection(&c), None);
    }

    #[test]
    fn test_iou() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);

        // Intersection: 5x5 = 25
        // Union: 100 + 100 - 25 = 175
        assert_relative_eq!(a.iou(&b), 25.0 / 175.0, epsilon = 1e-6);
        assert_relative_eq!(a.iou(&b), b.iou(&a), epsilon = 1e-6);
    }

    #[test]
    fn test_iou_no_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 10.0, 10.0);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_iou_same_box() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_relative_eq!(a.iou(&a), 1.0, epsilon = 1e-6);

        let normalized = Rect::new(0.1, 0.2, 0.3, 0.4);
        assert_relative_eq!(normalized.iou(&normalized), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_iou_degenerate() {
        let point = Rect::new(5.0, 5.0, 0.0, 0.0);
        assert_eq!(point.iou(&point), 0.0);

        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(a.iou(&point), 0.0);
    }

    #[test]
    fn test_iou_batch_shape() {
        let a = [Rect::new(0.0, 0.0, 10.0, 10.0), Rect::new(50.0, 50.0, 10.0, 10.0)];
        let b = [Rect::new(0.0, 0.0, 10.0, 10.0)];
        let ious = iou_batch(&a, &b);
        assert_eq!(ious.dim(), (2, 1));
        assert_relative_eq!(ious[[0, 0]], 1.0, epsilon = 1e-6);
        assert_eq!(ious[[1, 0]], 0.0);
    }
}
