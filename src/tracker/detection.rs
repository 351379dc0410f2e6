//! Per-frame detector output consumed by the tracker.

use crate::tracker::rect::Rect;

/// Detection input for the tracker.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Bounding box in TLWH format
    pub bbox: Rect,
    /// Detection confidence score (0-1)
    pub score: f32,
    /// Class identifier reported by the detector, if any
    pub class_id: Option<i32>,
}

impl Detection {
    /// Create a detection from TLWH coordinates.
    pub fn new(x: f32, y: f32, width: f32, height: f32, score: f32) -> Self {
        Self {
            bbox: Rect::new(x, y, width, height),
            score,
            class_id: None,
        }
    }

    /// Create a detection from an existing box, without a class.
    pub fn from_rect(bbox: Rect, score: f32) -> Self {
        Self {
            bbox,
            score,
            class_id: None,
        }
    }

    /// Attach a class identifier.
    pub fn with_class(mut self, class_id: i32) -> Self {
        self.class_id = Some(class_id);
        self
    }

    /// Center/size form used by the motion filter: (cx, cy, w, h).
    pub fn to_xywh(&self) -> [f32; 4] {
        self.bbox.to_xywh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detection_new() {
        let det = Detection::new(10.0, 20.0, 30.0, 40.0, 0.8).with_class(2);
        assert_eq!(det.bbox, Rect::new(10.0, 20.0, 30.0, 40.0));
        assert_eq!(det.class_id, Some(2));
        assert_eq!(det.to_xywh(), [25.0, 40.0, 30.0, 40.0]);
    }

    #[test]
    fn test_from_rect() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let det = Detection::from_rect(rect, 0.6);
        assert_eq!(det.bbox, rect);
        assert_eq!(det.score, 0.6);
        assert_eq!(det.class_id, None);
    }
}
