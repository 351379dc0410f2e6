//! Trait for object detection inference backends.

use crate::tracker::Detection;

/// Trait for object detection inference backends.
///
/// Implement this trait to connect any detection model, local or remote, to
/// the tracker. Failures stay in the backend's own error type.
///
/// # Example
///
/// ```
/// use cascade_track::{Detection, DetectionSource};
///
/// struct FixedDetector;
///
/// impl DetectionSource for FixedDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, _input: &[u8], _width: u32, _height: u32) -> Result<Vec<Detection>, Self::Error> {
///         Ok(vec![Detection::new(0.1, 0.1, 0.2, 0.2, 0.9)])
///     }
/// }
/// ```
pub trait DetectionSource {
    /// Error type for detection failures.
    type Error;

    /// Run inference on raw image data and return detections.
    ///
    /// # Arguments
    /// * `input` - Raw image bytes (format depends on implementation)
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    fn detect(
        &mut self,
        input: &[u8],
        width: u32,
        height: u32,
    ) -> Result<Vec<Detection>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to `Detection`.
///
/// Implement this for your model's output format to enable easy conversion.
pub trait IntoDetections {
    /// Convert the output into a vector of detections.
    fn into_detections(self) -> Vec<Detection>;
}

impl IntoDetections for Vec<Detection> {
    fn into_detections(self) -> Vec<Detection> {
        self
    }
}

/// `(tlwh, score, class_id)` rows, as many detectors emit them.
impl IntoDetections for Vec<([f32; 4], f32, Option<i32>)> {
    fn into_detections(self) -> Vec<Detection> {
        self.into_iter()
            .map(|([x, y, w, h], score, class_id)| Detection {
                class_id,
                ..Detection::new(x, y, w, h, score)
            })
            .collect()
    }
}
