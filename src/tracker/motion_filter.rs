//! Decoupled constant-velocity filter for bounding box motion.
//!
//! State vector: [cx, cy, w, h, vx, vy, vw, vh] with one uncertainty entry per
//! component. There is no covariance between components, and the correction
//! step uses a single scalar gain derived from the first uncertainty entry.
//! Smoothing lag and responsiveness of the tracker depend on this exact
//! approximation, so it is not a textbook multivariate Kalman filter.

use nalgebra::{SVector, Vector4};

/// Initial uncertainty of the position/size components.
const INITIAL_POSITION_UNCERTAINTY: f64 = 10.0;
/// Initial uncertainty of the velocity components.
const INITIAL_VELOCITY_UNCERTAINTY: f64 = 1000.0;
/// Added to every uncertainty entry on each prediction.
const PROCESS_NOISE: f64 = 0.01;
/// Trust in the detector's measurement.
const MEASUREMENT_NOISE: f64 = 1.0;

/// Weight kept by the previous velocity when blending in a new innovation.
const VELOCITY_RETENTION: f64 = 0.9;
/// Weight given to the innovation when blending velocity.
const VELOCITY_BLEND: f64 = 0.1;

type StateVector = SVector<f64, 8>;

#[derive(Debug, Clone)]
pub struct MotionFilter {
    state: StateVector,
    uncertainty: StateVector,
}

impl MotionFilter {
    /// Start a filter at the given (cx, cy, w, h) with zero velocity.
    pub fn new(measurement: [f32; 4]) -> Self {
        let mut state = StateVector::zeros();
        let mut uncertainty = StateVector::zeros();
        for i in 0..4 {
            state[i] = measurement[i] as f64;
            uncertainty[i] = INITIAL_POSITION_UNCERTAINTY;
            uncertainty[4 + i] = INITIAL_VELOCITY_UNCERTAINTY;
        }
        Self { state, uncertainty }
    }

    /// Advance one frame and return the predicted (cx, cy, w, h).
    pub fn predict(&mut self) -> [f32; 4] {
        for i in 0..4 {
            self.state[i] += self.state[4 + i];
        }
        self.uncertainty.add_scalar_mut(PROCESS_NOISE);
        self.position()
    }

    /// Correct the estimate with a measured (cx, cy, w, h).
    pub fn update(&mut self, measurement: [f32; 4]) {
        let gain = self.gain();
        let measured = Vector4::from(measurement.map(f64::from));

        for i in 0..4 {
            let innovation = measured[i] - self.state[i];
            self.state[i] += gain * innovation;
            self.state[4 + i] = VELOCITY_RETENTION * self.state[4 + i] + VELOCITY_BLEND * innovation;
            self.uncertainty[i] *= 1.0 - gain;
        }
    }

    /// Current (cx, cy, w, h) estimate.
    pub fn position(&self) -> [f32; 4] {
        [
            self.state[0] as f32,
            self.state[1] as f32,
            self.state[2] as f32,
            self.state[3] as f32,
        ]
    }

    /// Current (vx, vy, vw, vh) estimate.
    pub fn velocity(&self) -> [f32; 4] {
        [
            self.state[4] as f32,
            self.state[5] as f32,
            self.state[6] as f32,
            self.state[7] as f32,
        ]
    }

    pub fn uncertainty(&self) -> [f64; 8] {
        self.uncertainty.into()
    }

    // Only the first entry feeds the gain.
    fn gain(&self) -> f64 {
        MEASUREMENT_NOISE / (MEASUREMENT_NOISE + self.uncertainty[0])
    }
}
