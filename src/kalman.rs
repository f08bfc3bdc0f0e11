//! Constant-velocity Kalman filter over an 8-D state `(x, y, ẋ, ẏ, w, h, ẇ, ḣ)`.
//!
//! Position and size are tracked as two decoupled constant-acceleration
//! blocks (see `process_noise`), and the measurement is the raw rectangle
//! `(x, y, w, h)`. Unlike a library-driven filter with a fixed transition
//! matrix, every `predict` call here rebuilds `F`/`Q` for the actual elapsed
//! time, since frames do not arrive at a fixed rate.

use nalgebra::{SMatrix, SVector};

use crate::geometry::Rect;

const DEFAULT_PROCESS_VARIANCE: f64 = 1e-2;
const MEASUREMENT_VARIANCE: f64 = 1e-2;
const DEGENERATE_DT: f64 = 1e-6;

type State = SVector<f64, 8>;
type StateCov = SMatrix<f64, 8, 8>;
type Measurement = SVector<f64, 4>;

/// An 8-D constant-velocity Kalman filter tracking `(x, y, w, h)`.
#[derive(Clone, Debug)]
pub struct KalmanFilter8D {
    state: State,
    covariance: StateCov,
    process_variance: f64,
    measurement_noise: SMatrix<f64, 4, 4>,
    measurement_matrix: SMatrix<f64, 4, 8>,
}

impl KalmanFilter8D {
    /// Builds a filter initialized from a detection rectangle:
    /// `(d.x, d.y, 0, 0, d.w, d.h, 0, 0)` with identity initial covariance.
    pub fn from_rect(rect: Rect) -> Self {
        let state = State::new(rect.x, rect.y, 0.0, 0.0, rect.w, rect.h, 0.0, 0.0);

        let mut h = SMatrix::<f64, 4, 8>::zeros();
        h[(0, 0)] = 1.0;
        h[(1, 1)] = 1.0;
        h[(2, 4)] = 1.0;
        h[(3, 5)] = 1.0;

        let r = SMatrix::<f64, 4, 4>::identity() * MEASUREMENT_VARIANCE;

        Self {
            state,
            covariance: StateCov::identity(),
            process_variance: DEFAULT_PROCESS_VARIANCE,
            measurement_noise: r,
            measurement_matrix: h,
        }
    }

    /// The current rectangle read from state indices (0, 1, 4, 5).
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.state[0],
            self.state[1],
            self.state[4],
            self.state[5],
        )
    }

    /// Predicts the state forward by `dt` seconds, guarding against
    /// non-positive or degenerate time steps.
    pub fn predict(&mut self, dt: f64) {
        let dt = if dt <= 0.0 { DEGENERATE_DT } else { dt };

        let f = transition_matrix(dt);
        let q = process_noise(dt, self.process_variance);

        self.state = f * self.state;
        self.covariance = f * self.covariance * f.transpose() + q;
    }

    /// Assimilates a measurement `(x, y, w, h)` via the standard Kalman
    /// innovation update.
    pub fn correct(&mut self, rect: Rect) {
        let z = Measurement::new(rect.x, rect.y, rect.w, rect.h);
        let h = self.measurement_matrix;

        let y = z - h * self.state;
        let s = h * self.covariance * h.transpose() + self.measurement_noise;

        let s_inv = s
            .try_inverse()
            .expect("measurement covariance S must be invertible");
        let k = self.covariance * h.transpose() * s_inv;

        self.state += k * y;
        let identity = StateCov::identity();
        self.covariance = (identity - k * h) * self.covariance;
    }
}

#[allow(non_snake_case)]
fn transition_matrix(dt: f64) -> SMatrix<f64, 8, 8> {
    let mut f = SMatrix::<f64, 8, 8>::identity();
    f[(0, 2)] = dt;
    f[(1, 3)] = dt;
    f[(4, 6)] = dt;
    f[(5, 7)] = dt;
    f
}

/// Constant-acceleration process noise, applied independently to the
/// (position, velocity) and (size, size-rate) blocks.
fn process_noise(dt: f64, sigma2: f64) -> SMatrix<f64, 8, 8> {
    let mut q = SMatrix::<f64, 8, 8>::zeros();
    for &(p, v) in &[(0usize, 2usize), (1, 3), (4, 6), (5, 7)] {
        q[(p, p)] = dt.powi(4) / 4.0 * sigma2;
        q[(p, v)] = dt.powi(3) / 2.0 * sigma2;
        q[(v, p)] = dt.powi(3) / 2.0 * sigma2;
        q[(v, v)] = dt.powi(2) * sigma2;
    }
    q
}
