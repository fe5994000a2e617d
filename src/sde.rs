//! One-dimensional stochastic differential equations integrated with the
//! explicit Euler-Maruyama scheme.

use std::fmt;

use ndarray::Array1;
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::Normal;

use crate::error::Result;
use crate::grid::TimeGrid;
use crate::process::ProcessExt;

/// A process `X_t` given as the solution of
/// `dX_t = b(X_t, t) dt + sigma(X_t, t) dB_t`,
/// where `b` is the drift, `sigma` the diffusion and `B_t` a standard
/// Brownian motion.
///
/// The scheme has strong order 0.5 and weak order 1.0 as `dt -> 0`. Each
/// step depends on the previous state, so a single path is inherently
/// sequential; separate paths are independent.
///
/// Drift and diffusion are called once per step with scalar `(state, time)`
/// arguments. Non-finite values they produce are carried through the rest of
/// the path unguarded, and a panic in either closure aborts the path with no
/// partial result.
pub struct Sde<F, G>
where
  F: Fn(f64, f64) -> f64 + Send + Sync,
  G: Fn(f64, f64) -> f64 + Send + Sync,
{
  pub drift: F,
  pub diffusion: G,
  grid: TimeGrid,
  start_value: f64,
}

impl<F, G> Sde<F, G>
where
  F: Fn(f64, f64) -> f64 + Send + Sync,
  G: Fn(f64, f64) -> f64 + Send + Sync,
{
  /// Create a new one-dimensional SDE over `[starttime, endtime]` with
  /// `num_steps` grid points.
  pub fn new(
    drift: F,
    diffusion: G,
    starttime: f64,
    endtime: f64,
    num_steps: usize,
    start_value: f64,
  ) -> Result<Self> {
    let grid = TimeGrid::new(starttime, endtime, num_steps)?;

    Ok(Self {
      drift,
      diffusion,
      grid,
      start_value,
    })
  }

  pub fn start_value(&self) -> f64 {
    self.start_value
  }

  fn brownian_increments<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
    let n = self.grid.num_steps();
    let normal = Normal::new(0.0, self.grid.dt().sqrt()).unwrap();

    Array1::random_using(n - 1, normal, rng)
  }
}

impl<F, G> ProcessExt for Sde<F, G>
where
  F: Fn(f64, f64) -> f64 + Send + Sync,
  G: Fn(f64, f64) -> f64 + Send + Sync,
{
  type Output = Array1<f64>;

  fn grid(&self) -> &TimeGrid {
    &self.grid
  }

  fn dim(&self) -> usize {
    1
  }

  /// The per-step state deltas `b(x, t) dt + sigma(x, t) dW` evaluated along
  /// an Euler-Maruyama path, so the start value plus the running sum of the
  /// deltas reproduces a trajectory.
  fn increments<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
    let n = self.grid.num_steps();
    let dt = self.grid.dt();
    let t = self.grid.timeaxis();
    let dw = self.brownian_increments(rng);

    let mut deltas = Array1::<f64>::zeros(n - 1);
    let mut x = self.start_value;

    for i in 0..n - 1 {
      deltas[i] = (self.drift)(x, t[i]) * dt + (self.diffusion)(x, t[i]) * dw[i];
      x += deltas[i];
    }

    deltas
  }

  fn trajectory<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64> {
    let n = self.grid.num_steps();
    let dt = self.grid.dt();
    let t = self.grid.timeaxis();
    let dw = self.brownian_increments(rng);

    let mut path = Array1::<f64>::zeros(n);
    path[0] = self.start_value;

    for i in 1..n {
      let (x, tp) = (path[i - 1], t[i - 1]);
      path[i] = x + (self.drift)(x, tp) * dt + (self.diffusion)(x, tp) * dw[i - 1];
    }

    path
  }
}

impl<F, G> fmt::Display for Sde<F, G>
where
  F: Fn(f64, f64) -> f64 + Send + Sync,
  G: Fn(f64, f64) -> f64 + Send + Sync,
{
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.describe())
  }
}
