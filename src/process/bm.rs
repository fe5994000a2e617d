use std::fmt;

use ndarray::Array1;
use ndarray::Array2;
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::Normal;

use crate::error::ProcessError;
use crate::error::Result;
use crate::grid::TimeGrid;
use crate::process::ProcessExt;

/// N-dimensional standard Brownian motion.
///
/// Increments over a step of length `dt` are independent `N(0, dt)` draws,
/// independent across dimensions; the trajectory is the running sum of the
/// increments prepended with the start value.
#[derive(Debug)]
pub struct BrownianMotion {
  grid: TimeGrid,
  dim: usize,
  start_value: Array1<f64>,
}

impl BrownianMotion {
  /// Create a new Brownian motion on `[starttime, endtime]` with `num_steps`
  /// grid points and `dim` spatial dimensions.
  ///
  /// `start_value` defaults to the zero vector and must have exactly `dim`
  /// components when supplied.
  pub fn new(
    starttime: f64,
    endtime: f64,
    num_steps: usize,
    dim: usize,
    start_value: Option<Array1<f64>>,
  ) -> Result<Self> {
    let grid = TimeGrid::new(starttime, endtime, num_steps)?;

    if dim == 0 {
      return Err(ProcessError::Unsupported(
        "zero-dimensional processes are not supported".to_string(),
      ));
    }

    let start_value = start_value.unwrap_or_else(|| Array1::zeros(dim));
    if start_value.len() != dim {
      return Err(ProcessError::InvalidConfiguration {
        field: "start_value",
        reason: format!("expected {} components, got {}", dim, start_value.len()),
      });
    }

    Ok(Self {
      grid,
      dim,
      start_value,
    })
  }

  pub fn start_value(&self) -> &Array1<f64> {
    &self.start_value
  }
}

impl ProcessExt for BrownianMotion {
  type Output = Array2<f64>;

  fn grid(&self) -> &TimeGrid {
    &self.grid
  }

  fn dim(&self) -> usize {
    self.dim
  }

  /// A `(dim, num_steps - 1)` array of independent `N(0, dt)` draws.
  fn increments<R: Rng + ?Sized>(&self, rng: &mut R) -> Array2<f64> {
    let n = self.grid.num_steps();
    let normal = Normal::new(0.0, self.grid.dt().sqrt()).unwrap();

    Array2::random_using((self.dim, n - 1), normal, rng)
  }

  /// A `(dim, num_steps)` path: column 0 is the start value, successive
  /// columns are partial sums of the increments.
  fn trajectory<R: Rng + ?Sized>(&self, rng: &mut R) -> Array2<f64> {
    let n = self.grid.num_steps();
    let gn = self.increments(rng);

    let mut bm = Array2::<f64>::zeros((self.dim, n));
    bm.column_mut(0).assign(&self.start_value);

    for d in 0..self.dim {
      for i in 1..n {
        bm[[d, i]] = bm[[d, i - 1]] + gn[[d, i - 1]];
      }
    }

    bm
  }
}

impl fmt::Display for BrownianMotion {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.describe())
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_abs_diff_eq;
  use ndarray::arr1;
  use rand::rngs::StdRng;
  use rand::SeedableRng;
  use statrs::statistics::Statistics;

  use super::*;
  use crate::N;

  #[test]
  fn trajectory_shape_is_dim_by_num_steps() {
    let bm = BrownianMotion::new(0.0, 1.0, N, 3, None).unwrap();
    assert_eq!(bm.sample().shape(), &[3, N]);
  }

  #[test]
  fn increments_shape_is_dim_by_num_steps_minus_one() {
    let bm = BrownianMotion::new(0.0, 1.0, N, 2, None).unwrap();
    assert_eq!(bm.sample_increments().shape(), &[2, N - 1]);
  }

  #[test]
  fn trajectory_starts_at_the_start_value() {
    let bm = BrownianMotion::new(0.0, 1.0, N, 2, Some(arr1(&[1.0, -2.0]))).unwrap();
    let path = bm.sample();

    assert_eq!(path[[0, 0]], 1.0);
    assert_eq!(path[[1, 0]], -2.0);
  }

  #[test]
  fn default_start_value_is_zero() {
    let bm = BrownianMotion::new(0.0, 1.0, N, 4, None).unwrap();
    let path = bm.sample();

    for d in 0..4 {
      assert_eq!(path[[d, 0]], 0.0);
    }
  }

  #[test]
  fn same_seed_reproduces_the_same_path() {
    let bm = BrownianMotion::new(0.0, 1.0, N, 2, None).unwrap();

    let a = bm.trajectory(&mut StdRng::seed_from_u64(42));
    let b = bm.trajectory(&mut StdRng::seed_from_u64(42));
    let c = bm.trajectory(&mut StdRng::seed_from_u64(43));

    assert_eq!(a, b);
    assert_ne!(a, c);
  }

  #[test]
  fn terminal_variance_converges_to_the_horizon() {
    let bm = BrownianMotion::new(0.0, 1.0, N, 1, None).unwrap();
    let mut rng = StdRng::seed_from_u64(7);

    let terminals: Vec<f64> = (0..2000)
      .map(|_| bm.trajectory(&mut rng)[[0, N - 1]])
      .collect();

    let mean = Statistics::mean(terminals.iter());
    let var = Statistics::variance(terminals.iter());

    assert!(mean.abs() < 0.1, "terminal mean {mean} too far from 0");
    assert!((var - 1.0).abs() < 0.15, "terminal variance {var} too far from 1");
  }

  #[test]
  fn increments_have_zero_mean_and_variance_dt() {
    let bm = BrownianMotion::new(0.0, 1.0, N, 3, None).unwrap();
    let dt = bm.grid().dt();
    let mut rng = StdRng::seed_from_u64(11);

    let samples: Vec<f64> = bm.increments(&mut rng).iter().copied().collect();
    let mean = Statistics::mean(samples.iter());
    let var = Statistics::variance(samples.iter());

    assert_abs_diff_eq!(mean, 0.0, epsilon = 0.003);
    assert_abs_diff_eq!(var, dt, epsilon = 0.15 * dt);
  }

  #[test]
  fn zero_dim_is_unsupported() {
    let err = BrownianMotion::new(0.0, 1.0, N, 0, None).unwrap_err();
    assert!(matches!(err, ProcessError::Unsupported(_)));
  }

  #[test]
  fn start_value_length_must_match_dim() {
    let err = BrownianMotion::new(0.0, 1.0, N, 2, Some(arr1(&[1.0]))).unwrap_err();
    assert!(matches!(
      err,
      ProcessError::InvalidConfiguration { field: "start_value", .. }
    ));
  }

  #[test]
  fn describe_exposes_grid_and_dim() {
    let bm = BrownianMotion::new(0.0, 1.0, N, 2, None).unwrap();
    let repr = format!("{}", bm);

    assert!(repr.contains("start = 0"));
    assert!(repr.contains("end = 1"));
    assert!(repr.contains("dim = 2"));
  }
}
