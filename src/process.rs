//! General abstraction layer for sampling time-discretized stochastic processes.

pub mod bm;

use ndarray::Array1;
use ndarray::Array2;
use ndarray::Axis;
use rand::Rng;

use crate::grid::TimeGrid;

/// Sampling contract shared by all time-discretized processes.
///
/// A process owns its [`TimeGrid`], dimensionality, and start value, fixed at
/// construction. Sampling draws fresh randomness from the supplied generator
/// on every call; no state is cached and no state is mutated, so a process is
/// reentrant and safe to share across threads.
pub trait ProcessExt: Send + Sync {
  type Output: Send;

  fn grid(&self) -> &TimeGrid;

  /// Number of spatial dimensions.
  fn dim(&self) -> usize;

  /// The raw per-step stochastic increments of the process.
  fn increments<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output;

  /// The full discretized path, one value per point of the time axis.
  fn trajectory<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Output;

  /// Sample a trajectory from the thread-local generator.
  fn sample(&self) -> Self::Output {
    self.trajectory(&mut rand::thread_rng())
  }

  /// Sample increments from the thread-local generator.
  fn sample_increments(&self) -> Self::Output {
    self.increments(&mut rand::thread_rng())
  }

  /// Euclidean norm of a freshly sampled trajectory at each time step.
  ///
  /// To project a trajectory that was already generated, use
  /// [`RadialPart::radial_part`] on it directly.
  fn radial_part<R: Rng + ?Sized>(&self, rng: &mut R) -> Array1<f64>
  where
    Self::Output: RadialPart,
  {
    self.trajectory(rng).radial_part()
  }

  /// Human-readable summary of the grid and dimensionality.
  fn describe(&self) -> String {
    let grid = self.grid();
    format!(
      "Process(start = {}, end = {}, dt = {}, dim = {})",
      grid.starttime(),
      grid.endtime(),
      grid.dt(),
      self.dim()
    )
  }
}

/// Radial-magnitude projection of a path container.
pub trait RadialPart {
  /// Euclidean norm across the dimension axis at each time step.
  fn radial_part(&self) -> Array1<f64>;
}

impl RadialPart for Array1<f64> {
  fn radial_part(&self) -> Array1<f64> {
    self.mapv(f64::abs)
  }
}

impl RadialPart for Array2<f64> {
  fn radial_part(&self) -> Array1<f64> {
    self.map_axis(Axis(0), |col| col.dot(&col).sqrt())
  }
}

#[cfg(test)]
mod tests {
  use approx::assert_relative_eq;
  use ndarray::arr1;
  use ndarray::arr2;

  use super::*;

  #[test]
  fn radial_part_of_a_plane_path_is_the_column_norm() {
    let path = arr2(&[[3.0, 0.0, 1.0], [4.0, 2.0, 1.0]]);
    let radial = path.radial_part();

    assert_eq!(radial.len(), 3);
    assert_relative_eq!(radial[0], 5.0);
    assert_relative_eq!(radial[1], 2.0);
    assert_relative_eq!(radial[2], 2.0_f64.sqrt());
  }

  #[test]
  fn radial_part_of_a_scalar_path_is_its_absolute_value() {
    let path = arr1(&[-1.5, 0.0, 2.0]);
    assert_eq!(path.radial_part(), arr1(&[1.5, 0.0, 2.0]));
  }
}
