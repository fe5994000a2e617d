use ndarray::Array1;

use crate::error::ProcessError;
use crate::error::Result;

/// A fixed, evenly spaced discretization of the time horizon.
///
/// The axis holds `num_steps` samples over `[starttime, endtime]`; the step
/// size `dt` is the constant spacing between consecutive samples.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
  starttime: f64,
  endtime: f64,
  num_steps: usize,
  timeaxis: Array1<f64>,
  dt: f64,
}

impl TimeGrid {
  /// Create a new time grid over `[starttime, endtime]` with `num_steps` samples.
  pub fn new(starttime: f64, endtime: f64, num_steps: usize) -> Result<Self> {
    if starttime >= endtime {
      return Err(ProcessError::InvalidConfiguration {
        field: "starttime",
        reason: format!("starttime ({starttime}) must be smaller than endtime ({endtime})"),
      });
    }

    if num_steps < 2 {
      return Err(ProcessError::InvalidConfiguration {
        field: "num_steps",
        reason: format!("num_steps ({num_steps}) must be at least 2"),
      });
    }

    let timeaxis = Array1::linspace(starttime, endtime, num_steps);
    let dt = timeaxis[1] - timeaxis[0];

    Ok(Self {
      starttime,
      endtime,
      num_steps,
      timeaxis,
      dt,
    })
  }

  pub fn starttime(&self) -> f64 {
    self.starttime
  }

  pub fn endtime(&self) -> f64 {
    self.endtime
  }

  pub fn num_steps(&self) -> usize {
    self.num_steps
  }

  pub fn timeaxis(&self) -> &Array1<f64> {
    &self.timeaxis
  }

  pub fn dt(&self) -> f64 {
    self.dt
  }
}
