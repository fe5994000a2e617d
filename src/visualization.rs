//! # Visualization
//!
//! $$
//! \{X_{t_i}\}_{i=0}^{n-1} \mapsto \text{line, planar or spatial path charts}
//! $$
//!
//! Charts are returned as [`plotly::Plot`] values; rendering them (via
//! `Plot::show` or `Plot::write_html`) is left to the caller.

use ndarray::Array1;
use ndarray::Array2;
use plotly::color::Rgb;
use plotly::common::Line;
use plotly::common::Marker;
use plotly::common::Mode;
use plotly::Layout;
use plotly::Plot;
use plotly::Scatter;
use plotly::Scatter3D;
use tracing::warn;

use crate::process::ProcessExt;
use crate::process::RadialPart;

/// Component access for path containers, independent of their array shape.
pub trait Plottable {
  fn n_components(&self) -> usize;
  fn component(&self, idx: usize) -> Vec<f64>;
}

impl Plottable for Array1<f64> {
  fn n_components(&self) -> usize {
    1
  }

  fn component(&self, _idx: usize) -> Vec<f64> {
    self.to_vec()
  }
}

impl Plottable for Array2<f64> {
  fn n_components(&self) -> usize {
    self.nrows()
  }

  fn component(&self, idx: usize) -> Vec<f64> {
    self.row(idx).to_vec()
  }
}

/// Sample a fresh trajectory from the process and chart it.
///
/// One-dimensional paths are drawn against the time axis, two-dimensional
/// paths in the plane, and higher-dimensional paths as a spatial curve of the
/// first three components with markers colored by radial magnitude.
pub fn plot_trajectory<P>(process: &P, title: &str) -> Plot
where
  P: ProcessExt,
  P::Output: Plottable + RadialPart,
{
  let trajectory = process.sample();

  match trajectory.n_components() {
    1 => line_chart(process.grid().timeaxis(), trajectory.component(0), title),
    2 => planar_chart(&trajectory, title),
    _ => spatial_chart(&trajectory, title),
  }
}

fn layout(title: &str) -> Layout {
  Layout::new().width(900).height(900).title(title)
}

fn line_chart(timeaxis: &Array1<f64>, values: Vec<f64>, title: &str) -> Plot {
  let path = Scatter::new(timeaxis.to_vec(), values)
    .mode(Mode::Lines)
    .opacity(0.8)
    .line(Line::new().width(1.0));

  let mut plot = Plot::new();
  plot.add_trace(path);
  plot.set_layout(layout(title));

  plot
}

fn planar_chart<T: Plottable>(trajectory: &T, title: &str) -> Plot {
  let path = Scatter::new(trajectory.component(0), trajectory.component(1))
    .mode(Mode::Lines)
    .opacity(0.8)
    .line(Line::new().width(1.0));

  let mut plot = Plot::new();
  plot.add_trace(path);
  plot.set_layout(layout(title));

  plot
}

fn spatial_chart<T: Plottable + RadialPart>(trajectory: &T, title: &str) -> Plot {
  let n_comp = trajectory.n_components();
  if n_comp > 3 {
    warn!(
      dim = n_comp,
      "the dimension of the process is > 3, plotting the first 3 components"
    );
  }

  // Radial magnitude over all components, not just the three shown.
  let colors = radial_colors(&trajectory.radial_part());

  let path = Scatter3D::new(
    trajectory.component(0),
    trajectory.component(1),
    trajectory.component(2),
  )
  .mode(Mode::LinesMarkers)
  .opacity(0.5)
  .line(Line::new().width(3.0))
  .marker(Marker::new().size(1).color_array(colors));

  let mut plot = Plot::new();
  plot.add_trace(path);
  plot.set_layout(layout(title));

  plot
}

fn radial_colors(radial: &Array1<f64>) -> Vec<Rgb> {
  const LOW: (f64, f64, f64) = (26.0, 35.0, 126.0);
  const HIGH: (f64, f64, f64) = (255.0, 111.0, 0.0);

  let min = radial.iter().copied().fold(f64::INFINITY, f64::min);
  let max = radial.iter().copied().fold(f64::NEG_INFINITY, f64::max);
  let span = if max > min { max - min } else { 1.0 };

  radial
    .iter()
    .map(|&r| {
      let s = (r - min) / span;
      Rgb::new(
        (LOW.0 + s * (HIGH.0 - LOW.0)) as u8,
        (LOW.1 + s * (HIGH.1 - LOW.1)) as u8,
        (LOW.2 + s * (HIGH.2 - LOW.2)) as u8,
      )
    })
    .collect()
}
