//! # Stochastic Process Trajectory Simulation
//!
//! `stochproc` provides a small framework for generating discretized sample
//! paths of continuous-time stochastic processes over a fixed time horizon,
//! for use in simulation, visualization, and numerical experimentation.
//!
//! ## Modules
//!
//! | Module            | Description                                                                      |
//! |-------------------|----------------------------------------------------------------------------------|
//! | [`error`]         | Configuration error taxonomy shared by all process constructors.                 |
//! | [`grid`]          | Evenly spaced discretization of the time horizon.                                |
//! | [`process`]       | The [`ProcessExt`] sampling contract and radial-magnitude projections.           |
//! | [`process::bm`]   | N-dimensional standard Brownian motion.                                          |
//! | [`sde`]           | One-dimensional SDEs integrated with the explicit Euler-Maruyama scheme.         |
//! | [`visualization`] | Plotly charts for 1D, 2D and 3D trajectories.                                    |
//!
//! ## Randomness
//!
//! Every sampling method takes an explicit `&mut impl Rng`, so callers control
//! seeding and thread placement. The `sample()`/`sample_increments()`
//! conveniences draw from the thread-local generator instead.
//!
//! ## Example Usage
//!
//! ```rust
//! use stochproc::process::bm::BrownianMotion;
//! use stochproc::ProcessExt;
//!
//! let bm = BrownianMotion::new(0.0, 1.0, 1000, 2, None).unwrap();
//! let path = bm.sample();
//! assert_eq!(path.shape(), &[2, 1000]);
//! ```

pub mod error;
pub mod grid;
pub mod process;
pub mod sde;
pub mod visualization;

pub use crate::error::ProcessError;
pub use crate::error::Result;
pub use crate::process::ProcessExt;
pub use crate::process::RadialPart;

/// Default number of time steps
pub const N: usize = 1000;
/// Default initial value
pub const X0: f64 = 0.5;
