//! Heat diffusion on a fixed 2D grid.
//!
//! A [`GridState`](d2::GridState) holds the temperature field, the pinned
//! source field and the derived color field. Each call to
//! [`DiffusionEngine::step`](d2::DiffusionEngine::step) averages every free
//! cell with its four neighbours, re-pins the sources and recolors the grid.
//!
//! ```
//! use heatgrid::color::MAX_SUPPLY;
//! use heatgrid::d2::{DiffusionEngine, GridState};
//!
//! let mut grid = GridState::new(3, 3);
//! grid.toggle_source(1, 1, MAX_SUPPLY).unwrap();
//!
//! let mut engine = DiffusionEngine::new();
//! engine.step(&mut grid);
//!
//! assert_eq!(grid.value(1, 1).unwrap(), MAX_SUPPLY);
//! assert_eq!(grid.value(0, 1).unwrap(), 0.0);
//! ```

pub mod color;
pub mod config;
pub mod d2;
mod error;

pub use config::SimConfig;
pub use error::GridError;
