mod error;
mod geometry;
mod grid;
mod gui;

pub use error::ConfigError;
pub use geometry::{GeometryBuffer, FLOATS_PER_CELL, FLOATS_PER_VERTEX, VERTICES_PER_CELL};
pub use grid::{Cell, CellGrid};
pub use gui::App;
