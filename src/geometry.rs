use crate::{CellGrid, ConfigError};

/// Floats per vertex: x, y, r, g, b — position before color. Consumers bind
/// attributes against this interleaved layout.
pub const FLOATS_PER_VERTEX: usize = 5;
/// Two unindexed triangles per cell.
pub const VERTICES_PER_CELL: usize = 6;
pub const FLOATS_PER_CELL: usize = FLOATS_PER_VERTEX * VERTICES_PER_CELL;

/// Flat vertex stream derived from a grid: one quad per cell, mapped into
/// the `[-1,1]^2` square, white for alive and black for dead.
///
/// The buffer's length is fixed at `width * height * 30` for its lifetime;
/// `rebuild` only rewrites the contents. Cell blocks follow the grid's
/// column-major order, so the mapping from cell to vertex range never
/// changes between rebuilds.
#[derive(Debug)]
pub struct GeometryBuffer {
    width: usize,
    height: usize,
    vertices: Vec<f32>,
}

impl GeometryBuffer {
    pub fn new(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            vertices: vec![0.; width * height * FLOATS_PER_CELL],
        })
    }

    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Regenerates the whole vertex stream from the grid's current
    /// generation and returns it. The grid's dimensions must match the
    /// buffer's. Deterministic: without an intervening `step` two rebuilds
    /// produce identical contents.
    pub fn rebuild(&mut self, grid: &CellGrid) -> &[f32] {
        assert_eq!((grid.width(), grid.height()), (self.width, self.height));

        let cell_w = 2. / self.width as f32;
        let cell_h = 2. / self.height as f32;
        let mut idx = 0;
        for cell in grid.cells() {
            let sx = -1. + cell.x as f32 * cell_w;
            let sy = -1. + cell.y as f32 * cell_h;
            let color = if cell.alive { [1., 1., 1.] } else { [0.; 3] };

            for [vx, vy] in [
                [sx, sy],
                [sx + cell_w, sy],
                [sx + cell_w, sy + cell_h],
                [sx, sy],
                [sx + cell_w, sy + cell_h],
                [sx, sy + cell_h],
            ] {
                self.vertices[idx] = vx;
                self.vertices[idx + 1] = vy;
                self.vertices[idx + 2..idx + FLOATS_PER_VERTEX].copy_from_slice(&color);
                idx += FLOATS_PER_VERTEX;
            }
        }
        debug_assert_eq!(idx, self.vertices.len());
        &self.vertices
    }
}
