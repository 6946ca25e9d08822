use crate::ConfigError;

/// A single cell of the field. The position is fixed at allocation and only
/// identifies the cell; addressing goes through the grid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub alive: bool,
    pub x: usize,
    pub y: usize,
}

/// Double-buffered bounded Game of Life field.
///
/// Two equally sized flat buffers of cells: `current` holds the live
/// generation, `next` is scratch space for the one being computed. A `step`
/// fully overwrites `next` from `current` and then swaps the two, so no
/// reader can ever observe a half-advanced generation. Cells are stored
/// column-major (`x * height + y`), the same order the geometry pass
/// traverses them in.
///
/// The field does not wrap: neighbors outside `[0,width) x [0,height)` are
/// excluded from the count, so edge and corner cells see fewer than 8
/// candidates.
#[derive(Debug)]
pub struct CellGrid {
    width: usize,
    height: usize,
    current: Vec<Cell>,
    next: Vec<Cell>,
}

impl CellGrid {
    /// Creates an all-dead field.
    pub fn blank(width: usize, height: usize) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::InvalidDimensions { width, height });
        }
        let mut current = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                current.push(Cell { alive: false, x, y });
            }
        }
        let next = current.clone();
        Ok(Self {
            width,
            height,
            current,
            next,
        })
    }

    /// Creates a field with every cell independently alive with probability
    /// 0.5. `seed` makes the fill reproducible; `None` draws from entropy.
    pub fn random(width: usize, height: usize, seed: Option<u64>) -> Result<Self, ConfigError> {
        use rand::{Rng, SeedableRng};
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        let mut grid = Self::blank(width, height)?;
        for cell in grid.current.iter_mut() {
            cell.alive = rng.gen_bool(0.5);
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.current[x * self.height + y].alive
    }

    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        self.current[x * self.height + y].alive = alive;
    }

    /// Read view of the current generation, column-major.
    pub fn cells(&self) -> &[Cell] {
        &self.current
    }

    fn count_neibs(&self, x: usize, y: usize) -> usize {
        let x1 = x.saturating_sub(1);
        let x2 = (x + 1).min(self.width - 1);
        let y1 = y.saturating_sub(1);
        let y2 = (y + 1).min(self.height - 1);
        let mut count = 0;
        for nx in x1..=x2 {
            for ny in y1..=y2 {
                if (nx, ny) != (x, y) && self.current[nx * self.height + ny].alive {
                    count += 1;
                }
            }
        }
        count
    }

    /// Advances exactly one generation. The pass reads only `current` and
    /// writes only `next`; the swap happens after the pass completes.
    pub fn step(&mut self) {
        for x in 0..self.width {
            for y in 0..self.height {
                let neibs = self.count_neibs(x, y);
                let idx = x * self.height + y;
                self.next[idx].alive = if self.current[idx].alive {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
            }
        }
        std::mem::swap(&mut self.current, &mut self.next);
    }
}
