//! Pheromone fields
//!
//! Each layer is a dense grid of non-negative intensities. Every tick the
//! whole grid is attenuated by a multiplicative factor, and agents add
//! bounded deposits at their own cell.
//!
//! Intensities are stored as `f32`. Readers that need bytes (renderers,
//! recorders) go through [`PheromoneField::to_bytes`], which clips to
//! `[0, 255]` and truncates toward zero.

use serde::{Deserialize, Serialize};

use crate::spatial::grid::Grid;

/// Default ceiling for a single cell
pub const MAX_INTENSITY: f32 = 255.0;

/// Which of the two trail layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    /// Laid by agents looking for food
    Search,
    /// Laid by agents carrying food home
    Return,
}

impl Layer {
    pub fn opposite(self) -> Self {
        match self {
            Self::Search => Self::Return,
            Self::Return => Self::Search,
        }
    }
}

/// Dense decaying scalar field
#[derive(Debug, Clone)]
pub struct PheromoneField {
    cells: Grid<f32>,
    max_intensity: f32,
}

impl PheromoneField {
    /// Zero-initialized field with the default ceiling
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_ceiling(width, height, MAX_INTENSITY)
    }

    pub fn with_ceiling(width: usize, height: usize, max_intensity: f32) -> Self {
        Self {
            cells: Grid::new(width, height),
            max_intensity,
        }
    }

    pub fn width(&self) -> usize {
        self.cells.width
    }

    pub fn height(&self) -> usize {
        self.cells.height
    }

    pub fn max_intensity(&self) -> f32 {
        self.max_intensity
    }

    /// Multiply every cell by `factor`
    pub fn decay(&mut self, factor: f32) {
        for cell in self.cells.as_mut_slice() {
            *cell *= factor;
        }
    }

    /// Add `amount` to the cell under `(x, y)`, saturating at the ceiling
    ///
    /// Coordinates are truncated toward zero. Callers clamp positions to the
    /// field first; a deposit that still falls outside is dropped.
    pub fn deposit(&mut self, x: f32, y: f32, amount: f32) {
        let (ix, iy) = (x as i64, y as i64);
        let ceiling = self.max_intensity;
        match self.cells.get_mut(ix, iy) {
            Some(cell) => *cell = (*cell + amount).clamp(0.0, ceiling),
            None => tracing::warn!(x, y, "pheromone deposit outside field ignored"),
        }
    }

    /// Raw intensity at `(x, y)`, or 0 outside the field
    #[inline]
    pub fn sample(&self, x: i64, y: i64) -> f32 {
        self.cells.get(x, y).copied().unwrap_or(0.0)
    }

    /// Row-major view of every cell
    pub fn cells(&self) -> &[f32] {
        self.cells.as_slice()
    }

    /// Sum of all intensities
    pub fn total(&self) -> f64 {
        self.cells.as_slice().iter().map(|&v| v as f64).sum()
    }

    /// Row-major byte view: clipped to `[0, 255]`, truncated toward zero
    pub fn to_bytes(&self) -> Vec<u8> {
        // Float-to-int `as` casts truncate and saturate
        self.cells.as_slice().iter().map(|&v| v as u8).collect()
    }
}

/// The search and return layers, addressable by [`Layer`]
#[derive(Debug, Clone)]
pub struct PheromoneLayers {
    pub search: PheromoneField,
    pub returning: PheromoneField,
}

impl PheromoneLayers {
    pub fn new(width: usize, height: usize, max_intensity: f32) -> Self {
        Self {
            search: PheromoneField::with_ceiling(width, height, max_intensity),
            returning: PheromoneField::with_ceiling(width, height, max_intensity),
        }
    }

    #[inline]
    pub fn get(&self, layer: Layer) -> &PheromoneField {
        match layer {
            Layer::Search => &self.search,
            Layer::Return => &self.returning,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, layer: Layer) -> &mut PheromoneField {
        match layer {
            Layer::Search => &mut self.search,
            Layer::Return => &mut self.returning,
        }
    }

    /// Decay both layers once
    pub fn decay(&mut self, factor: f32) {
        self.search.decay(factor);
        self.returning.decay(factor);
    }
}
