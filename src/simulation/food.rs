//! Food sites and clump generation
//!
//! Food is laid out once at setup as clumps: each clump picks a center away
//! from the field edges and scatters small square pieces around it. A piece
//! is consumed by the first searching agent that lands on it and never
//! comes back.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::config::FoodConfig;
use crate::core::types::{Rect, Vec2};

/// A single piece of food
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodSite {
    pub rect: Rect,
}

impl FoodSite {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }
}

/// Scatter `config.clumps` clumps of `config.pieces_per_clump` pieces
///
/// Clump centers are drawn from `[margin, dim - margin]` on each axis and
/// pieces are offset by up to `jitter` in each direction, both inclusive.
/// The config must already be validated against the field size.
pub fn generate_food_clumps<R: Rng + ?Sized>(
    config: &FoodConfig,
    width: usize,
    height: usize,
    rng: &mut R,
) -> Vec<FoodSite> {
    let mut food = Vec::with_capacity(config.total_pieces());
    if config.total_pieces() == 0 {
        return food;
    }

    let max_x = width as i32 - config.margin;
    let max_y = height as i32 - config.margin;

    for _ in 0..config.clumps {
        let cx = rng.gen_range(config.margin..=max_x);
        let cy = rng.gen_range(config.margin..=max_y);
        for _ in 0..config.pieces_per_clump {
            let dx = rng.gen_range(-config.jitter..=config.jitter);
            let dy = rng.gen_range(-config.jitter..=config.jitter);
            food.push(FoodSite::new(Rect::new(
                cx + dx,
                cy + dy,
                config.piece_size,
                config.piece_size,
            )));
        }
    }

    food
}

/// Index of the first site containing `point`, in iteration order
pub fn find_food_at(food: &[FoodSite], point: Vec2) -> Option<usize> {
    food.iter().position(|site| site.contains(point))
}
