//! The colony's home

use serde::{Deserialize, Serialize};

use crate::core::types::{Rect, Vec2};

/// Fixed square centered in the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Anthill {
    pub rect: Rect,
}

impl Anthill {
    /// Square of side `size` centered in a `width` x `height` field
    pub fn centered(width: usize, height: usize, size: usize) -> Self {
        let (w, h, s) = (width as i32, height as i32, size as i32);
        Self {
            rect: Rect::new(w / 2 - s / 2, h / 2 - s / 2, s, s),
        }
    }

    /// Where new agents appear
    pub fn entrance(&self, width: usize, height: usize) -> Vec2 {
        Vec2::new(width as f32 / 2.0, height as f32 / 2.0)
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.rect.contains(point)
    }
}
