//! Frame recorder for buffered playback
//!
//! Captures one snapshot per tick into an ordered sequence that a viewer
//! can replay after the run. Lives entirely outside the tick.

use crate::simulation::snapshot::TickSnapshot;
use crate::simulation::world::Simulation;

pub struct FrameRecorder {
    capacity: usize,
    frames: Vec<TickSnapshot>,
}

impl FrameRecorder {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            frames: Vec::with_capacity(capacity),
        }
    }

    /// Store the current state; returns false once the recorder is full
    pub fn record(&mut self, sim: &Simulation) -> bool {
        if self.is_full() {
            return false;
        }
        self.frames.push(sim.snapshot());
        true
    }

    pub fn frames(&self) -> &[TickSnapshot] {
        &self.frames
    }

    /// Frames in capture order
    pub fn replay(&self) -> impl Iterator<Item = &TickSnapshot> + '_ {
        self.frames.iter()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.frames.len() >= self.capacity
    }

    pub fn clear(&mut self) {
        self.frames.clear();
    }

}
