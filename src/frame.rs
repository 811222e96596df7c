use crate::color::{BLACK, Rgb};
use crate::face::{DieFace, LED_COUNT};

/// Fixed-size color buffer for the whole die
///
/// Allocated once and mutated in place every tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    cells: [Rgb; LED_COUNT],
}

impl FrameBuffer {
    pub const fn new() -> Self {
        Self {
            cells: [BLACK; LED_COUNT],
        }
    }

    /// Reset every cell to black
    pub fn clear(&mut self) {
        self.fill(BLACK);
    }

    /// Set every cell to `color`
    pub fn fill(&mut self, color: Rgb) {
        self.cells.fill(color);
    }

    /// Set a single cell; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, color: Rgb) {
        if let Some(cell) = self.cells.get_mut(index) {
            *cell = color;
        }
    }

    /// Light the cells of `face` with `color`, leaving other cells untouched
    pub fn light_face(&mut self, face: DieFace, color: Rgb) {
        self.cells[face.cells()].fill(color);
    }

    pub fn get(&self, index: usize) -> Option<Rgb> {
        self.cells.get(index).copied()
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.cells
    }

    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.cells
    }

    /// Check if every cell is black
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|cell| *cell == BLACK)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
