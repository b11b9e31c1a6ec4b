use std::collections::HashMap;

use crate::models::{ColorKey, PixelGrid};

/// Pixel count per exact color of one image
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: HashMap<ColorKey, u64>,
}

impl Histogram {
    /// Count every pixel of `grid` exactly once
    pub fn build(grid: &PixelGrid) -> Self {
        let mut counts = HashMap::new();
        for color in grid.pixels() {
            *counts.entry(color).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Number of distinct colors
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts (the pixel count of the source grid)
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn count(&self, color: ColorKey) -> u64 {
        self.counts.get(&color).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorKey, u64)> + '_ {
        self.counts.iter().map(|(color, count)| (*color, *count))
    }
}
