use image::RgbImage;

use super::ColorKey;

/// Decoded raster, alpha already discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    image: RgbImage,
}

impl PixelGrid {
    pub fn new(image: RgbImage) -> Self {
        Self { image }
    }

    /// Build a grid by evaluating `f` for every coordinate
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> ColorKey) -> Self {
        let image = RgbImage::from_fn(width, height, |x, y| {
            let (r, g, b) = f(x, y).rgb();
            image::Rgb([r, g, b])
        });
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color at `(x, y)`. Panics if the coordinate is outside the grid.
    pub fn pixel_at(&self, x: u32, y: u32) -> ColorKey {
        let [r, g, b] = self.image.get_pixel(x, y).0;
        ColorKey::from_rgb(r, g, b)
    }

    /// Every pixel in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = ColorKey> + '_ {
        self.image
            .pixels()
            .map(|p| ColorKey::from_rgb(p.0[0], p.0[1], p.0[2]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fn_round_trips_pixels() {
        let grid = PixelGrid::from_fn(3, 2, |x, y| ColorKey::new(x + 10 * y));

        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.pixel_at(2, 1), ColorKey::new(12));
        assert_eq!(grid.pixels().count(), 6);
    }
}
