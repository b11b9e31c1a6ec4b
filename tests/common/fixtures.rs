//! Test images and files.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};

/// 3x3 image: 5 white, 3 black, 1 yellow pixel
pub fn flag_png() -> Vec<u8> {
    let image = RgbImage::from_fn(3, 3, |x, y| match y * 3 + x {
        0..=4 => Rgb([0xFF, 0xFF, 0xFF]),
        5..=7 => Rgb([0x00, 0x00, 0x00]),
        _ => Rgb([0xF3, 0xC3, 0x00]),
    });
    encode(&image, ImageFormat::Png)
}

/// 4x4 image with `counts` pixels of each color, remaining pixels black.
/// Colors must be given most frequent first.
pub fn counted_png(colors: &[([u8; 3], u32)]) -> Vec<u8> {
    let mut pixels = Vec::new();
    for (color, count) in colors {
        for _ in 0..*count {
            pixels.push(*color);
        }
    }
    let image = RgbImage::from_fn(4, 4, |x, y| {
        let index = (y * 4 + x) as usize;
        Rgb(pixels.get(index).copied().unwrap_or([0, 0, 0]))
    });
    encode(&image, ImageFormat::Png)
}

pub fn encode(image: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format)
        .expect("encode test image");
    bytes
}

/// Write `urls` one per line into `dir/name`
pub fn write_input(dir: &Path, name: &str, urls: &[String]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, urls.join("\n")).expect("write input file");
    path
}

/// Output lines, without trailing newlines
pub fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .expect("read output file")
        .lines()
        .map(str::to_string)
        .collect()
}
