//! Decorative bitmap drawn over the snake's head tile.
//!
//! A terminal tile of `tile_w` x `tile_h` cells can show `tile_w` x
//! `2 * tile_h` pixels by printing the upper-half block with the top pixel as
//! foreground and the bottom pixel as background. The bitmap is resampled to
//! exactly that grid once, at load time.

use std::path::Path;

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Path of the optional head bitmap, relative to the working directory
pub const HEAD_TEXTURE_PATH: &str = "flushed.bmp";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadTexture {
    tile_w: u16,
    tile_h: u16,
    /// `tile_w` x `2 * tile_h` pixels, row-major
    pixels: Vec<Rgb>,
}

impl HeadTexture {
    /// Load and resample a bitmap for tiles of `tile_w` x `tile_h` cells
    pub fn load(path: impl AsRef<Path>, tile_w: u16, tile_h: u16) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .with_context(|| format!("failed to load texture {}", path.display()))?
            .to_rgb8();
        Ok(Self::from_image(&img, tile_w, tile_h))
    }

    pub fn from_image(img: &RgbImage, tile_w: u16, tile_h: u16) -> Self {
        let (w, h) = (tile_w.max(1) as u32, (tile_h.max(1) * 2) as u32);
        let scaled = imageops::resize(img, w, h, FilterType::Triangle);
        let pixels = scaled
            .pixels()
            .map(|p| Rgb::new(p.0[0], p.0[1], p.0[2]))
            .collect();
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            pixels,
        }
    }

    fn pixel(&self, x: u16, y: u16) -> Rgb {
        self.pixels[(y as usize) * (self.tile_w as usize) + (x as usize)]
    }

    /// Draw with the tile's top-left terminal cell at (`x`, `y`)
    pub fn draw(&self, fb: &mut FrameBuffer, x: u16, y: u16) {
        for cy in 0..self.tile_h {
            for cx in 0..self.tile_w {
                let top = self.pixel(cx, cy * 2);
                let bottom = self.pixel(cx, cy * 2 + 1);
                fb.put_char(x + cx, y + cy, '▀', CellStyle::new(top, bottom));
            }
        }
    }
}
