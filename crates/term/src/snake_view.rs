//! SnakeView: maps a `SnakeGame` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{BoardLayout, Viewport, BORDER_STYLE, LABEL_STYLE, VALUE_STYLE};
use crate::snake::SnakeGame;
use crate::texture::HeadTexture;

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const BODY: Rgb = Rgb::new(0x80, 0x80, 0x80);
const APPLE: Rgb = Rgb::new(0xFF, 0x00, 0x00);

pub struct SnakeView {
    tile_w: u16,
    tile_h: u16,
    head_texture: Option<HeadTexture>,
}

impl Default for SnakeView {
    fn default() -> Self {
        Self::new(2, 1)
    }
}

impl SnakeView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w,
            tile_h,
            head_texture: None,
        }
    }

    pub fn with_head_texture(mut self, texture: HeadTexture) -> Self {
        self.head_texture = Some(texture);
        self
    }

    pub fn tile_size(&self) -> (u16, u16) {
        (self.tile_w, self.tile_h)
    }

    pub fn layout(&self, game: &SnakeGame, viewport: Viewport) -> BoardLayout {
        let cfg = game.config();
        BoardLayout::centered(
            viewport,
            cfg.width as u16,
            cfg.height as u16,
            self.tile_w,
            self.tile_h,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, game: &SnakeGame, paused: bool, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let layout = self.layout(game, viewport);
        layout.fill_background(fb, CellStyle::solid(BACKGROUND));
        layout.draw_border(fb, BORDER_STYLE);

        // With a texture the head is drawn last, on top of everything.
        let skip = usize::from(self.head_texture.is_some());
        for (x, y) in game.body().iter().skip(skip) {
            layout.fill_tile(fb, x as i32, y as i32, ' ', CellStyle::solid(BODY));
        }

        let (ax, ay) = game.apple();
        layout.fill_tile(fb, ax as i32, ay as i32, ' ', CellStyle::solid(APPLE));

        if let Some(texture) = &self.head_texture {
            let (hx, hy) = game.body().head();
            let (px, py) = layout.tile_origin(hx as u16, hy as u16);
            texture.draw(fb, px, py);
        }

        if let Some(panel_x) = layout.panel_x(viewport, 10) {
            let y = layout.y;
            fb.put_str(panel_x, y, "LENGTH", LABEL_STYLE);
            fb.put_u32(panel_x, y + 1, game.body().len() as u32, VALUE_STYLE);
            fb.put_str(panel_x, y + 3, "RESETS", LABEL_STYLE);
            fb.put_u32(panel_x, y + 4, game.resets(), VALUE_STYLE);
            fb.put_str(panel_x, y + 6, "WASD move", VALUE_STYLE);
            fb.put_str(panel_x, y + 7, "P pause", VALUE_STYLE);
            fb.put_str(panel_x, y + 8, "Esc quit", VALUE_STYLE);
        }

        if paused {
            layout.draw_overlay_text(fb, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &SnakeGame, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, paused, viewport, &mut fb);
        fb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::SnakeConfig;

    #[test]
    fn body_and_apple_are_colored_tiles() {
        let mut game = SnakeGame::with_seed(SnakeConfig::new(4, 4), 1);
        game.set_apple((3, 3));
        let view = SnakeView::default();
        // frame: 4*2+2 = 10 wide, 4+2 = 6 high
        let fb = view.render(&game, false, Viewport::new(10, 6));

        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        // head at (1, 0) -> cells (3..5, 1)
        assert_eq!(fb.get(3, 1).unwrap().style.bg, BODY);
        assert_eq!(fb.get(4, 1).unwrap().style.bg, BODY);
        // apple at (3, 3) -> cells (7..9, 4)
        assert_eq!(fb.get(7, 4).unwrap().style.bg, APPLE);
        assert_eq!(fb.get(1, 1).unwrap().style.bg, BACKGROUND);
    }

    #[test]
    fn paused_overlay_is_drawn() {
        let game = SnakeGame::with_seed(SnakeConfig::default(), 1);
        let fb = SnakeView::default().render(&game, true, Viewport::new(42, 22));
        assert!(fb.text().contains("PAUSED"));
    }
}
