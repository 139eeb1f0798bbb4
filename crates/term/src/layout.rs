//! Board placement and the drawing helpers both game views share.
//!
//! A board of `cols` x `rows` tiles is drawn inside a one-cell border and
//! centered in the viewport. Each tile is a `tile_w` x `tile_h` rectangle of
//! terminal cells; 2x1 compensates for the usual glyph aspect ratio.

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub const BORDER_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
pub const LABEL_STYLE: CellStyle =
    CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
pub const VALUE_STYLE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

/// Where a board lands on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border
    pub x: u16,
    pub y: u16,
    pub tile_w: u16,
    pub tile_h: u16,
    pub cols: u16,
    pub rows: u16,
}

impl BoardLayout {
    /// Center a `cols` x `rows` board in `viewport`
    pub fn centered(viewport: Viewport, cols: u16, rows: u16, tile_w: u16, tile_h: u16) -> Self {
        let mut layout = Self {
            x: 0,
            y: 0,
            tile_w,
            tile_h,
            cols,
            rows,
        };
        layout.x = viewport.width.saturating_sub(layout.frame_w()) / 2;
        layout.y = viewport.height.saturating_sub(layout.frame_h()) / 2;
        layout
    }

    /// Width including the border
    pub fn frame_w(&self) -> u16 {
        self.cols * self.tile_w + 2
    }

    /// Height including the border
    pub fn frame_h(&self) -> u16 {
        self.rows * self.tile_h + 2
    }

    /// Terminal cell of a tile's top-left corner
    pub fn tile_origin(&self, col: u16, row: u16) -> (u16, u16) {
        (
            self.x + 1 + col * self.tile_w,
            self.y + 1 + row * self.tile_h,
        )
    }

    /// Fill one tile; tiles outside the board are skipped
    pub fn fill_tile(&self, fb: &mut FrameBuffer, col: i32, row: i32, ch: char, style: CellStyle) {
        if col < 0 || row < 0 || col >= self.cols as i32 || row >= self.rows as i32 {
            return;
        }
        let (px, py) = self.tile_origin(col as u16, row as u16);
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ch, style);
    }

    /// Fill the whole play area
    pub fn fill_background(&self, fb: &mut FrameBuffer, style: CellStyle) {
        fb.fill_rect(
            self.x + 1,
            self.y + 1,
            self.cols * self.tile_w,
            self.rows * self.tile_h,
            ' ',
            style,
        );
    }

    pub fn draw_border(&self, fb: &mut FrameBuffer, style: CellStyle) {
        let (x, y, w, h) = (self.x, self.y, self.frame_w(), self.frame_h());

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    /// Text centered on the board's middle row
    pub fn draw_overlay_text(&self, fb: &mut FrameBuffer, text: &str) {
        let mid_y = self.y.saturating_add(self.frame_h() / 2);
        let text_w = text.chars().count() as u16;
        let x = self.x.saturating_add(self.frame_w().saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }

    /// First column right of the board with room for a side panel, if any
    pub fn panel_x(&self, viewport: Viewport, min_width: u16) -> Option<u16> {
        let panel_x = self.x.saturating_add(self.frame_w()).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < min_width {
            return None;
        }
        Some(panel_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_centers_frame() {
        let layout = BoardLayout::centered(Viewport::new(42, 30), 10, 20, 2, 1);
        assert_eq!(layout.frame_w(), 22);
        assert_eq!(layout.frame_h(), 22);
        assert_eq!((layout.x, layout.y), (10, 4));
        assert_eq!(layout.tile_origin(0, 0), (11, 5));
        assert_eq!(layout.tile_origin(3, 2), (17, 7));
    }

    #[test]
    fn tiles_outside_board_are_skipped() {
        let layout = BoardLayout::centered(Viewport::new(6, 4), 2, 2, 2, 1);
        let mut fb = FrameBuffer::new(6, 4);
        layout.fill_tile(&mut fb, -1, 0, '#', CellStyle::default());
        layout.fill_tile(&mut fb, 0, 2, '#', CellStyle::default());
        assert!(!fb.text().contains('#'));
        layout.fill_tile(&mut fb, 1, 1, '#', CellStyle::default());
        assert_eq!(fb.get(3, 2).unwrap().ch, '#');
        assert_eq!(fb.get(4, 2).unwrap().ch, '#');
    }
}
