//! TetrisView: maps a tetris `GameState` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::{BoardLayout, Viewport, BORDER_STYLE, LABEL_STYLE, VALUE_STYLE};
use crate::tetris::{color_of, template, GameState};
use crate::types::{TETRIS_HEIGHT, TETRIS_WIDTH};

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const GRID: Rgb = Rgb::new(128, 128, 128);

/// A lightweight terminal renderer for the Tetris game.
pub struct TetrisView {
    tile_w: u16,
    tile_h: u16,
}

impl Default for TetrisView {
    fn default() -> Self {
        Self::new(2, 1)
    }
}

impl TetrisView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self { tile_w, tile_h }
    }

    pub fn layout(&self, viewport: Viewport) -> BoardLayout {
        BoardLayout::centered(
            viewport,
            TETRIS_WIDTH as u16,
            TETRIS_HEIGHT as u16,
            self.tile_w,
            self.tile_h,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, state: &GameState, paused: bool, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let layout = self.layout(viewport);
        layout.fill_background(fb, CellStyle::solid(BACKGROUND));
        layout.draw_border(fb, BORDER_STYLE);

        let grid = CellStyle::new(GRID, BACKGROUND);
        let board = state.board();
        for y in 0..TETRIS_HEIGHT {
            for x in 0..TETRIS_WIDTH {
                match board.get(x, y).flatten() {
                    Some(kind) => layout.fill_tile(
                        fb,
                        x as i32,
                        y as i32,
                        ' ',
                        CellStyle::solid(color_of(kind)),
                    ),
                    None => layout.fill_tile(fb, x as i32, y as i32, '·', grid),
                }
            }
        }

        // Cells still above the board are clipped by fill_tile.
        let active = state.active();
        for &(x, y) in active.cells.iter() {
            layout.fill_tile(fb, x as i32, y as i32, ' ', CellStyle::solid(active.color));
        }

        self.draw_side_panel(fb, state, viewport, &layout);

        if state.is_game_over() {
            layout.draw_overlay_text(fb, "GAME OVER");
        } else if paused {
            layout.draw_overlay_text(fb, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, paused: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, paused, viewport, &mut fb);
        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        layout: &BoardLayout,
    ) {
        let Some(panel_x) = layout.panel_x(viewport, 4 * self.tile_w + 2) else {
            return;
        };

        let mut y = layout.y;
        fb.put_str(panel_x, y, "SCORE", LABEL_STYLE);
        fb.put_u32(panel_x, y + 1, state.score(), VALUE_STYLE);
        y += 3;

        fb.put_str(panel_x, y, "LINES", LABEL_STYLE);
        fb.put_u32(panel_x, y + 1, state.lines(), VALUE_STYLE);
        y += 3;

        fb.put_str(panel_x, y, "NEXT", LABEL_STYLE);
        y += 1;
        let preview = template(state.next());
        let style = CellStyle::solid(preview.color);
        for &(cx, cy) in preview.cells.iter() {
            fb.fill_rect(
                panel_x + cx as u16 * self.tile_w,
                y + cy as u16 * self.tile_h,
                self.tile_w,
                self.tile_h,
                ' ',
                style,
            );
        }
        y += 3 * self.tile_h + 1;

        for line in ["H/L move", "J drop", "K rotate", "P pause", "Esc quit"] {
            fb.put_str(panel_x, y, line, VALUE_STYLE);
            y += 1;
        }
    }
}
