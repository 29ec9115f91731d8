//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Cell, EMPTY};

/// Piece colors indexed by cell value; index 0 is never drawn.
pub const PALETTE: [Option<Rgb>; 8] = [
    None,
    Some(Rgb::new(0xFF, 0x0D, 0x72)),
    Some(Rgb::new(0x0D, 0xC2, 0xFF)),
    Some(Rgb::new(0x0D, 0xFF, 0x72)),
    Some(Rgb::new(0xF5, 0x38, 0xFF)),
    Some(Rgb::new(0xFF, 0x8E, 0x0D)),
    Some(Rgb::new(0xFF, 0xE1, 0x38)),
    Some(Rgb::new(0x38, 0x77, 0xFF)),
];

/// Color for a cell value, or None when nothing should be drawn
pub fn cell_color(cell: Cell) -> Option<Rgb> {
    PALETTE.get(cell as usize).copied().flatten()
}

const ARENA_BG: Rgb = Rgb::new(0, 0, 0);

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the arena and score.
pub struct GameView {
    /// Arena cell width in terminal columns.
    cell_w: u16,
    /// Arena cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Top-left of the bordered arena frame and its size, in terminal cells
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only resized when
    /// the viewport changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame(snap, viewport);
        let border = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };
        let bg = CellStyle {
            fg: Rgb::new(60, 60, 70),
            bg: ARENA_BG,
            bold: false,
            dim: true,
        };

        fb.fill_rect(frame.x + 1, frame.y + 1, frame.w - 2, frame.h - 2, ' ', bg);
        draw_border(fb, frame, border);

        // Locked cells.
        for y in 0..snap.height as i32 {
            for x in 0..snap.width as i32 {
                match snap.cell(x, y) {
                    Some(v) if v != EMPTY => self.draw_arena_cell(fb, frame, x, y, v),
                    _ => self.fill_cell(fb, frame, x, y, '·', bg),
                }
            }
        }

        // Active piece; rows above the top edge are not drawn.
        if let Some(active) = snap.active.as_ref() {
            for (x, y, v) in active.cells() {
                if x >= 0 && y >= 0 && x < snap.width as i32 && y < snap.height as i32 {
                    self.draw_arena_cell(fb, frame, x, y, v);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn frame(&self, snap: &GameSnapshot, viewport: Viewport) -> Frame {
        let w = snap.width.saturating_mul(self.cell_w).saturating_add(2);
        let h = snap.height.saturating_mul(self.cell_h).saturating_add(2);
        let x = viewport.width.saturating_sub(w) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn draw_arena_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i32, y: i32, v: Cell) {
        let Some(fg) = cell_color(v) else {
            return;
        };
        let style = CellStyle {
            fg,
            bg: ARENA_BG,
            bold: true,
            dim: false,
        };
        self.fill_cell(fb, frame, x, y, '█', style);
    }

    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, x: i32, y: i32, ch: char, style: CellStyle) {
        let px = frame.x + 1 + x as u16 * self.cell_w;
        let py = frame.y + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            ..CellStyle::default()
        };

        let mut y = frame.y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PIECE", label);
        y = y.saturating_add(1);
        let letter = snap.active.map(|a| a.kind.as_str()).unwrap_or("-");
        let style = snap
            .active
            .and_then(|a| cell_color(a.kind.cell()))
            .map(|fg| CellStyle { fg, ..value })
            .unwrap_or(value);
        fb.put_str(panel_x, y, letter, style);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "GAME", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.episode_id.saturating_add(1), value);
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: CellStyle) {
    let Frame { x, y, w, h } = frame;
    if w < 2 || h < 2 {
        return;
    }

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn palette_matches_hex_colors() {
        let hex = [
            "#FF0D72", "#0DC2FF", "#0DFF72", "#F538FF", "#FF8E0D", "#FFE138", "#3877FF",
        ];
        for (i, h) in hex.iter().enumerate() {
            assert_eq!(cell_color(i as u8 + 1), Rgb::from_hex(h));
        }
        assert_eq!(cell_color(0), None);
        assert_eq!(cell_color(8), None);
    }

    #[test]
    fn every_kind_has_a_color() {
        for kind in PieceKind::ALL {
            assert!(cell_color(kind.cell()).is_some());
        }
    }
}
