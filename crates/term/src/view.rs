//! FieldView: maps the simulation state into a terminal framebuffer.
//!
//! Read-only over the simulation and pure with respect to the
//! framebuffer, so it can be unit-tested without a TTY. Reads happen
//! after the frame's input and gravity have resolved.

use blockfall_core::Simulation;
use blockfall_types::{PieceKind, FIELD_HEIGHT, FIELD_WIDTH};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

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

// Slate backdrop, warm empty cells.
const BACKDROP: Rgb = Rgb::new(87, 155, 177);
const EMPTY_CELL: Rgb = Rgb::new(225, 215, 198);
const BORDER_FG: Rgb = Rgb::new(230, 230, 230);

/// Fill color per piece kind.
fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}

/// A lightweight terminal view of the playfield.
pub struct FieldView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
}

impl Default for FieldView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl FieldView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Total framebuffer size of the bordered field.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            FIELD_WIDTH as u16 * self.cell_w + 2,
            FIELD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render the simulation into an existing framebuffer.
    ///
    /// The field is centered in the viewport; anything that does not fit
    /// is clipped by the framebuffer's bounds checks.
    pub fn render_into(&self, sim: &Simulation, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(
            ' ',
            CellStyle {
                fg: BORDER_FG,
                bg: BACKDROP,
                bold: false,
            },
        );

        let (frame_w, frame_h) = self.frame_size();
        let origin_x = viewport.width.saturating_sub(frame_w) / 2;
        let origin_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(fb, origin_x, origin_y, frame_w, frame_h);

        // Settled cells.
        for y in 0..FIELD_HEIGHT as i8 {
            for x in 0..FIELD_WIDTH as i8 {
                let color = match sim.grid().get(x, y).flatten() {
                    Some(kind) => kind_color(kind),
                    None => EMPTY_CELL,
                };
                self.draw_field_cell(fb, origin_x, origin_y, x, y, color);
            }
        }

        // Active piece overlay; cells above the top stay off-screen.
        if let Some(piece) = sim.active() {
            let color = kind_color(piece.kind);
            for (x, y) in piece.world_cells() {
                if y < FIELD_HEIGHT as i8 {
                    self.draw_field_cell(fb, origin_x, origin_y, x, y, color);
                }
            }
        }

        if sim.game_over() {
            let banner = " GAME OVER ";
            let bx = origin_x + (frame_w.saturating_sub(banner.len() as u16)) / 2;
            let by = origin_y + frame_h / 2;
            fb.print(
                bx,
                by,
                banner,
                CellStyle {
                    fg: Rgb::new(255, 255, 255),
                    bg: Rgb::new(0, 0, 0),
                    bold: true,
                },
            );
        }
    }

    /// Convenience wrapper that allocates a fresh framebuffer.
    pub fn render(&self, sim: &Simulation, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(sim, viewport, &mut fb);
        fb
    }

    /// Paint one field cell. Field y grows upward, screen y downward.
    fn draw_field_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        x: i8,
        y: i8,
        color: Rgb,
    ) {
        let screen_x = origin_x + 1 + x as u16 * self.cell_w;
        let screen_y = origin_y + 1 + (FIELD_HEIGHT as i8 - 1 - y) as u16 * self.cell_h;
        let style = CellStyle {
            fg: color,
            bg: color,
            bold: false,
        };
        for dy in 0..self.cell_h {
            for dx in 0..self.cell_w {
                fb.set(screen_x + dx, screen_y + dy, Cell { ch: '█', style });
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, ox: u16, oy: u16, w: u16, h: u16) {
        let style = CellStyle {
            fg: BORDER_FG,
            bg: BACKDROP,
            bold: false,
        };
        for x in 0..w {
            let ch = if x == 0 {
                '┌'
            } else if x == w - 1 {
                '┐'
            } else {
                '─'
            };
            fb.set(ox + x, oy, Cell { ch, style });
            let ch = if x == 0 {
                '└'
            } else if x == w - 1 {
                '┘'
            } else {
                '─'
            };
            fb.set(ox + x, oy + h - 1, Cell { ch, style });
        }
        for y in 1..h.saturating_sub(1) {
            fb.set(ox, oy + y, Cell { ch: '│', style });
            fb.set(ox + w - 1, oy + y, Cell { ch: '│', style });
        }
    }
}
