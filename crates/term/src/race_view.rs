//! RaceView: lays out text surfaces into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, Renderable};

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

const TITLE: &str = " keyrace ";

/// Draws a bordered screen with every surface at its own position.
///
/// Surface positions are relative to the inside of the border.
#[derive(Debug, Clone)]
pub struct RaceView {
    border: CellStyle,
    hint: CellStyle,
}

impl Default for RaceView {
    fn default() -> Self {
        Self {
            border: CellStyle::fg(Rgb::new(120, 120, 130)),
            hint: CellStyle::fg(Rgb::new(110, 110, 110)),
        }
    }
}

impl RaceView {
    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into<'a, I, S>(&self, surfaces: I, phase: Phase, viewport: Viewport, fb: &mut FrameBuffer)
    where
        I: IntoIterator<Item = &'a S>,
        S: Renderable + 'a,
    {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));
        if viewport.width < 2 || viewport.height < 2 {
            return;
        }

        self.draw_border(fb, viewport);
        fb.put_str_clipped(2, 0, TITLE, viewport.width - 1, self.border.bold());

        let right = viewport.width - 1;
        let bottom = viewport.height - 1;
        for surface in surfaces {
            let (sx, sy) = surface.position();
            let x = sx.saturating_add(1);
            let y = sy.saturating_add(1);
            if y >= bottom {
                continue;
            }
            fb.put_str_clipped(x, y, surface.text(), right, CellStyle::fg(surface.color()));
        }

        fb.put_str_clipped(2, bottom, phase_hint(phase), right, self.hint);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<'a, I, S>(&self, surfaces: I, phase: Phase, viewport: Viewport) -> FrameBuffer
    where
        I: IntoIterator<Item = &'a S>,
        S: Renderable + 'a,
    {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(surfaces, phase, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, viewport: Viewport) {
        let (w, h) = (viewport.width, viewport.height);
        let style = self.border;

        fb.put_char(0, 0, '┌', style);
        fb.put_char(w - 1, 0, '┐', style);
        fb.put_char(0, h - 1, '└', style);
        fb.put_char(w - 1, h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(dx, 0, '─', style);
            fb.put_char(dx, h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(0, dy, '│', style);
            fb.put_char(w - 1, dy, '│', style);
        }
    }
}

fn phase_hint(phase: Phase) -> &'static str {
    match phase {
        Phase::Lobby => " type a name, Return to join, Esc quits ",
        Phase::Racing => " type the word, Esc quits ",
        Phase::Finished => " thanks for playing ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TextSurface;

    #[test]
    fn surfaces_are_drawn_inside_border() {
        let surfaces = [TextSurface::new(2, 1, Rgb::new(1, 2, 3)).with_text("cat")];
        let fb = RaceView::default().render(&surfaces, Phase::Racing, Viewport::new(20, 6));

        assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
        assert_eq!(fb.get(19, 5).unwrap().ch, '┘');
        assert_eq!(fb.row_text(2), "│  cat             │");
        assert_eq!(fb.get(4, 2).unwrap().style.fg, Rgb::new(1, 2, 3));
    }

    #[test]
    fn long_text_is_clipped_before_right_border() {
        let surfaces = [TextSurface::new(0, 0, Rgb::default()).with_text("abcdefghij")];
        let fb = RaceView::default().render(&surfaces, Phase::Lobby, Viewport::new(6, 4));
        assert_eq!(fb.row_text(1), "│abcd│");
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let surfaces: [TextSurface; 0] = [];
        let fb = RaceView::default().render(&surfaces, Phase::Lobby, Viewport::new(1, 1));
        assert_eq!(fb.width(), 1);
    }
}
