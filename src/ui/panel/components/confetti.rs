//! Confetti effect
//!
//! Scatters falling glyphs over the viewport. Positions are derived from a
//! fixed seed and the animation tick, so a frame is reproducible.

use crate::consts::cli_consts::effects::CONFETTI_PIECES;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::Widget;

const GLYPHS: [char; 6] = ['*', '•', '+', '◆', '▪', '~'];

const COLORS: [Color; 7] = [
    Color::LightRed,
    Color::LightYellow,
    Color::LightGreen,
    Color::LightCyan,
    Color::LightMagenta,
    Color::LightBlue,
    Color::White,
];

#[derive(Debug, Clone, Copy)]
pub struct Confetti {
    width: u16,
    height: u16,
    tick: usize,
    seed: u64,
}

impl Confetti {
    /// Confetti covering a `width` x `height` viewport.
    pub fn new(width: u16, height: u16, tick: usize, seed: u64) -> Self {
        Self {
            width,
            height,
            tick,
            seed,
        }
    }
}

impl Widget for Confetti {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = self.width.min(area.width);
        let height = self.height.min(area.height);
        if width == 0 || height == 0 {
            return;
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        for _ in 0..CONFETTI_PIECES {
            let start_x = rng.gen_range(0..width) as i64;
            let start_y = rng.gen_range(0..height) as usize;
            let fall_speed = rng.gen_range(1..=3);
            let drift: i64 = rng.gen_range(-1..=1);
            let glyph = GLYPHS[rng.gen_range(0..GLYPHS.len())];
            let color = COLORS[rng.gen_range(0..COLORS.len())];

            let y = (start_y + self.tick * fall_speed / 2) % height as usize;
            let x = (start_x + drift * (self.tick as i64 / 4)).rem_euclid(width as i64);

            if let Some(cell) = buf.cell_mut((area.x + x as u16, area.y + y as u16)) {
                cell.set_char(glyph)
                    .set_style(Style::default().fg(color).add_modifier(Modifier::BOLD));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(buf: &Buffer) -> usize {
        buf.content()
            .iter()
            .filter(|cell| GLYPHS.iter().any(|g| cell.symbol().starts_with(*g)))
            .count()
    }

    #[test]
    fn test_draws_inside_viewport_only() {
        let area = Rect::new(0, 0, 40, 20);
        let mut buf = Buffer::empty(area);
        Confetti::new(10, 5, 0, 7).render(area, &mut buf);

        assert!(pieces(&buf) > 0);
        for (i, cell) in buf.content().iter().enumerate() {
            let (x, y) = (i as u16 % 40, i as u16 / 40);
            if x >= 10 || y >= 5 {
                assert_eq!(cell.symbol(), " ");
            }
        }
    }

    #[test]
    fn test_same_tick_same_frame() {
        let area = Rect::new(0, 0, 30, 10);
        let mut first = Buffer::empty(area);
        let mut second = Buffer::empty(area);
        Confetti::new(30, 10, 12, 1).render(area, &mut first);
        Confetti::new(30, 10, 12, 1).render(area, &mut second);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_viewport_is_noop() {
        let area = Rect::new(0, 0, 10, 10);
        let mut buf = Buffer::empty(area);
        Confetti::new(0, 10, 3, 1).render(area, &mut buf);
        assert_eq!(pieces(&buf), 0);
    }
}
