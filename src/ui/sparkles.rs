//! Floating sparkle layer

use std::time::Instant;

use ratatui::prelude::*;

use crate::sparkles::{SparkleField, SparkleFrame};
use crate::theme::{BG_PRIMARY, SPARKLE_COLORS, blend};

/// Below this opacity a glyph is not drawn at all
const MIN_VISIBLE: f32 = 0.05;

/// Glyphs a particle cycles through as it turns, a quarter turn each
fn spin_glyph(glyph: char, rotation: f32) -> char {
    let quarter = ((rotation.rem_euclid(360.0)) / 90.0) as usize % 4;
    match (glyph, quarter) {
        ('✦', 1 | 3) => '✧',
        ('✧', 1 | 3) => '✦',
        ('★', 1 | 3) => '☆',
        ('❀', 1 | 3) => '✿',
        ('✿', 1 | 3) => '❀',
        ('✺', 1 | 3) => '✹',
        _ => glyph,
    }
}

/// Cell for a frame inside `area`, if on screen
fn cell_position(frame: &SparkleFrame, area: Rect) -> Option<(u16, u16)> {
    if area.width == 0 || area.height == 0 {
        return None;
    }
    let x = (frame.x * f32::from(area.width)).floor();
    let y = (frame.y * f32::from(area.height)).floor();
    if x < 0.0 || y < 0.0 || x >= f32::from(area.width) || y >= f32::from(area.height) {
        return None;
    }
    Some((area.x + x as u16, area.y + y as u16))
}

/// Draws the particles of a [`SparkleField`] at one instant
pub struct SparkleLayer<'a> {
    pub field: &'a SparkleField,
    pub now: Instant,
}

impl Widget for SparkleLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.field.is_empty() {
            return;
        }
        for (i, (glyph, frame)) in self.field.frames(self.now).enumerate() {
            if frame.opacity < MIN_VISIBLE {
                continue;
            }
            let Some(pos) = cell_position(&frame, area) else {
                continue;
            };
            let base = SPARKLE_COLORS[i % SPARKLE_COLORS.len()];
            let bg = buf.cell(pos).map(|c| c.bg).unwrap_or(BG_PRIMARY);
            let bg = if bg == Color::Reset { BG_PRIMARY } else { bg };
            if let Some(cell) = buf.cell_mut(pos) {
                let glyph = spin_glyph(glyph, frame.rotation);
                let mut symbol = [0u8; 4];
                cell.set_symbol(glyph.encode_utf8(&mut symbol))
                    .set_fg(blend(base, bg, frame.opacity));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sparkles::sample;

    #[test]
    fn test_spin_glyph_alternates() {
        assert_eq!(spin_glyph('✦', 0.0), '✦');
        assert_eq!(spin_glyph('✦', 100.0), '✧');
        assert_eq!(spin_glyph('✦', 200.0), '✦');
        assert_eq!(spin_glyph('♥', 100.0), '♥');
    }

    #[test]
    fn test_cell_position_on_and_off_screen() {
        let area = Rect::new(0, 0, 40, 20);
        let middle = sample(0.5, 0.5);
        let column = cell_position(&middle, area).map(|p| p.0);
        assert_eq!(column, Some(20));
        assert_eq!(cell_position(&sample(0.5, 0.0), area), None);
        assert_eq!(cell_position(&sample(0.5, 1.0), area), None);
        assert_eq!(cell_position(&middle, Rect::new(0, 0, 0, 0)), None);
    }

    #[test]
    fn test_layer_draws_into_buffer() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;
        use std::time::Duration;

        let t0 = Instant::now();
        let mut rng = StdRng::seed_from_u64(8);
        let mut field = SparkleField::new(12, t0, &mut rng);
        let now = t0 + Duration::from_secs(30);
        field.tick(now, &mut rng);

        let area = Rect::new(0, 0, 60, 30);
        let mut buf = Buffer::empty(area);
        SparkleLayer { field: &field, now }.render(area, &mut buf);

        let drawn = buf
            .content()
            .iter()
            .filter(|c| c.symbol() != " ")
            .count();
        let visible = field
            .frames(now)
            .filter(|(_, f)| f.opacity >= MIN_VISIBLE && cell_position(f, area).is_some())
            .count();
        assert!(drawn <= visible);
        assert!(drawn > 0 || visible == 0);
    }
}
