//! A single falling glyph
//!
//! Each cell keeps its own vertical position and re-rolls its character on a
//! private period, so neighbouring glyphs flicker out of step with each other.

use rand::Rng;

/// First code point of the Katakana range glyphs are drawn from
pub const KANA_BASE: u32 = 0x30A0;
/// Number of code points in the Katakana draw range
pub const KANA_SPAN: u32 = 97;

/// Shortest and longest re-roll period, in frames
pub const SWITCH_PERIOD_MIN: u32 = 2;
pub const SWITCH_PERIOD_MAX: u32 = 25;

/// What a glyph currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphValue {
    /// Decimal digit 0-9
    Digit(u8),
    /// Katakana code point in `KANA_BASE..KANA_BASE + KANA_SPAN`
    Kana(char),
}

impl GlyphValue {
    /// Draw a fresh value: four in six Katakana, otherwise a digit
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let kind: u8 = rng.gen_range(0..=5);
        if kind > 1 {
            let code = KANA_BASE + rng.gen_range(0..KANA_SPAN);
            char::from_u32(code).map_or(Self::Digit(0), Self::Kana)
        } else {
            Self::Digit(rng.gen_range(0..=9))
        }
    }

    /// The character to render
    pub fn as_char(self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(d), 10).unwrap_or('0'),
            Self::Kana(ch) => ch,
        }
    }

    /// Whether `ch` falls inside the Katakana draw range
    pub fn is_kana(ch: char) -> bool {
        (KANA_BASE..KANA_BASE + KANA_SPAN).contains(&(ch as u32))
    }
}

/// One renderable character cell
#[derive(Debug, Clone)]
pub struct GlyphCell {
    pub x: f32,
    pub y: f32,
    pub value: GlyphValue,
    pub fall_speed: f32,
    /// Topmost cell of a column drawn in the highlight tint
    pub is_lead: bool,
    /// 0-255
    pub opacity: f32,
    /// Frames between value re-rolls, always >= 1
    pub switch_period: u32,
}

impl GlyphCell {
    /// Create a cell with a random value and re-roll period
    pub fn new<R: Rng + ?Sized>(
        x: f32,
        y: f32,
        fall_speed: f32,
        is_lead: bool,
        opacity: f32,
        rng: &mut R,
    ) -> Self {
        Self {
            x,
            y,
            value: GlyphValue::random(rng),
            fall_speed,
            is_lead,
            opacity: opacity.clamp(0.0, 255.0),
            switch_period: rng.gen_range(SWITCH_PERIOD_MIN..=SWITCH_PERIOD_MAX),
        }
    }

    /// Fall by one step, wrapping to the top once past `canvas_height`
    pub fn advance(&mut self, canvas_height: f32) {
        let next = self.y + self.fall_speed;
        self.y = if next > canvas_height { 0.0 } else { next };
    }

    /// Re-roll the value on frames that are a multiple of the switch period
    ///
    /// Returns true if a new value was drawn.
    pub fn maybe_reassign_value<R: Rng + ?Sized>(&mut self, frame_index: u64, rng: &mut R) -> bool {
        let period = u64::from(self.switch_period.max(1));
        if frame_index % period != 0 {
            return false;
        }
        self.value = GlyphValue::random(rng);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn cell(y: f32, speed: f32) -> GlyphCell {
        let mut rng = StdRng::seed_from_u64(1);
        GlyphCell::new(28.0, y, speed, false, 255.0, &mut rng)
    }

    #[test]
    fn test_advance_moves_down_by_speed() {
        let mut c = cell(100.0, 7.5);
        c.advance(600.0);
        assert_eq!(c.y, 107.5);
        assert_eq!(c.x, 28.0);
    }

    #[test]
    fn test_advance_wraps_past_bottom() {
        let mut c = cell(595.0, 10.0);
        c.advance(600.0);
        assert_eq!(c.y, 0.0);
        assert_eq!(c.x, 28.0);
    }

    #[test]
    fn test_advance_landing_exactly_on_bottom_does_not_wrap() {
        let mut c = cell(590.0, 10.0);
        c.advance(600.0);
        assert_eq!(c.y, 600.0);
        c.advance(600.0);
        assert_eq!(c.y, 0.0);
    }

    #[test]
    fn test_advance_keeps_falling_from_above_screen() {
        let mut c = cell(-1500.0, 20.0);
        for _ in 0..10 {
            c.advance(600.0);
        }
        assert_eq!(c.y, -1300.0);
    }

    #[test]
    fn test_y_never_exceeds_height() {
        let mut c = cell(-40.0, 21.9);
        for _ in 0..5_000 {
            c.advance(480.0);
            assert!(c.y <= 480.0);
        }
    }

    #[test]
    fn test_switch_period_in_range() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1_000 {
            let c = GlyphCell::new(0.0, 0.0, 5.0, false, 255.0, &mut rng);
            assert!((SWITCH_PERIOD_MIN..=SWITCH_PERIOD_MAX).contains(&c.switch_period));
        }
    }

    #[test]
    fn test_reassign_only_on_period_multiples() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut c = cell(0.0, 5.0);
        c.switch_period = 4;

        assert!(!c.maybe_reassign_value(1, &mut rng));
        assert!(!c.maybe_reassign_value(6, &mut rng));
        assert!(c.maybe_reassign_value(8, &mut rng));
        assert!(c.maybe_reassign_value(0, &mut rng));
    }

    #[test]
    fn test_reassigned_values_are_digits_or_kana() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let mut c = cell(0.0, 5.0);
        c.switch_period = 1;

        let mut saw_digit = false;
        let mut saw_kana = false;
        for frame in 1..2_000 {
            assert!(c.maybe_reassign_value(frame, &mut rng));
            let ch = c.value.as_char();
            match c.value {
                GlyphValue::Digit(d) => {
                    assert!(d <= 9);
                    assert!(ch.is_ascii_digit());
                    saw_digit = true;
                }
                GlyphValue::Kana(k) => {
                    assert!(GlyphValue::is_kana(k));
                    saw_kana = true;
                }
            }
        }
        assert!(saw_digit && saw_kana);
    }

    #[test]
    fn test_kana_is_roughly_two_thirds() {
        let mut rng = StdRng::seed_from_u64(17);
        let draws = 60_000;
        let kana = (0..draws)
            .filter(|_| matches!(GlyphValue::random(&mut rng), GlyphValue::Kana(_)))
            .count();
        let share = kana as f64 / draws as f64;
        assert!((share - 4.0 / 6.0).abs() < 0.02, "kana share {share}");
    }

    #[test]
    fn test_kana_range_bounds() {
        assert!(GlyphValue::is_kana('\u{30A0}'));
        assert!(GlyphValue::is_kana('\u{3100}'));
        assert!(!GlyphValue::is_kana('\u{3101}'));
        assert!(!GlyphValue::is_kana('7'));
    }

    #[test]
    fn test_opacity_clamped_on_creation() {
        let mut rng = StdRng::seed_from_u64(5);
        let c = GlyphCell::new(0.0, 0.0, 5.0, false, -12.0, &mut rng);
        assert_eq!(c.opacity, 0.0);
        let c = GlyphCell::new(0.0, 0.0, 5.0, false, 300.0, &mut rng);
        assert_eq!(c.opacity, 255.0);
    }
}
