//! Theme module for squish-sparkle
//!
//! Centralized color palette and styling constants for the soft pink
//! "cosy corner" look.

use ratatui::style::Color;

// ============================================================================
// Background Colors - Candy Floss Palette
// ============================================================================

/// Page background (#FFE4EC)
pub const BG_PRIMARY: Color = Color::Rgb(255, 228, 236);

/// Top band wash behind the greeting (#FFD1E8)
pub const BG_BAND: Color = Color::Rgb(255, 209, 232);

/// Card background (#FFFFFF)
pub const BG_CARD: Color = Color::Rgb(255, 255, 255);

/// Empty answer slot (#F0F0F0)
pub const BG_SLOT: Color = Color::Rgb(240, 240, 240);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary pink for buttons and highlights (#FF69B4)
pub const PINK: Color = Color::Rgb(255, 105, 180);

/// Soft pink for borders (#FFB6C1)
pub const PINK_SOFT: Color = Color::Rgb(255, 182, 193);

/// Purple for secondary buttons and tiles (#9B59B6)
pub const PURPLE: Color = Color::Rgb(155, 89, 182);

/// Lilac for text fields (#C9A0DC)
pub const LILAC: Color = Color::Rgb(201, 160, 220);

/// Calm blue for the breathing screen (#5B7DB1)
pub const CALM_BLUE: Color = Color::Rgb(91, 125, 177);

/// Sparkle gold (#FFD700)
pub const GOLD: Color = Color::Rgb(255, 215, 0);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text - deep plum (#8B4A6B)
pub const TEXT_PRIMARY: Color = Color::Rgb(139, 74, 107);

/// Secondary text - dusty rose (#B07A9E)
pub const TEXT_SECONDARY: Color = Color::Rgb(176, 122, 158);

/// Muted text for hints and placeholders (#B8A0C8)
pub const TEXT_MUTED: Color = Color::Rgb(184, 160, 200);

/// Story starter text - warm brown (#5D4E37)
pub const TEXT_STORY: Color = Color::Rgb(93, 78, 55);

/// Text on pink/purple buttons
pub const TEXT_ON_ACCENT: Color = Color::Rgb(255, 255, 255);

/// Unfinished breathing dot (#CCCCCC)
pub const DOT_PENDING: Color = Color::Rgb(204, 204, 204);

/// Sparkle glyph colors, cycled per particle
pub const SPARKLE_COLORS: [Color; 4] = [PINK, GOLD, PURPLE, PINK_SOFT];

/// Mix `fg` over `bg` at `alpha` (0 = all background, 1 = all foreground).
/// Non-RGB colors are returned unchanged when visible at all.
pub fn blend(fg: Color, bg: Color, alpha: f32) -> Color {
    let alpha = alpha.clamp(0.0, 1.0);
    match (fg, bg) {
        (Color::Rgb(fr, fg_, fb), Color::Rgb(br, bg_, bb)) => {
            let mix = |f: u8, b: u8| -> u8 {
                (f32::from(b) + (f32::from(f) - f32::from(b)) * alpha).round() as u8
            };
            Color::Rgb(mix(fr, br), mix(fg_, bg_), mix(fb, bb))
        }
        _ if alpha > 0.0 => fg,
        _ => bg,
    }
}
