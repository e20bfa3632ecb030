// Color parsing and proximity blending.
// Visual: dots fade from the base amber towards the active amber as the pointer nears.

use tracing::warn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as 0x00RRGGBB, the layout the framebuffer and minifb expect.
    #[inline]
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub fn from_u32(px: u32) -> Self {
        Self {
            r: ((px >> 16) & 0xFF) as u8,
            g: ((px >> 8) & 0xFF) as u8,
            b: (px & 0xFF) as u8,
        }
    }
}

/// Parse `#rrggbb` (the leading `#` is optional, digits are case-insensitive).
/// Anything else is `None`.
pub fn parse_hex(hex: &str) -> Option<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some(Rgb { r, g, b })
}

/// Like [`parse_hex`] but falls back to black for malformed input.
pub fn parse_hex_or_black(hex: &str) -> Rgb {
    parse_hex(hex).unwrap_or_else(|| {
        warn!(color = hex, "malformed hex color, using black");
        Rgb::BLACK
    })
}

/// Linear per-channel blend: `round(base + (active - base) * t)`.
///
/// `t` is expected in `[0, 1]`; no clamping happens here.
#[inline]
pub fn blend(base: Rgb, active: Rgb, t: f32) -> Rgb {
    #[inline]
    fn channel(from: u8, to: u8, t: f32) -> u8 {
        let from = from as f32;
        (from + (to as f32 - from) * t).round() as u8
    }

    Rgb {
        r: channel(base.r, active.r, t),
        g: channel(base.g, active.g, t),
        b: channel(base.b, active.b, t),
    }
}

/// The two reference colors, derived once per engine from configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorConfig {
    pub base: Rgb,
    pub active: Rgb,
}

impl ColorConfig {
    pub fn from_hex(base: &str, active: &str) -> Self {
        Self {
            base: parse_hex_or_black(base),
            active: parse_hex_or_black(active),
        }
    }
}
