//! Colors and palettes.
//!
//! Colors are stored as 8-bit sRGB triples ([`Rgb`]) so palette entries can be
//! written as the familiar `0xRRGGBB` literals. Fading is a plain linear mix
//! toward another color, usually the background.

use glam::Vec3;
use rand::seq::SliceRandom;
use rand::Rng;

/// An opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Color as normalized RGB.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32) / 255.0
    }

    /// Color from normalized RGB, clamped to the displayable range.
    pub fn from_vec3(v: Vec3) -> Self {
        let v = (v.clamp(Vec3::ZERO, Vec3::ONE) * 255.0).round();
        Self::new(v.x as u8, v.y as u8, v.z as u8)
    }

    /// Linear mix: `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        Rgb::from_vec3(self.to_vec3().lerp(other.to_vec3(), t.clamp(0.0, 1.0)))
    }

    /// Scale the color's visibility against `background`.
    ///
    /// `fade = 1` keeps the color, `fade = 0` makes it the background.
    pub fn faded(self, background: Rgb, fade: f32) -> Rgb {
        background.lerp(self, fade)
    }
}

static ELECTRON: [Rgb; 5] = [
    Rgb::from_hex(0x6ad1ff), // Sky blue
    Rgb::from_hex(0xffcf6a), // Amber
    Rgb::from_hex(0xff6aa2), // Pink
    Rgb::from_hex(0x7cffb2), // Mint
    Rgb::from_hex(0xb36aff), // Violet
];

static SPARKLE: [Rgb; 4] = [
    Rgb::from_hex(0xffd166),
    Rgb::from_hex(0xf4a261),
    Rgb::from_hex(0xe76f51),
    Rgb::from_hex(0xffbe0b),
];

static GLOW: [Rgb; 3] = [
    Rgb::from_hex(0xf6bd60),
    Rgb::from_hex(0xf4a261),
    Rgb::from_hex(0xffd166),
];

/// Fixed color sets used by the demos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Electron colors: sky blue, amber, pink, mint, violet.
    #[default]
    Electron,

    /// Logo sparkles: warm yellows and oranges.
    Sparkle,

    /// Logo glow rings: soft golds.
    Glow,
}

impl Palette {
    /// The colors of this palette.
    pub fn colors(&self) -> &'static [Rgb] {
        match self {
            Palette::Electron => &ELECTRON,
            Palette::Sparkle => &SPARKLE,
            Palette::Glow => &GLOW,
        }
    }

    /// Pick a color uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Rgb {
        // Every palette is non-empty.
        *self.colors().choose(rng).unwrap_or(&Rgb::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex(0x6ad1ff), Rgb::new(0x6a, 0xd1, 0xff));
        assert_eq!(Rgb::from_hex(0x000000), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_faded_endpoints() {
        let bg = Rgb::from_hex(0x080b14);
        let ring = Rgb::from_hex(0xff6b7c);
        assert_eq!(ring.faded(bg, 1.0), ring);
        assert_eq!(ring.faded(bg, 0.0), bg);
    }

    #[test]
    fn test_lerp_midpoint() {
        let mid = Rgb::new(0, 0, 0).lerp(Rgb::new(200, 100, 50), 0.5);
        assert_eq!(mid, Rgb::new(100, 50, 25));
    }

    #[test]
    fn test_choose_stays_in_palette() {
        let mut rng = StdRng::seed_from_u64(1);
        for palette in [Palette::Electron, Palette::Sparkle, Palette::Glow] {
            for _ in 0..50 {
                let color = palette.choose(&mut rng);
                assert!(palette.colors().contains(&color));
            }
        }
    }
}
