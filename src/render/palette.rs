// Sequential color palettes for word clouds.
//
// Stops follow the ColorBrewer 9-class sequential schemes that share these
// names. The lightest stops would vanish on a cream background, so sampling
// starts partway up the ramp.

use image::Rgb;

/// A named color ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub name: &'static str,
    stops: &'static [[u8; 3]],
}

const YL_GN: [[u8; 3]; 9] = [
    [0xff, 0xff, 0xe5],
    [0xf7, 0xfc, 0xb9],
    [0xd9, 0xf0, 0xa3],
    [0xad, 0xdd, 0x8e],
    [0x78, 0xc6, 0x79],
    [0x41, 0xab, 0x5d],
    [0x23, 0x84, 0x43],
    [0x00, 0x68, 0x37],
    [0x00, 0x45, 0x29],
];

const RD_PU: [[u8; 3]; 9] = [
    [0xff, 0xf7, 0xf3],
    [0xfd, 0xe0, 0xdd],
    [0xfc, 0xc5, 0xc0],
    [0xfa, 0x9f, 0xb5],
    [0xf7, 0x68, 0xa1],
    [0xdd, 0x34, 0x97],
    [0xae, 0x01, 0x7e],
    [0x7a, 0x01, 0x77],
    [0x49, 0x00, 0x6a],
];

const GREENS: [[u8; 3]; 9] = [
    [0xf7, 0xfc, 0xf5],
    [0xe5, 0xf5, 0xe0],
    [0xc7, 0xe9, 0xc0],
    [0xa1, 0xd9, 0x9b],
    [0x74, 0xc4, 0x76],
    [0x41, 0xab, 0x5d],
    [0x23, 0x8b, 0x45],
    [0x00, 0x6d, 0x2c],
    [0x00, 0x44, 0x1b],
];

const OR_RD: [[u8; 3]; 9] = [
    [0xff, 0xf7, 0xec],
    [0xfe, 0xe8, 0xc8],
    [0xfd, 0xd4, 0x9e],
    [0xfd, 0xbb, 0x84],
    [0xfc, 0x8d, 0x59],
    [0xef, 0x65, 0x48],
    [0xd7, 0x30, 0x1f],
    [0xb3, 0x00, 0x00],
    [0x7f, 0x00, 0x00],
];

static PALETTES: [Palette; 4] = [
    Palette { name: "YlGn", stops: &YL_GN },
    Palette { name: "RdPu", stops: &RD_PU },
    Palette { name: "Greens", stops: &GREENS },
    Palette { name: "OrRd", stops: &OR_RD },
];

/// Fraction of the ramp skipped at the light end.
const LIGHT_CUTOFF: f64 = 0.4;

impl Palette {
    /// Look up a palette by its identifier (case-sensitive, e.g. "YlGn").
    pub fn by_name(name: &str) -> Option<Palette> {
        PALETTES.iter().copied().find(|p| p.name == name)
    }

    /// Identifiers of every known palette.
    pub fn names() -> impl Iterator<Item = &'static str> {
        PALETTES.iter().map(|p| p.name)
    }

    /// Color at position `t` (0.0 = lightest usable, 1.0 = darkest).
    pub fn color_at(&self, t: f64) -> Rgb<u8> {
        let t = LIGHT_CUTOFF + t.clamp(0.0, 1.0) * (1.0 - LIGHT_CUTOFF);
        let scaled = t * (self.stops.len() - 1) as f64;
        let lo = scaled.floor() as usize;
        let hi = (lo + 1).min(self.stops.len() - 1);
        let frac = scaled - lo as f64;

        let a = self.stops[lo];
        let b = self.stops[hi];
        let mix = |i: usize| (a[i] as f64 + (b[i] as f64 - a[i] as f64) * frac).round() as u8;
        Rgb([mix(0), mix(1), mix(2)])
    }
}

/// Parse a `#RRGGBB` hex color.
pub fn parse_hex(hex: &str) -> Option<Rgb<u8>> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}
