// File: crates/chart-core/src/palette.rs
// Summary: Fixed, process-wide color palettes and index-based color lookup.

use crate::color::Rgba;

/// Ordered, read-only color list. Lookup is `colors[index % len]`, with no cursor state.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    colors: &'static [Rgba],
}

impl Palette {
    /// Contract: `colors` is non-empty.
    pub const fn new(colors: &'static [Rgba]) -> Self {
        assert!(!colors.is_empty(), "palette must not be empty");
        Self { colors }
    }

    pub const fn len(&self) -> usize { self.colors.len() }

    pub const fn is_empty(&self) -> bool { self.colors.is_empty() }

    #[inline]
    pub fn color(&self, index: usize) -> Rgba {
        self.colors[index % self.colors.len()]
    }
}

const PRIMARY: [Rgba; 5] = [
    Rgba::from_hex_const("#5447CE"),
    Rgba::from_hex_const("#887DFC"),
    Rgba::from_hex_const("#4996FF"),
    Rgba::from_hex_const("#16C8C6"),
    Rgba::from_hex_const("#68EAEA"),
];

const SECONDARY: [Rgba; 3] = [
    Rgba::from_hex_const("#5447CE"),
    Rgba::from_hex_const("#16C8C6"),
    Rgba::from_hex_const("#F472B6"),
];

/// Series colors for cartesian kinds and per-category slice fills.
pub static PALETTE: Palette = Palette::new(&PRIMARY);

/// Series-indexed border colors for slice kinds. Rotates independently of [`PALETTE`].
pub static SECONDARY_PALETTE: Palette = Palette::new(&SECONDARY);
