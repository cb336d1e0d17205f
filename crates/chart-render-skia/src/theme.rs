// File: crates/chart-render-skia/src/theme.rs
// Summary: Surface theming: card background, title, placeholder and legend text colors.
// Notes:
// - Series, grid and tick colors come from the normalized config, not from the theme.

use chart_core::Rgba;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub title: Rgba,
    pub placeholder: Rgba,
    pub axis_label: Rgba,
    pub title_size: f32,
}

impl Theme {
    /// Dashboard card look (slate-900 card, gray text).
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Rgba::from_hex_const("#0f172a"),
            title: Rgba::from_hex_const("#d1d5db"),
            placeholder: Rgba::from_hex_const("#9ca3af"),
            axis_label: Rgba::from_hex_const("#cbd5e1"),
            title_size: 14.0,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Rgba::from_hex_const("#f8fafc"),
            title: Rgba::from_hex_const("#1e293b"),
            placeholder: Rgba::from_hex_const("#64748b"),
            axis_label: Rgba::from_hex_const("#334155"),
            title_size: 14.0,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Theme by name, case-insensitively; anything but `light` is the dark card look.
pub fn find(name: &str) -> Theme {
    if name.trim().eq_ignore_ascii_case("light") { Theme::light() } else { Theme::dark() }
}
