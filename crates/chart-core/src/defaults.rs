// File: crates/chart-core/src/defaults.rs
// Summary: Process-wide chart defaults, initialized once at startup and read-only afterwards.

use once_cell::sync::OnceCell;

use crate::color::Rgba;

/// Values used wherever a style hint says "renderer default".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartDefaults {
    pub text_color: Rgba,
    pub border_color: Rgba,
    pub line_border_width: f32,
    pub arc_border_width: f32,
    pub point_border_width: f32,
    pub bubble_radius: f32,
}

impl Default for ChartDefaults {
    fn default() -> Self {
        Self {
            text_color: Rgba::from_hex_const("#cbd5e1"),
            border_color: Rgba::from_hex_const("#334155"),
            line_border_width: 3.0,
            arc_border_width: 2.0,
            point_border_width: 1.0,
            bubble_radius: 3.0,
        }
    }
}

static DEFAULTS: OnceCell<ChartDefaults> = OnceCell::new();

/// Install process defaults. Idempotent: the first call wins and later calls
/// return the already-installed value unchanged.
pub fn init(defaults: ChartDefaults) -> &'static ChartDefaults {
    let installed = DEFAULTS.get_or_init(|| defaults);
    if *installed != defaults {
        tracing::debug!("chart defaults already initialized; ignoring new values");
    }
    installed
}

/// Current defaults; installs [`ChartDefaults::default`] if `init` was never called.
pub fn get() -> &'static ChartDefaults {
    DEFAULTS.get_or_init(ChartDefaults::default)
}
