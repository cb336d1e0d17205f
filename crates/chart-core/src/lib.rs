// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; chart descriptors, palette and the surface-independent normalizer.

pub mod color;
pub mod defaults;
pub mod descriptor;
pub mod downsample;
pub mod geometry;
pub mod grid;
pub mod kind;
pub mod legend;
pub mod normalize;
pub mod palette;
pub mod payload;
pub mod scale;
pub mod style;
pub mod tooltip;
pub mod types;

pub use color::Rgba;
pub use defaults::ChartDefaults;
pub use descriptor::{ChartDescriptor, DataValue, Point, SeriesSpec};
pub use downsample::{decimate_min_max, DecimationConfig};
pub use kind::{ChartKind, KindTag};
pub use legend::{LegendConfig, LegendPosition};
pub use normalize::{normalize, DatasetValues, Fill, Normalized, RenderConfig, ResolvedDataset};
pub use palette::{Palette, PALETTE, SECONDARY_PALETTE};
pub use payload::{DashboardPayload, ForecastData, ForecastInfo, ForecastView, PayloadError, Trends};
pub use scale::{AxisConfig, LinearScale, ScaleConfig, ScaleVariant};
pub use style::{Hint, StyleHints};
pub use tooltip::{tooltip_at, TooltipConfig, TooltipContent};
pub use types::{Insets, Padding};
