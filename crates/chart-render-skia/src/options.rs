// File: crates/chart-render-skia/src/options.rs
// Summary: Render options (surface size, insets, theme, labels, hover) and their JSON settings form.

use std::path::Path;

use chart_core::types::{Insets, HEIGHT, WIDTH};
use serde::Deserialize;

use crate::error::RenderError;
use crate::theme::{self, Theme};

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Text rendering on/off; tests turn it off to avoid font variance.
    pub draw_labels: bool,
    /// Category index to show the index-mode tooltip for.
    pub hover_index: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
            hover_index: None,
        }
    }
}

impl RenderOptions {
    /// Load options from a JSON settings file; absent keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RenderError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(text: &str) -> Result<Self, RenderError> {
        let settings: RenderSettings = serde_json::from_str(text)?;
        Ok(settings.into_options())
    }
}

/// Serialized form of [`RenderOptions`].
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub insets: Option<Insets>,
    pub theme: Option<String>,
    pub draw_labels: Option<bool>,
    pub hover_index: Option<usize>,
}

impl RenderSettings {
    pub fn into_options(self) -> RenderOptions {
        let d = RenderOptions::default();
        RenderOptions {
            width: self.width.filter(|w| *w > 0).unwrap_or(d.width),
            height: self.height.filter(|h| *h > 0).unwrap_or(d.height),
            insets: self.insets.unwrap_or(d.insets),
            theme: self.theme.as_deref().map(theme::find).unwrap_or(d.theme),
            draw_labels: self.draw_labels.unwrap_or(d.draw_labels),
            hover_index: self.hover_index,
        }
    }
}
