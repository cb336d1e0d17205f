// File: crates/chart-render-skia/src/host.rs
// Summary: Holds the current descriptor and kind selection and rebuilds the view from scratch on change.
// Notes:
// - Last write wins: submissions that arrive before the pending one was built are
//   dropped and counted in `superseded`.

use chart_core::{normalize, ChartDescriptor, KindTag};

use crate::error::RenderError;
use crate::surface::ChartSurface;
use crate::view::{render, Placeholder, View};

#[derive(Debug)]
pub struct ChartHost {
    descriptor: Option<ChartDescriptor>,
    /// Kind chosen by the user; overrides the descriptor's own tag.
    selected: Option<KindTag>,
    view: View,
    dirty: bool,
    revision: u64,
    superseded: u64,
}

impl Default for ChartHost {
    fn default() -> Self { Self::new() }
}

impl ChartHost {
    pub fn new() -> Self {
        Self {
            descriptor: None,
            selected: None,
            view: View::Placeholder(Placeholder::no_data()),
            dirty: false,
            revision: 0,
            superseded: 0,
        }
    }

    /// Replace the descriptor. The view is rebuilt on next access.
    pub fn submit(&mut self, descriptor: Option<ChartDescriptor>) {
        if self.dirty { self.superseded += 1; }
        self.descriptor = descriptor;
        self.dirty = true;
    }

    /// Switch the kind the current descriptor is drawn as.
    pub fn select_kind(&mut self, kind: impl Into<KindTag>) {
        let kind = kind.into();
        if self.selected.as_ref() == Some(&kind) { return; }
        if self.dirty { self.superseded += 1; }
        self.selected = Some(kind);
        self.dirty = true;
    }

    /// Current view, rebuilding first if anything changed since the last build.
    pub fn view(&mut self) -> &View {
        self.rebuild_if_dirty();
        &self.view
    }

    /// Rebuild if needed and draw onto `surface`.
    pub fn present(&mut self, surface: &mut ChartSurface) -> Result<(), RenderError> {
        self.rebuild_if_dirty();
        surface.present(&mut self.view)
    }

    /// Number of completed rebuilds.
    pub fn revision(&self) -> u64 { self.revision }

    /// Submissions replaced before they were ever built.
    pub fn superseded(&self) -> u64 { self.superseded }

    fn rebuild_if_dirty(&mut self) {
        if !self.dirty { return; }
        let descriptor = match (&self.descriptor, &self.selected) {
            (Some(d), Some(kind)) => Some(ChartDescriptor { kind: kind.clone(), ..d.clone() }),
            (d, _) => d.clone(),
        };
        let kind = descriptor.as_ref().map(|d| d.kind.clone()).or_else(|| self.selected.clone());
        let normalized = normalize(descriptor.as_ref());
        self.view = match kind {
            Some(kind) => render(&kind, &normalized),
            None => View::Placeholder(Placeholder::no_data()),
        };
        self.dirty = false;
        self.revision += 1;
        tracing::trace!(revision = self.revision, superseded = self.superseded, "chart view rebuilt");
    }
}
