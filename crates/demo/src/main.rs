// File: crates/demo/src/main.rs
// Summary: Demo loads a dashboard JSON payload and renders each grid chart (plus the trends view) to PNGs.

use anyhow::{bail, Context, Result};
use chart_core::defaults::{self, ChartDefaults};
use chart_core::{DashboardPayload, Normalized};
use chart_render_skia::{render, render_forecast, ChartSurface, RenderOptions, View};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "dashboard-demo")]
#[command(about = "Render a dashboard payload to one PNG per chart", long_about = None)]
struct Cli {
    /// Dashboard payload JSON
    #[arg(value_name = "PAYLOAD", default_value = "crates/demo/data/dashboard.json")]
    payload: PathBuf,

    /// Render settings JSON (size, insets, theme, labels, hover)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = "target/out")]
    out: PathBuf,

    /// Also write each normalized config next to its PNG
    #[arg(long)]
    dump_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    defaults::init(ChartDefaults::default());

    let cli = Cli::parse();
    let options = match &cli.config {
        Some(path) => RenderOptions::from_json_file(path)
            .with_context(|| format!("failed to load render settings '{}'", path.display()))?,
        None => RenderOptions::default(),
    };

    let text = std::fs::read_to_string(&cli.payload)
        .with_context(|| format!("failed to read payload '{}'", cli.payload.display()))?;
    let payload = DashboardPayload::from_json(&text).context("failed to decode dashboard payload")?;
    tracing::info!(
        charts = payload.charts.len(),
        industry = payload.industry.as_deref().unwrap_or("-"),
        "payload loaded"
    );

    let grid = payload.grid_charts();
    if grid.is_empty() && payload.trends.is_none() {
        bail!("payload has no renderable charts");
    }

    for (i, descriptor) in grid.iter().enumerate() {
        let normalized = descriptor.normalize();
        let stem = format!("{:02}_{}", i + 1, slug(descriptor.title.as_deref().unwrap_or("chart")));
        if cli.dump_config {
            write_config(&cli.out.join(format!("{stem}.json")), &normalized)?;
        }
        let mut view = render(&descriptor.kind, &normalized);
        let out = cli.out.join(format!("{stem}.png"));
        write_view(&options, &mut view, &out)?;
        match &view {
            View::Chart(d) => println!("Wrote {} ({} via {:?})", out.display(), descriptor.kind, d.strategy()),
            View::Placeholder(p) => println!("Wrote {} (placeholder: {})", out.display(), p.message),
        }
    }

    if let Some(trends) = &payload.trends {
        if let Some(data) = trends.data.as_ref().filter(|d| d.is_reduced()) {
            tracing::info!(total = ?data.total_points, sent = ?data.sent_points, "forecast was downsampled upstream");
        }
        let mut view = render_forecast(trends);
        let out = cli.out.join(format!("{:02}_forecast.png", grid.len() + 1));
        write_view(&options, &mut view, &out)?;
        match view.message() {
            Some(reason) => println!("Wrote {} (forecast unavailable: {reason})", out.display()),
            None => println!("Wrote {} (forecast)", out.display()),
        }
    }

    for insight in &payload.insights {
        println!("- {insight}");
    }
    Ok(())
}

fn write_view(options: &RenderOptions, view: &mut View, path: &Path) -> Result<()> {
    let mut surface = ChartSurface::new(options.clone())?;
    surface.present(view)?;
    surface.write_png(path)?;
    Ok(())
}

fn write_config(path: &Path, normalized: &Normalized) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(normalized)?;
    std::fs::write(path, json).with_context(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

fn slug(title: &str) -> String {
    let s: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    let s = s.trim_matches('_').to_string();
    if s.is_empty() { "chart".to_string() } else { s }
}
