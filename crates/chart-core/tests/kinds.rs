// File: crates/chart-core/tests/kinds.rs
// Purpose: Kind tags, palettes, defaults and color parsing.

use chart_core::defaults::{self, ChartDefaults};
use chart_core::{ChartKind, KindTag, Rgba, PALETTE, SECONDARY_PALETTE};

#[test]
fn canonical_tags_round_trip() {
    for kind in ChartKind::ALL {
        assert_eq!(ChartKind::from_tag(kind.tag()), Some(kind), "tag {}", kind.tag());
        assert_eq!(KindTag::parse(kind.tag()), KindTag::Known(kind));
    }
}

#[test]
fn aliases_and_case() {
    assert_eq!(ChartKind::from_tag("Line"), Some(ChartKind::Line));
    assert_eq!(KindTag::parse("timeseries"), KindTag::Unsupported("timeseries".to_string()));
    assert_eq!(ChartKind::from_tag("stackedbar"), Some(ChartKind::StackedBar));
    assert_eq!(ChartKind::from_tag("stacked-bar"), Some(ChartKind::StackedBar));
    assert_eq!(ChartKind::from_tag("horizontalBar"), Some(ChartKind::HorizontalBar));
    assert_eq!(ChartKind::from_tag("polar-area"), Some(ChartKind::PolarArea));
    assert_eq!(ChartKind::from_tag(" PIE "), Some(ChartKind::Pie));
}

#[test]
fn unknown_tag_is_kept_verbatim() {
    let tag = KindTag::parse("unknown-kind");
    assert_eq!(tag, KindTag::Unsupported("unknown-kind".to_string()));
    assert_eq!(tag.as_str(), "unknown-kind");
    assert_eq!(tag.to_string(), "unknown-kind");
    assert!(tag.known().is_none());
}

#[test]
fn kind_predicates() {
    let slices: Vec<_> = ChartKind::ALL.into_iter().filter(|k| k.is_slice()).collect();
    assert_eq!(slices, vec![ChartKind::Pie, ChartKind::Doughnut, ChartKind::PolarArea]);
    let gradient: Vec<_> = ChartKind::ALL.into_iter().filter(|k| k.uses_gradient_fill()).collect();
    assert_eq!(gradient, vec![ChartKind::Area, ChartKind::Bar, ChartKind::StackedBar]);
}

#[test]
fn palettes_are_fixed_and_wrap() {
    assert_eq!(PALETTE.len(), 5);
    assert_eq!(PALETTE.color(0), Rgba::from_hex_const("#5447CE"));
    assert_eq!(PALETTE.color(7), PALETTE.color(2));
    assert_eq!(SECONDARY_PALETTE.len(), 3);
    assert_eq!(SECONDARY_PALETTE.color(2), Rgba::from_hex_const("#F472B6"));
    assert_eq!(SECONDARY_PALETTE.color(3), SECONDARY_PALETTE.color(0));
}

#[test]
fn hex_parsing_and_display() {
    assert_eq!(Rgba::from_hex("#fff"), Some(Rgba::rgb(255, 255, 255)));
    assert_eq!(Rgba::from_hex("16C8C6"), Some(Rgba::rgb(0x16, 0xc8, 0xc6)));
    assert_eq!(Rgba::from_hex("#0f172a80"), Some(Rgba::rgba(15, 23, 42, 128)));
    assert_eq!(Rgba::from_hex("#12"), None);
    assert_eq!(Rgba::from_hex("#zzzzzz"), None);
    assert_eq!(Rgba::rgb(0x54, 0x47, 0xce).to_string(), "#5447ce");
    let json = serde_json::to_string(&Rgba::rgb(1, 2, 3)).unwrap();
    let back: Rgba = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Rgba::rgb(1, 2, 3));
}

#[test]
fn defaults_initialize_once() {
    let first = defaults::init(ChartDefaults::default());
    let other = ChartDefaults { bubble_radius: 9.0, ..ChartDefaults::default() };
    let second = defaults::init(other);
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.bubble_radius, 3.0);
    assert_eq!(defaults::get().border_color, Rgba::from_hex_const("#334155"));
}
