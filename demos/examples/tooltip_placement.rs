// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side selection and clamping for triggers near each viewport edge.
//!
//! This example shows:
//! - the bottom → top → right fallback for the default preference,
//! - horizontal clamping with a re-aimed arrow,
//! - a config loaded from JSON, the way a host would hand it over.
//!
//! Run:
//! - `cargo run -p understory_tooltip_demos --example tooltip_placement`
//! - `RUST_LOG=understory_tooltip=trace cargo run -p understory_tooltip_demos --example tooltip_placement`

use kurbo::Rect;
use understory_tooltip::{PlacementCache, PlacementParams, TooltipConfig, ViewportBounds};
use understory_tooltip_demos::{edge_scenarios, init_tracing, render_scenario};

fn main() {
    init_tracing();

    let viewport = ViewportBounds::new(800.0, 600.0);

    println!("== default config");
    let config = TooltipConfig::default();
    for scenario in edge_scenarios() {
        if let Some(css) = render_scenario(&config, &scenario, &viewport) {
            print!("{css}");
        }
    }

    println!("== host config from JSON");
    let json = r#"{ "minWidth": "280px", "estimatedHeight": 40, "showArrow": false }"#;
    let config: TooltipConfig = match serde_json::from_str(json) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("bad tooltip config: {err}");
            return;
        }
    };
    for scenario in edge_scenarios() {
        if let Some(css) = render_scenario(&config, &scenario, &viewport) {
            print!("{css}");
        }
    }

    // A grid of cells where each hovered cell keeps its own sticky side.
    println!("== grid cells");
    let mut cache: PlacementCache<(u32, u32)> = PlacementCache::new();
    let params = PlacementParams::default();
    for row in 0..3_u32 {
        for col in 0..3_u32 {
            let x = 200.0 + f64::from(col) * 40.0;
            let y = 480.0 + f64::from(row) * 40.0;
            let cell = Rect::new(x, y, x + 30.0, y + 30.0);
            cache.show((row, col));
            if let Some(placed) = cache.resolve(&(row, col), &cell, &viewport, &params) {
                println!("cell ({row}, {col}) at y={y}: {}", placed.side);
            }
        }
    }

    // Scrolling the page does not move the chosen sides.
    let scrolled = viewport.with_scroll(kurbo::Vec2::new(0.0, 400.0));
    let cell = Rect::new(200.0, 80.0, 230.0, 110.0);
    if let Some(placed) = cache.resolve(&(2, 0), &cell, &scrolled, &params) {
        println!("cell (2, 0) after scroll: {}", placed.side);
    }
}
