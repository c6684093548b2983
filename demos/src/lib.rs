// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory Tooltip demos.

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_tooltip::{Tooltip, TooltipConfig, ViewportBounds};

/// Install a formatting subscriber.
///
/// Honors `RUST_LOG`; defaults to `understory_tooltip=debug` so the side
/// choices and clamps show up without extra setup.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("understory_tooltip=debug"));
    // Ignore the error when a subscriber is already installed.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// A named trigger position used by the demos.
#[derive(Clone, Debug)]
pub struct Scenario {
    /// Label printed with the output.
    pub name: &'static str,
    /// Trigger bounds in viewport coordinates.
    pub trigger: Rect,
}

/// Triggers placed near each edge of an 800x600 viewport.
pub fn edge_scenarios() -> Vec<Scenario> {
    vec![
        Scenario {
            name: "middle",
            trigger: Rect::new(380.0, 280.0, 420.0, 300.0),
        },
        Scenario {
            name: "bottom edge",
            trigger: Rect::new(380.0, 560.0, 420.0, 590.0),
        },
        Scenario {
            name: "right edge",
            trigger: Rect::new(760.0, 100.0, 790.0, 120.0),
        },
        Scenario {
            name: "left edge",
            trigger: Rect::new(4.0, 100.0, 24.0, 120.0),
        },
        Scenario {
            name: "short viewport strip",
            trigger: Rect::new(40.0, 20.0, 80.0, 580.0),
        },
    ]
}

/// Show a fresh tooltip over `scenario` and render its styles as CSS lines.
///
/// Returns `None` when nothing would be painted.
pub fn render_scenario(
    config: &TooltipConfig,
    scenario: &Scenario,
    viewport: &ViewportBounds,
) -> Option<String> {
    let mut tooltip = Tooltip::new(config.clone());
    tooltip.show();
    let frame = tooltip.layout(&scenario.trigger, viewport)?;
    let mut out = format!(
        "[{}] side={} clamp={:?}\n  panel: {}\n",
        scenario.name, frame.placement.side, frame.clamp, frame.panel
    );
    if let Some(arrow) = frame.arrow {
        out.push_str(&format!("  arrow: {arrow}\n"));
    }
    Some(out)
}
