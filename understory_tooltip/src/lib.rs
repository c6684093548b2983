// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tooltip --heading-base-level=0

//! Understory Tooltip: viewport-adaptive tooltip placement.
//!
//! Given a trigger's bounds in viewport coordinates and a preferred side, this
//! crate picks where a floating panel goes, keeps that choice stable while the
//! tooltip is visible, and projects the result into absolute pixel styles for
//! the panel and its pointer arrow.
//!
//! ## Pipeline
//!
//! - [`select_best_side`]: pure choice among [`Side::BottomCenter`],
//!   [`Side::TopCenter`] and [`Side::RightCenter`] based on available room.
//! - [`PositionResolver`]: reads the trigger and viewport through
//!   [`TriggerSource`] / [`ViewportSource`], picks the side once per
//!   visibility [`Lifecycle`], and returns a [`ResolvedPlacement`].
//! - [`project`]: turns a placement into [`PanelStyle`] and [`ArrowStyle`],
//!   clamping horizontally centered panels into the viewport.
//! - [`Tooltip`]: ties a [`TooltipConfig`] to a resolver and the projector for
//!   hosts that just want a frame to paint.
//! - [`PlacementCache`]: per-id sticky sides for many tooltips at once.
//!
//! ## Sticky placement
//!
//! The side is chosen on the first resolution of a lifecycle and then held,
//! so a panel does not flip between top and bottom as the page scrolls under
//! it. Bounds and width are still re-read on every resolution. Start a new
//! lifecycle when the tooltip goes from hidden to shown.
//!
//! ## Height is an estimate
//!
//! Whether a panel fits above or below is decided from
//! [`TooltipConfig::estimated_height`], not a measured height, because the
//! panel has not been laid out when the side is chosen. Content taller than
//! the estimate can overflow the chosen side.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_tooltip::{Side, Tooltip, TooltipConfig, ViewportBounds};
//!
//! let mut tooltip = Tooltip::new(TooltipConfig::default());
//! tooltip.show();
//!
//! // A trigger hugging the bottom of the viewport gets its tooltip above.
//! let trigger = Rect::new(380.0, 560.0, 420.0, 590.0);
//! let frame = tooltip
//!     .layout(&trigger, &ViewportBounds::new(800.0, 600.0))
//!     .unwrap();
//! assert_eq!(frame.placement.side, Side::TopCenter);
//! assert_eq!(
//!     frame.panel.to_string(),
//!     "position: absolute; left: 400px; top: 552px; \
//!      transform: translateX(-50%) translateY(-100%); \
//!      background-color: var(--colors-bg-inverted); color: var(--colors-fg-inverted); \
//!      border-radius: 4px; padding: 8px; font-size: 12px; min-width: 200px; \
//!      white-space: nowrap; z-index: 1000; \
//!      transition: opacity 0.2s ease, transform 0.2s ease;"
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for floating-point math.
//! - `serde`: derives `Serialize`/`Deserialize` for [`TooltipConfig`], [`InvertedColors`]
//!   and [`Side`].
//!
//! Diagnostics are emitted through [`tracing`] at `debug` and `trace` level.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod cache;
mod config;
mod geometry;
mod resolver;
mod select;
mod side;
mod style;
mod tooltip;
mod types;

pub use cache::PlacementCache;
pub use config::{
    DEFAULT_ESTIMATED_HEIGHT, DEFAULT_FONT_SIZE, DEFAULT_MIN_WIDTH_SPEC, DEFAULT_TOOLTIP_OFFSET,
    DEFAULT_VIEWPORT_PADDING, InvertedColors, TooltipConfig,
};
pub use geometry::{ARROW_SIZE, Border, BorderSet, DEFAULT_MIN_WIDTH, arrow_borders, parse_min_width};
pub use resolver::{Lifecycle, PlacementParams, PositionResolver, TriggerSource, ViewportSource};
pub use select::{Candidate, candidates, select_best_side};
pub use side::{ParseSideError, Side};
pub use style::{
    ARROW_TRANSITION, ArrowStyle, Clamp, Length, PANEL_BORDER_RADIUS, PANEL_PADDING,
    PANEL_TRANSITION, PANEL_Z_INDEX, PanelStyle, StyleProjection, StyleRequest, Transform, project,
};
pub use tooltip::{Tooltip, TooltipFrame};
pub use types::{Dimensions, ResolvedPlacement, ViewportBounds};
