// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky side resolution for one tooltip.
//!
//! A tooltip that re-picked its side on every layout pass would flip between
//! top and bottom as the page scrolls. [`PositionResolver`] picks the side
//! once per visibility lifecycle and reuses it until the host starts a new
//! lifecycle with [`PositionResolver::begin`]. Trigger bounds and width are
//! still read fresh on every call, so the panel follows the trigger.
//!
//! ```
//! use kurbo::Rect;
//! use understory_tooltip::{PlacementParams, PositionResolver, Side, ViewportBounds};
//!
//! let viewport = ViewportBounds::new(800.0, 600.0);
//! let params = PlacementParams::default();
//! let mut resolver = PositionResolver::new();
//! resolver.begin();
//!
//! // Near the bottom edge: no room below, so the panel goes on top.
//! let near_bottom = Rect::new(100.0, 560.0, 200.0, 590.0);
//! let first = resolver.resolve(&near_bottom, &viewport, &params).unwrap();
//! assert_eq!(first.side, Side::TopCenter);
//!
//! // The page scrolls and the trigger now has plenty of room below,
//! // but the side stays put for this lifecycle.
//! let scrolled = Rect::new(100.0, 160.0, 200.0, 190.0);
//! let second = resolver.resolve(&scrolled, &viewport, &params).unwrap();
//! assert_eq!(second.side, Side::TopCenter);
//! assert_eq!(second.rect, scrolled);
//! ```

use kurbo::Rect;

use crate::config::{DEFAULT_ESTIMATED_HEIGHT, DEFAULT_MIN_WIDTH_SPEC, DEFAULT_TOOLTIP_OFFSET};
use crate::geometry::parse_min_width;
use crate::select::select_best_side;
use crate::{Dimensions, ResolvedPlacement, Side, TooltipConfig, ViewportBounds};

/// Source of the trigger element's current bounds.
pub trait TriggerSource {
    /// Bounds in viewport coordinates, or `None` when the trigger is not
    /// mounted (nothing should be positioned).
    fn bounding_rect(&self) -> Option<Rect>;
}

impl TriggerSource for Rect {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl TriggerSource for Option<Rect> {
    fn bounding_rect(&self) -> Option<Rect> {
        *self
    }
}

impl<T: TriggerSource + ?Sized> TriggerSource for &T {
    fn bounding_rect(&self) -> Option<Rect> {
        (**self).bounding_rect()
    }
}

/// Source of the current viewport size.
pub trait ViewportSource {
    /// The viewport as it is right now.
    fn viewport(&self) -> ViewportBounds;
}

impl ViewportSource for ViewportBounds {
    fn viewport(&self) -> ViewportBounds {
        *self
    }
}

impl<V: ViewportSource + ?Sized> ViewportSource for &V {
    fn viewport(&self) -> ViewportBounds {
        (**self).viewport()
    }
}

/// Identifies one show/hide cycle of a tooltip.
///
/// Tokens are only meaningful for the resolver or cache that issued them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Lifecycle(u64);

impl Lifecycle {
    /// Generation counter of this lifecycle. Zero means no lifecycle has begun.
    pub const fn generation(self) -> u64 {
        self.0
    }
}

/// Inputs for a resolution that come from configuration rather than layout.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PlacementParams<'a> {
    /// Preferred side; only [`Side::BottomCenter`] allows fallback.
    pub preferred: Side,
    /// Guess of the panel height used for the fits-below/fits-above test.
    pub estimated_height: f64,
    /// Minimum-width value, e.g. `"200px"`.
    pub min_width: &'a str,
    /// Gap between trigger and panel.
    pub offset: f64,
}

impl Default for PlacementParams<'_> {
    fn default() -> Self {
        Self {
            preferred: Side::BottomCenter,
            estimated_height: DEFAULT_ESTIMATED_HEIGHT,
            min_width: DEFAULT_MIN_WIDTH_SPEC,
            offset: DEFAULT_TOOLTIP_OFFSET,
        }
    }
}

impl<'a> From<&'a TooltipConfig> for PlacementParams<'a> {
    fn from(config: &'a TooltipConfig) -> Self {
        Self {
            preferred: config.position,
            estimated_height: config.estimated_height,
            min_width: &config.min_width,
            offset: config.tooltip_offset,
        }
    }
}

/// Compute-once memo of a tooltip's side.
///
/// The resolver is owned by exactly one tooltip instance. Call
/// [`begin`](Self::begin) when the tooltip goes from hidden to shown and
/// [`end`](Self::end) when it hides; between the two, every
/// [`resolve`](Self::resolve) returns the side picked by the first one.
/// Outside a lifecycle nothing is resolved.
#[derive(Clone, Debug, Default)]
pub struct PositionResolver {
    lifecycle: Lifecycle,
    active: bool,
    side: Option<Side>,
}

impl PositionResolver {
    /// Create a resolver with no active lifecycle.
    pub const fn new() -> Self {
        Self::after(Lifecycle(0))
    }

    /// An inactive resolver whose next lifecycle follows `last`.
    pub(crate) const fn after(last: Lifecycle) -> Self {
        Self {
            lifecycle: last,
            active: false,
            side: None,
        }
    }

    /// Start a new lifecycle and forget any memoized side.
    pub fn begin(&mut self) -> Lifecycle {
        self.lifecycle = Lifecycle(self.lifecycle.0.wrapping_add(1));
        self.active = true;
        self.side = None;
        self.lifecycle
    }

    /// End the current lifecycle and forget any memoized side.
    pub fn end(&mut self) {
        self.active = false;
        self.side = None;
    }

    /// The most recently started lifecycle.
    pub const fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Whether a lifecycle has begun and not yet ended.
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// The side chosen for the current lifecycle, if one has been chosen.
    pub const fn memoized_side(&self) -> Option<Side> {
        self.side
    }

    /// Resolve the placement for the trigger's current bounds.
    ///
    /// Returns `None` outside a lifecycle and when the trigger has no bounds.
    /// The side is chosen on
    /// the first successful call of a lifecycle and reused afterwards, even
    /// if the bounds, viewport, or `params` change in the meantime.
    pub fn resolve<T, V>(
        &mut self,
        trigger: &T,
        viewport: &V,
        params: &PlacementParams<'_>,
    ) -> Option<ResolvedPlacement>
    where
        T: TriggerSource + ?Sized,
        V: ViewportSource + ?Sized,
    {
        if !self.active {
            tracing::trace!(lifecycle = self.lifecycle.0, "no active tooltip lifecycle");
            return None;
        }
        let Some(rect) = trigger.bounding_rect() else {
            tracing::debug!(
                lifecycle = self.lifecycle.0,
                "tooltip trigger has no bounds; nothing to place"
            );
            return None;
        };
        let viewport = viewport.viewport();
        let width = f64::from(parse_min_width(params.min_width));

        let side = match self.side {
            Some(side) => {
                tracing::trace!(lifecycle = self.lifecycle.0, %side, "reusing tooltip side");
                side
            }
            None => {
                let dimensions = Dimensions {
                    estimated_height: params.estimated_height,
                    width,
                    offset: params.offset,
                };
                let side = select_best_side(&dimensions, params.preferred, rect, &viewport);
                tracing::debug!(
                    lifecycle = self.lifecycle.0,
                    preferred = %params.preferred,
                    %side,
                    "chose tooltip side"
                );
                self.side = Some(side);
                side
            }
        };

        Some(ResolvedPlacement { side, rect, width })
    }
}
