// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain data shared by the selector, resolver, and projector.

use kurbo::{Rect, Vec2};

use crate::Side;

/// Size of the visible viewport, plus the document scroll offset.
///
/// Width and height bound the space available for placement. The scroll
/// offset only shifts the final absolute coordinates; it never affects which
/// side is chosen, since trigger bounds are already in viewport space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ViewportBounds {
    /// Inner width of the viewport.
    pub width: f64,
    /// Inner height of the viewport.
    pub height: f64,
    /// Document scroll offset added to absolute positions.
    pub scroll: Vec2,
}

impl ViewportBounds {
    /// A viewport of the given size with no scroll offset.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            scroll: Vec2::ZERO,
        }
    }

    /// Set the document scroll offset.
    #[must_use]
    pub const fn with_scroll(mut self, scroll: Vec2) -> Self {
        self.scroll = scroll;
        self
    }
}

/// Panel measurements used to decide whether a side has room.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dimensions {
    /// Caller-supplied guess of the rendered panel height.
    ///
    /// The real height is only known after layout, so a panel taller than
    /// this estimate can still overflow the side chosen for it.
    pub estimated_height: f64,
    /// Panel width in pixels.
    pub width: f64,
    /// Gap between the trigger and the panel.
    pub offset: f64,
}

/// The outcome of one resolution.
///
/// `side` is fixed for the whole visibility lifecycle; `rect` and `width`
/// reflect the trigger and configuration at the time of this resolution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ResolvedPlacement {
    /// The side the panel attaches to.
    pub side: Side,
    /// Trigger bounds in viewport coordinates.
    pub rect: Rect,
    /// Panel width in pixels.
    pub width: f64,
}
