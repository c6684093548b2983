// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Best-side selection over an ordered candidate list.
//!
//! Candidates are evaluated in a fixed priority order (bottom, top, right).
//! The first one with enough room wins; if none has enough room, the one with
//! the most room wins, with ties going to the earlier candidate.

use kurbo::Rect;

use crate::{Dimensions, Side, ViewportBounds};

/// One side under consideration, with the room it needs and the room it has.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    /// The side this candidate would place the panel on.
    pub side: Side,
    /// Space needed along the placement axis.
    pub required: f64,
    /// Space between the trigger and the viewport edge on this side.
    pub available: f64,
}

impl Candidate {
    /// Whether the panel fits on this side.
    pub fn fits(&self) -> bool {
        self.available >= self.required
    }
}

/// The candidate list in priority order.
pub fn candidates(dimensions: &Dimensions, rect: Rect, viewport: &ViewportBounds) -> [Candidate; 3] {
    let vertical = dimensions.estimated_height + dimensions.offset;
    [
        Candidate {
            side: Side::BottomCenter,
            required: vertical,
            available: viewport.height - rect.y1,
        },
        Candidate {
            side: Side::TopCenter,
            required: vertical,
            available: rect.y0,
        },
        Candidate {
            side: Side::RightCenter,
            required: dimensions.width + dimensions.offset,
            available: viewport.width - rect.x1,
        },
    ]
}

/// Choose the side for a panel anchored to `rect`.
///
/// Any preference other than [`Side::BottomCenter`] is returned as is.
/// Always returns a side.
pub fn select_best_side(
    dimensions: &Dimensions,
    preferred: Side,
    rect: Rect,
    viewport: &ViewportBounds,
) -> Side {
    if preferred != Side::BottomCenter {
        return preferred;
    }

    let candidates = candidates(dimensions, rect, viewport);
    if let Some(fit) = candidates.iter().find(|c| c.fits()) {
        return fit.side;
    }

    // Strict comparison keeps the earliest candidate on ties.
    let [first, rest @ ..] = candidates;
    rest.into_iter()
        .fold(first, |best, c| {
            if c.available > best.available {
                c
            } else {
                best
            }
        })
        .side
}
