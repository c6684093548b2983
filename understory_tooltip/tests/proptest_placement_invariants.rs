// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for side selection, sticky resolution, and
//! style projection.
//!
//! 1. Room below with the default preference always yields bottom-center.
//! 2. No room below but room above yields top-center.
//! 3. With no room anywhere, the chosen side has the most room, and ties
//!    resolve bottom, then top, then right.
//! 4. Non-default preferences are returned unchanged.
//! 5. Within one lifecycle the side never changes; rect and width are fresh.
//! 6. A clamped panel stays at least `padding` away from the edge it hit, and
//!    the right-center family is never clamped.
//! 7. Width parsing never panics and reads the first digit run.

use kurbo::Rect;
use proptest::prelude::*;
use understory_tooltip::{
    Clamp, Dimensions, InvertedColors, PlacementParams, PositionResolver, Side, StyleRequest,
    Transform, ViewportBounds, candidates, parse_min_width, project, select_best_side,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn rect_strategy() -> impl Strategy<Value = Rect> {
    (0.0..2000.0_f64, 0.0..2000.0_f64, 0.0..400.0_f64, 0.0..200.0_f64)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h))
}

fn viewport_strategy() -> impl Strategy<Value = ViewportBounds> {
    (1.0..2500.0_f64, 1.0..2500.0_f64).prop_map(|(w, h)| ViewportBounds::new(w, h))
}

fn dimensions_strategy() -> impl Strategy<Value = Dimensions> {
    (0.0..300.0_f64, 0.0..500.0_f64, 0.0..32.0_f64).prop_map(|(estimated_height, width, offset)| {
        Dimensions {
            estimated_height,
            width,
            offset,
        }
    })
}

fn side_strategy() -> impl Strategy<Value = Side> {
    prop_oneof![
        Just(Side::BottomCenter),
        Just(Side::TopCenter),
        Just(Side::RightCenter),
    ]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Room below wins
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn room_below_selects_bottom(
        dims in dimensions_strategy(),
        rect in rect_strategy(),
        width in 1.0..2500.0_f64,
        slack in 1.0..1000.0_f64,
    ) {
        let vp = ViewportBounds::new(width, rect.y1 + dims.estimated_height + dims.offset + slack);
        prop_assert_eq!(
            select_best_side(&dims, Side::BottomCenter, rect, &vp),
            Side::BottomCenter
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Room above is the first fallback
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn room_above_only_selects_top(
        estimated_height in 1.0..300.0_f64,
        offset in 0.0..32.0_f64,
        above in 0.0..1000.0_f64,
        size in (0.0..400.0_f64, 0.0..200.0_f64),
        below_fraction in 0.0..0.9_f64,
        width in 1.0..2500.0_f64,
    ) {
        let dims = Dimensions { estimated_height, width: 200.0, offset };
        let required = estimated_height + offset;
        let rect = Rect::new(10.0, required + above, 10.0 + size.0, required + above + size.1);
        let vp = ViewportBounds::new(width, rect.y1 + required * below_fraction);
        prop_assert_eq!(
            select_best_side(&dims, Side::BottomCenter, rect, &vp),
            Side::TopCenter
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Max-room fallback with ordered ties
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn cramped_selects_most_room(
        estimated_height in 200.0..300.0_f64,
        width in 300.0..500.0_f64,
        rect in (0.0..200.0_f64, 0.0..200.0_f64, 0.0..50.0_f64, 0.0..50.0_f64)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, x + w, y + h)),
        vp in (1.0..200.0_f64, 1.0..200.0_f64).prop_map(|(w, h)| ViewportBounds::new(w, h)),
    ) {
        let dims = Dimensions { estimated_height, width, offset: 8.0 };
        let list = candidates(&dims, rect, &vp);
        prop_assert!(list.iter().all(|c| !c.fits()));

        let chosen = select_best_side(&dims, Side::BottomCenter, rect, &vp);
        let max = list.iter().map(|c| c.available).fold(f64::NEG_INFINITY, f64::max);
        let first_max = list
            .iter()
            .find(|c| c.available == max)
            .map(|c| c.side);
        prop_assert_eq!(Some(chosen), first_max);
    }

    #[test]
    fn cramped_ties_resolve_in_priority_order(
        room in 0_u32..100,
        right_room in 0_u32..100,
    ) {
        // Whole pixels keep the available-space arithmetic exact.
        let (room, right_room) = (f64::from(room), f64::from(right_room));
        // Above and below both have `room`; right has `right_room`.
        let dims = Dimensions { estimated_height: 500.0, width: 500.0, offset: 8.0 };
        let rect = Rect::new(0.0, room, 10.0, room + 10.0);
        let vp = ViewportBounds::new(10.0 + right_room, room * 2.0 + 10.0);
        let expected = if right_room > room { Side::RightCenter } else { Side::BottomCenter };
        prop_assert_eq!(select_best_side(&dims, Side::BottomCenter, rect, &vp), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Explicit preferences stand
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn explicit_preference_is_kept(
        dims in dimensions_strategy(),
        rect in rect_strategy(),
        vp in viewport_strategy(),
        preferred in prop_oneof![Just(Side::TopCenter), Just(Side::RightCenter)],
    ) {
        prop_assert_eq!(select_best_side(&dims, preferred, rect, &vp), preferred);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Sticky side within a lifecycle
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn side_is_sticky_rect_is_fresh(
        rects in proptest::collection::vec(rect_strategy(), 1..8),
        vp in viewport_strategy(),
        preferred in side_strategy(),
    ) {
        let mut resolver = PositionResolver::new();
        resolver.begin();
        let params = PlacementParams { preferred, ..PlacementParams::default() };

        let first = resolver.resolve(&rects[0], &vp, &params).expect("mounted trigger");
        for rect in &rects {
            let placed = resolver.resolve(rect, &vp, &params).expect("mounted trigger");
            prop_assert_eq!(placed.side, first.side);
            prop_assert_eq!(placed.rect, *rect);
            prop_assert_eq!(placed.width, 200.0);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Clamping keeps the padding
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn clamped_panels_respect_padding(
        rect in rect_strategy(),
        vp in viewport_strategy(),
        side in side_strategy(),
        width in 0.0..400.0_f64,
        padding in 0.0..32.0_f64,
    ) {
        let colors = InvertedColors::default();
        let styles = project(&StyleRequest {
            side,
            rect,
            width,
            offset: 8.0,
            viewport_padding: padding,
            viewport: vp,
            font_size: "12px",
            min_width: "200px",
            colors: &colors,
        });

        match styles.clamp {
            Some(Clamp::Right) => {
                prop_assert_ne!(side, Side::RightCenter);
                prop_assert!((styles.panel.left + width + padding - vp.width).abs() < 1e-9);
                prop_assert!(matches!(styles.panel.transform, Transform::Identity | Transform::Above));
            }
            Some(Clamp::Left) => {
                prop_assert_ne!(side, Side::RightCenter);
                prop_assert_eq!(styles.panel.left, padding);
            }
            None => {
                if side != Side::RightCenter {
                    let center = rect.center().x;
                    prop_assert!(center + width / 2.0 <= vp.width);
                    prop_assert!(center - width / 2.0 >= 0.0);
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Width parsing
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn parse_min_width_reads_leading_number(n in 0_u32..100_000, unit in "[a-z%]{0,4}") {
        let value = format!("{n}{unit}");
        prop_assert_eq!(parse_min_width(&value), n);
    }

    #[test]
    fn parse_min_width_never_panics(value in "\\PC*") {
        let _ = parse_min_width(&value);
    }
}
