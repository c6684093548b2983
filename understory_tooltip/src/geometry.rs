// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Small pure helpers: minimum-width parsing and arrow triangle borders.

use crate::Side;

/// Width in pixels used when a minimum-width value carries no usable number.
pub const DEFAULT_MIN_WIDTH: u32 = 200;

/// Border width of the arrow triangle, in pixels.
pub const ARROW_SIZE: f64 = 4.0;

/// Extract a pixel width from a CSS-like length such as `"200px"`.
///
/// The first run of ASCII digits is read as an integer, so `"3.5rem"` yields
/// `3`. Input without digits, or whose digit run does not fit in a `u32`,
/// yields [`DEFAULT_MIN_WIDTH`].
pub fn parse_min_width(value: &str) -> u32 {
    let digits = value
        .trim_start_matches(|c: char| !c.is_ascii_digit())
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .unwrap_or_default();
    digits.parse().unwrap_or(DEFAULT_MIN_WIDTH)
}

/// How one edge of the arrow box is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Border {
    /// A solid border in the panel's background color; this is the triangle.
    Solid,
    /// A transparent border of the same width, shaping the triangle's sides.
    Transparent,
    /// No border.
    None,
}

/// The four borders of a zero-sized box that renders as a CSS triangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BorderSet {
    /// Top border.
    pub top: Border,
    /// Right border.
    pub right: Border,
    /// Bottom border.
    pub bottom: Border,
    /// Left border.
    pub left: Border,
}

impl BorderSet {
    /// The borders in CSS order (top, right, bottom, left) with their property names.
    pub fn edges(&self) -> [(&'static str, Border); 4] {
        [
            ("border-top", self.top),
            ("border-right", self.right),
            ("border-bottom", self.bottom),
            ("border-left", self.left),
        ]
    }
}

/// Borders for an arrow pointing from the panel toward the trigger.
///
/// The solid border sits on the edge facing the trigger, its opposite edge has
/// no border, and the two perpendicular edges are transparent spacers.
pub fn arrow_borders(side: Side) -> BorderSet {
    match side {
        Side::BottomCenter => BorderSet {
            top: Border::None,
            right: Border::Transparent,
            bottom: Border::Solid,
            left: Border::Transparent,
        },
        Side::TopCenter => BorderSet {
            top: Border::Solid,
            right: Border::Transparent,
            bottom: Border::None,
            left: Border::Transparent,
        },
        Side::RightCenter => BorderSet {
            top: Border::Transparent,
            right: Border::Solid,
            bottom: Border::Transparent,
            left: Border::None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_min_width_reads_first_digit_run() {
        assert_eq!(parse_min_width("200px"), 200);
        assert_eq!(parse_min_width("3.5rem"), 3);
        assert_eq!(parse_min_width("min(320px, 50vw)"), 320);
        assert_eq!(parse_min_width("0px"), 0);
    }

    #[test]
    fn parse_min_width_defaults_without_digits() {
        assert_eq!(parse_min_width("abc"), DEFAULT_MIN_WIDTH);
        assert_eq!(parse_min_width(""), DEFAULT_MIN_WIDTH);
        assert_eq!(parse_min_width("auto"), DEFAULT_MIN_WIDTH);
    }

    #[test]
    fn parse_min_width_defaults_on_overflow() {
        assert_eq!(parse_min_width("99999999999999999999px"), DEFAULT_MIN_WIDTH);
    }

    #[test]
    fn right_arrow_points_left() {
        let b = arrow_borders(Side::RightCenter);
        assert_eq!(b.right, Border::Solid);
        assert_eq!(b.left, Border::None);
        assert_eq!(b.top, Border::Transparent);
        assert_eq!(b.bottom, Border::Transparent);
    }

    #[test]
    fn top_arrow_points_down() {
        let b = arrow_borders(Side::TopCenter);
        assert_eq!(b.top, Border::Solid);
        assert_eq!(b.bottom, Border::None);
    }

    #[test]
    fn lossy_side_gets_bottom_triangle() {
        assert_eq!(
            arrow_borders(Side::from_str_lossy("diagonal")),
            arrow_borders(Side::BottomCenter)
        );
    }

    #[test]
    fn exactly_one_solid_edge() {
        for side in Side::ALL {
            let edges = arrow_borders(side).edges();
            let solid = edges.iter().filter(|(_, b)| *b == Border::Solid).count();
            let none = edges.iter().filter(|(_, b)| *b == Border::None).count();
            assert_eq!((solid, none), (1, 1), "{side}");
        }
    }
}
