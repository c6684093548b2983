// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Projection of a resolved placement into panel and arrow styles.
//!
//! The projector is a pure function of a [`StyleRequest`]. It computes an
//! anchor point and CSS transform for the panel, keeps horizontally centered
//! panels inside the viewport, and re-aims the arrow at the trigger when the
//! panel had to move. The resulting [`PanelStyle`] and [`ArrowStyle`] render
//! as inline CSS declaration lists through [`Display`](core::fmt::Display).
//!
//! ```
//! use kurbo::Rect;
//! use understory_tooltip::{InvertedColors, Side, StyleRequest, Transform, ViewportBounds, project};
//!
//! let colors = InvertedColors::default();
//! let request = StyleRequest {
//!     side: Side::BottomCenter,
//!     rect: Rect::new(100.0, 30.0, 300.0, 50.0),
//!     width: 120.0,
//!     offset: 8.0,
//!     viewport_padding: 16.0,
//!     viewport: ViewportBounds::new(250.0, 600.0),
//!     font_size: "12px",
//!     min_width: "120px",
//!     colors: &colors,
//! };
//! let styles = project(&request);
//!
//! // The centered panel would end at 260px, past the 250px viewport.
//! assert_eq!(styles.panel.left, 114.0);
//! assert_eq!(styles.panel.transform, Transform::Identity);
//! ```

use core::fmt;

use kurbo::Rect;

use crate::geometry::{ARROW_SIZE, Border, BorderSet, arrow_borders};
use crate::{InvertedColors, ResolvedPlacement, Side, TooltipConfig, ViewportBounds};

/// Stacking order of the panel.
pub const PANEL_Z_INDEX: i32 = 1000;
/// Corner radius of the panel.
pub const PANEL_BORDER_RADIUS: &str = "4px";
/// Inner padding of the panel.
pub const PANEL_PADDING: &str = "8px";
/// Transition hint for the panel.
pub const PANEL_TRANSITION: &str = "opacity 0.2s ease, transform 0.2s ease";
/// Transition hint for the arrow.
pub const ARROW_TRANSITION: &str = "opacity 0.2s ease";

/// A CSS length.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percentage of the containing box.
    Percent(f64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(v) => write!(f, "{v}px"),
            Self::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// CSS transform applied to the panel or arrow box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transform {
    /// `translateX(-50%)`: center horizontally on the anchor.
    CenterX,
    /// `translateX(-50%) translateY(-100%)`: center horizontally and sit above the anchor.
    CenterXAbove,
    /// `translateY(-50%)`: center vertically on the anchor.
    CenterY,
    /// `translateY(-100%)`: sit above the anchor, left edge at the anchor.
    Above,
    /// `translateY(0)`: left and top edges at the anchor.
    Identity,
}

impl Transform {
    /// The CSS value.
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::CenterX => "translateX(-50%)",
            Self::CenterXAbove => "translateX(-50%) translateY(-100%)",
            Self::CenterY => "translateY(-50%)",
            Self::Above => "translateY(-100%)",
            Self::Identity => "translateY(0)",
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

/// Which viewport edge forced the panel to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Clamp {
    /// The centered panel overflowed the right edge.
    Right,
    /// The centered panel overflowed the left edge.
    Left,
}

/// Everything the projector needs.
#[derive(Copy, Clone, Debug)]
pub struct StyleRequest<'a> {
    /// Resolved side.
    pub side: Side,
    /// Trigger bounds in viewport coordinates.
    pub rect: Rect,
    /// Panel width in pixels.
    pub width: f64,
    /// Gap between trigger and panel.
    pub offset: f64,
    /// Distance kept from the viewport edge when clamping.
    pub viewport_padding: f64,
    /// Viewport used for clamping and scroll offset.
    pub viewport: ViewportBounds,
    /// Font size, passed through.
    pub font_size: &'a str,
    /// Minimum width, passed through.
    pub min_width: &'a str,
    /// Panel colors.
    pub colors: &'a InvertedColors,
}

impl<'a> StyleRequest<'a> {
    /// Build a request from a resolved placement and the tooltip's configuration.
    pub fn new(
        placement: &ResolvedPlacement,
        config: &'a TooltipConfig,
        viewport: ViewportBounds,
    ) -> Self {
        Self {
            side: placement.side,
            rect: placement.rect,
            width: placement.width,
            offset: config.tooltip_offset,
            viewport_padding: config.viewport_padding,
            viewport,
            font_size: &config.font_size,
            min_width: &config.min_width,
            colors: &config.colors,
        }
    }
}

/// Style of the floating panel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PanelStyle<'a> {
    /// Absolute left position in pixels.
    pub left: f64,
    /// Absolute top position in pixels.
    pub top: f64,
    /// Transform relative to `(left, top)`.
    pub transform: Transform,
    /// Panel fill.
    pub background: &'a str,
    /// Text color.
    pub foreground: &'a str,
    /// Font size.
    pub font_size: &'a str,
    /// Minimum width.
    pub min_width: &'a str,
}

impl fmt::Display for PanelStyle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position: absolute; left: {}; top: {}; transform: {}; ",
            Length::Px(self.left),
            Length::Px(self.top),
            self.transform
        )?;
        write!(
            f,
            "background-color: {}; color: {}; border-radius: {PANEL_BORDER_RADIUS}; \
             padding: {PANEL_PADDING}; font-size: {}; min-width: {}; ",
            self.background, self.foreground, self.font_size, self.min_width
        )?;
        write!(
            f,
            "white-space: nowrap; z-index: {PANEL_Z_INDEX}; transition: {PANEL_TRANSITION};"
        )
    }
}

/// Style of the zero-sized arrow box, positioned relative to the panel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArrowStyle<'a> {
    /// Left offset inside the panel.
    pub left: Length,
    /// Top offset inside the panel.
    pub top: Length,
    /// Transform relative to `(left, top)`.
    pub transform: Transform,
    /// Triangle borders.
    pub borders: BorderSet,
    /// Color of the solid border.
    pub fill: &'a str,
}

impl fmt::Display for ArrowStyle<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "content: \"\"; position: absolute; left: {}; top: {}; transform: {}; \
             width: 0; height: 0; ",
            self.left, self.top, self.transform
        )?;
        for (property, border) in self.borders.edges() {
            match border {
                Border::Solid => write!(f, "{property}: {ARROW_SIZE}px solid {}; ", self.fill)?,
                Border::Transparent => write!(f, "{property}: {ARROW_SIZE}px solid transparent; ")?,
                Border::None => write!(f, "{property}: none; ")?,
            }
        }
        write!(f, "transition: {ARROW_TRANSITION};")
    }
}

/// Panel and arrow styles for one placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StyleProjection<'a> {
    /// The floating panel.
    pub panel: PanelStyle<'a>,
    /// The arrow, positioned inside the panel.
    pub arrow: ArrowStyle<'a>,
    /// Set when the panel was moved to stay inside the viewport.
    pub clamp: Option<Clamp>,
}

struct Anchor {
    left: f64,
    top: f64,
    transform: Transform,
    arrow_left: Length,
    arrow_top: Length,
    arrow_transform: Transform,
}

fn anchor_for(side: Side, rect: Rect, offset: f64, viewport: &ViewportBounds) -> Anchor {
    let center = rect.center();
    let scroll = viewport.scroll;
    match side {
        Side::BottomCenter => Anchor {
            left: center.x + scroll.x,
            top: rect.y1 + scroll.y + offset,
            transform: Transform::CenterX,
            arrow_left: Length::Percent(50.0),
            arrow_top: Length::Px(-ARROW_SIZE),
            arrow_transform: Transform::CenterX,
        },
        Side::TopCenter => Anchor {
            left: center.x + scroll.x,
            top: rect.y0 + scroll.y - offset,
            transform: Transform::CenterXAbove,
            arrow_left: Length::Percent(50.0),
            arrow_top: Length::Percent(100.0),
            arrow_transform: Transform::CenterX,
        },
        Side::RightCenter => Anchor {
            left: rect.x1 + scroll.x + offset,
            top: center.y + scroll.y,
            transform: Transform::CenterY,
            arrow_left: Length::Px(-ARROW_SIZE),
            arrow_top: Length::Percent(50.0),
            arrow_transform: Transform::CenterY,
        },
    }
}

/// Keep a horizontally centered panel inside the viewport.
///
/// Once clamped, the panel is no longer centered on the trigger, so the
/// horizontal centering is dropped from its transform and the arrow is placed
/// at the trigger's center measured from the panel's new left edge. The
/// scrolled anchor is tested against the bare viewport width, and the clamped
/// left is a viewport position without the scroll offset.
fn clamp_horizontally(anchor: &mut Anchor, request: &StyleRequest<'_>) -> Option<Clamp> {
    if !request.side.is_horizontally_centered() {
        return None;
    }

    let viewport_width = request.viewport.width;
    let half = request.width / 2.0;
    let (left, clamp) = if anchor.left + half > viewport_width {
        (viewport_width - request.width - request.viewport_padding, Clamp::Right)
    } else if anchor.left - half < 0.0 {
        (request.viewport_padding, Clamp::Left)
    } else {
        return None;
    };

    anchor.left = left;
    anchor.transform = match request.side {
        Side::TopCenter => Transform::Above,
        _ => Transform::Identity,
    };
    anchor.arrow_left = Length::Px(request.rect.center().x - left);
    tracing::debug!(?clamp, left, side = %request.side, "clamped tooltip to viewport");
    Some(clamp)
}

/// Compute panel and arrow styles for a resolved placement.
pub fn project<'a>(request: &StyleRequest<'a>) -> StyleProjection<'a> {
    let mut anchor = anchor_for(request.side, request.rect, request.offset, &request.viewport);
    let clamp = clamp_horizontally(&mut anchor, request);

    StyleProjection {
        panel: PanelStyle {
            left: anchor.left,
            top: anchor.top,
            transform: anchor.transform,
            background: &request.colors.background,
            foreground: &request.colors.foreground,
            font_size: request.font_size,
            min_width: request.min_width,
        },
        arrow: ArrowStyle {
            left: anchor.arrow_left,
            top: anchor.arrow_top,
            transform: anchor.arrow_transform,
            borders: arrow_borders(request.side),
            fill: &request.colors.background,
        },
        clamp,
    }
}
