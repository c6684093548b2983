// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tooltip configuration and its defaults.

use alloc::string::{String, ToString};

use crate::Side;

/// Default guess of the panel height, in pixels.
pub const DEFAULT_ESTIMATED_HEIGHT: f64 = 80.0;
/// Default minimum-width value.
pub const DEFAULT_MIN_WIDTH_SPEC: &str = "200px";
/// Default gap between trigger and panel, in pixels.
pub const DEFAULT_TOOLTIP_OFFSET: f64 = 8.0;
/// Default distance kept between a clamped panel and the viewport edge, in pixels.
pub const DEFAULT_VIEWPORT_PADDING: f64 = 16.0;
/// Default panel font size.
pub const DEFAULT_FONT_SIZE: &str = "12px";

/// Background/foreground pair for the panel.
///
/// Tooltips use the inverted pair of the surrounding theme (light text on a
/// dark panel in a light theme). The arrow is drawn in the background color.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct InvertedColors {
    /// Panel and arrow fill, any CSS color value.
    pub background: String,
    /// Text color, any CSS color value.
    pub foreground: String,
}

impl Default for InvertedColors {
    fn default() -> Self {
        Self {
            background: "var(--colors-bg-inverted)".to_string(),
            foreground: "var(--colors-fg-inverted)".to_string(),
        }
    }
}

/// Tooltip configuration.
///
/// All fields are optional for hosts: the [`Default`] values match the
/// documented defaults and, with the `serde` feature, missing keys fall back
/// to them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct TooltipConfig {
    /// Guess of the rendered panel height used to test for room (default: 80).
    pub estimated_height: f64,
    /// Minimum panel width as a CSS length (default: `"200px"`).
    ///
    /// Passed through to the panel style and parsed for placement math.
    pub min_width: String,
    /// Preferred side (default: bottom-center, which enables fallback).
    pub position: Side,
    /// Whether to paint the arrow (default: true).
    pub show_arrow: bool,
    /// Gap between trigger and panel in pixels (default: 8).
    pub tooltip_offset: f64,
    /// Distance kept from the viewport edge when clamping (default: 16).
    pub viewport_padding: f64,
    /// Panel font size, passed through (default: `"12px"`).
    pub font_size: String,
    /// Panel colors.
    pub colors: InvertedColors,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            estimated_height: DEFAULT_ESTIMATED_HEIGHT,
            min_width: DEFAULT_MIN_WIDTH_SPEC.to_string(),
            position: Side::BottomCenter,
            show_arrow: true,
            tooltip_offset: DEFAULT_TOOLTIP_OFFSET,
            viewport_padding: DEFAULT_VIEWPORT_PADDING,
            font_size: DEFAULT_FONT_SIZE.to_string(),
            colors: InvertedColors::default(),
        }
    }
}

impl TooltipConfig {
    /// Set the estimated panel height.
    #[must_use]
    pub fn estimated_height(mut self, height: f64) -> Self {
        self.estimated_height = height;
        self
    }

    /// Set the minimum-width value.
    #[must_use]
    pub fn min_width(mut self, min_width: impl Into<String>) -> Self {
        self.min_width = min_width.into();
        self
    }

    /// Set the preferred side.
    #[must_use]
    pub fn position(mut self, side: Side) -> Self {
        self.position = side;
        self
    }

    /// Show or hide the arrow.
    #[must_use]
    pub fn show_arrow(mut self, show: bool) -> Self {
        self.show_arrow = show;
        self
    }

    /// Set the gap between trigger and panel.
    #[must_use]
    pub fn tooltip_offset(mut self, offset: f64) -> Self {
        self.tooltip_offset = offset;
        self
    }

    /// Set the padding kept from the viewport edge when clamping.
    #[must_use]
    pub fn viewport_padding(mut self, padding: f64) -> Self {
        self.viewport_padding = padding;
        self
    }

    /// Set the font size.
    #[must_use]
    pub fn font_size(mut self, font_size: impl Into<String>) -> Self {
        self.font_size = font_size.into();
        self
    }

    /// Set the panel colors.
    #[must_use]
    pub fn colors(mut self, colors: InvertedColors) -> Self {
        self.colors = colors;
        self
    }
}
