// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The container-facing tooltip: configuration, visibility, and layout.

use crate::resolver::{Lifecycle, PlacementParams, PositionResolver, TriggerSource, ViewportSource};
use crate::style::{ArrowStyle, Clamp, PanelStyle, StyleRequest, project};
use crate::{ResolvedPlacement, TooltipConfig};

/// Everything a container needs to paint one frame of a visible tooltip.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TooltipFrame<'a> {
    /// The placement the styles were computed from.
    pub placement: ResolvedPlacement,
    /// Panel style.
    pub panel: PanelStyle<'a>,
    /// Arrow style, or `None` when the arrow is turned off.
    pub arrow: Option<ArrowStyle<'a>>,
    /// Set when the panel was moved to stay inside the viewport.
    pub clamp: Option<Clamp>,
}

/// A single tooltip instance.
///
/// The tooltip owns its resolver, so the chosen side lives exactly as long
/// as one visibility cycle: [`show`](Self::show) starts a cycle,
/// [`hide`](Self::hide) ends it.
///
/// ```
/// use kurbo::Rect;
/// use understory_tooltip::{Side, Tooltip, TooltipConfig, ViewportBounds};
///
/// let mut tooltip = Tooltip::new(TooltipConfig::default().min_width("120px"));
/// let trigger = Rect::new(40.0, 40.0, 120.0, 60.0);
/// let viewport = ViewportBounds::new(800.0, 600.0);
///
/// // Hidden tooltips produce nothing to paint.
/// assert!(tooltip.layout(&trigger, &viewport).is_none());
///
/// tooltip.show();
/// let frame = tooltip.layout(&trigger, &viewport).unwrap();
/// assert_eq!(frame.placement.side, Side::BottomCenter);
/// assert_eq!(frame.panel.top, 68.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Tooltip {
    config: TooltipConfig,
    resolver: PositionResolver,
    visible: bool,
}

impl Tooltip {
    /// Create a hidden tooltip.
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            config,
            resolver: PositionResolver::new(),
            visible: false,
        }
    }

    /// The current configuration.
    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// A side already chosen for the current cycle is kept; the new
    /// preference applies from the next [`show`](Self::show).
    pub fn set_config(&mut self, config: TooltipConfig) {
        self.config = config;
    }

    /// Whether the tooltip is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show the tooltip, starting a new cycle if it was hidden.
    ///
    /// Showing an already visible tooltip keeps its cycle (and its side).
    pub fn show(&mut self) -> Lifecycle {
        if !self.visible {
            self.visible = true;
            self.resolver.begin();
        }
        self.resolver.lifecycle()
    }

    /// Hide the tooltip, ending its cycle.
    pub fn hide(&mut self) {
        self.visible = false;
        self.resolver.end();
    }

    /// Lay out the tooltip against the trigger's current bounds.
    ///
    /// Returns `None` while hidden or when the trigger has no bounds; the
    /// container should then render nothing positioned.
    pub fn layout<T, V>(&mut self, trigger: &T, viewport: &V) -> Option<TooltipFrame<'_>>
    where
        T: TriggerSource + ?Sized,
        V: ViewportSource + ?Sized,
    {
        if !self.visible {
            return None;
        }
        // One snapshot feeds both side selection and clamping.
        let viewport = viewport.viewport();
        let placement =
            self.resolver
                .resolve(trigger, &viewport, &PlacementParams::from(&self.config))?;

        let styles = project(&StyleRequest::new(&placement, &self.config, viewport));
        Some(TooltipFrame {
            placement,
            panel: styles.panel,
            arrow: self.config.show_arrow.then_some(styles.arrow),
            clamp: styles.clamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Side, Transform, ViewportBounds};
    use kurbo::Rect;

    fn viewport() -> ViewportBounds {
        ViewportBounds::new(800.0, 600.0)
    }

    #[test]
    fn hidden_tooltip_has_no_frame() {
        let mut tooltip = Tooltip::default();
        let rect = Rect::new(10.0, 10.0, 50.0, 30.0);
        assert!(!tooltip.is_visible());
        assert!(tooltip.layout(&rect, &viewport()).is_none());
    }

    #[test]
    fn unmounted_trigger_has_no_frame() {
        let mut tooltip = Tooltip::default();
        tooltip.show();
        let none: Option<Rect> = None;
        assert!(tooltip.layout(&none, &viewport()).is_none());
    }

    #[test]
    fn arrow_follows_show_arrow() {
        let rect = Rect::new(300.0, 10.0, 340.0, 30.0);
        let mut with = Tooltip::new(TooltipConfig::default());
        with.show();
        assert!(with.layout(&rect, &viewport()).unwrap().arrow.is_some());

        let mut without = Tooltip::new(TooltipConfig::default().show_arrow(false));
        without.show();
        assert!(without.layout(&rect, &viewport()).unwrap().arrow.is_none());
    }

    #[test]
    fn side_sticks_until_hidden() {
        let mut tooltip = Tooltip::default();
        let low = Rect::new(300.0, 560.0, 340.0, 580.0);
        let high = Rect::new(300.0, 60.0, 340.0, 80.0);

        let cycle = tooltip.show();
        assert_eq!(tooltip.layout(&low, &viewport()).unwrap().placement.side, Side::TopCenter);
        // Re-showing a visible tooltip keeps the cycle.
        assert_eq!(tooltip.show(), cycle);
        let frame = tooltip.layout(&high, &viewport()).unwrap();
        assert_eq!(frame.placement.side, Side::TopCenter);
        assert_eq!(frame.panel.top, 52.0);

        tooltip.hide();
        assert!(tooltip.show() > cycle);
        assert_eq!(
            tooltip.layout(&high, &viewport()).unwrap().placement.side,
            Side::BottomCenter
        );
    }

    #[test]
    fn clamps_against_the_snapshot_viewport() {
        let mut tooltip = Tooltip::new(TooltipConfig::default().min_width("120px"));
        tooltip.show();
        let rect = Rect::new(100.0, 30.0, 300.0, 50.0);
        let frame = tooltip
            .layout(&rect, &ViewportBounds::new(250.0, 600.0))
            .unwrap();
        assert_eq!(frame.clamp, Some(Clamp::Right));
        assert_eq!(frame.panel.left, 114.0);
        assert_eq!(frame.panel.transform, Transform::Identity);
    }

    #[test]
    fn config_change_keeps_the_current_side() {
        let mut tooltip = Tooltip::default();
        tooltip.show();
        let rect = Rect::new(300.0, 60.0, 340.0, 80.0);
        assert_eq!(
            tooltip.layout(&rect, &viewport()).unwrap().placement.side,
            Side::BottomCenter
        );
        tooltip.set_config(TooltipConfig::default().position(Side::RightCenter));
        assert_eq!(
            tooltip.layout(&rect, &viewport()).unwrap().placement.side,
            Side::BottomCenter
        );
        tooltip.hide();
        tooltip.show();
        assert_eq!(
            tooltip.layout(&rect, &viewport()).unwrap().placement.side,
            Side::RightCenter
        );
    }
}
