// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The anchor family a tooltip panel attaches to.

use core::fmt;
use core::str::FromStr;

/// Which edge of the trigger the tooltip panel attaches to.
///
/// Every side is centered on the edge it names; there are no corner or
/// diagonal anchors.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Side {
    /// Below the trigger, centered horizontally.
    ///
    /// This is the default and the only preference that enables automatic
    /// fallback to another side.
    #[default]
    BottomCenter,
    /// Above the trigger, centered horizontally.
    TopCenter,
    /// To the right of the trigger, centered vertically.
    RightCenter,
}

impl Side {
    /// All sides, in fallback priority order.
    pub const ALL: [Self; 3] = [Self::BottomCenter, Self::TopCenter, Self::RightCenter];

    /// The textual form used in configuration (`"bottom-center"` etc).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BottomCenter => "bottom-center",
            Self::TopCenter => "top-center",
            Self::RightCenter => "right-center",
        }
    }

    /// Parse a side, mapping anything unrecognized to [`Side::BottomCenter`].
    ///
    /// Use this where a bad value should degrade to the default placement
    /// instead of failing (for example, untyped host attributes).
    pub fn from_str_lossy(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Whether the panel is centered horizontally on the trigger.
    ///
    /// Only horizontally centered sides are clamped against the viewport edges.
    pub const fn is_horizontally_centered(self) -> bool {
        matches!(self, Self::BottomCenter | Self::TopCenter)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text does not name a [`Side`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown tooltip side (expected `bottom-center`, `top-center` or `right-center`)")]
pub struct ParseSideError;

impl FromStr for Side {
    type Err = ParseSideError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|side| side.as_str() == s.trim())
            .ok_or(ParseSideError)
    }
}
