// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sticky sides for many tooltips keyed by host ids.
//!
//! Hosts that show tooltips over many triggers (grid cells, table rows) can
//! keep one [`PlacementCache`] instead of one resolver per trigger. Each id
//! gets its own lifecycle: showing an id starts it, hiding an id drops it.
//! Lifecycle tokens come from one counter per cache, so a re-shown id never
//! gets the token of an earlier cycle.
//!
//! ```
//! use kurbo::Rect;
//! use understory_tooltip::{PlacementCache, PlacementParams, Side, ViewportBounds};
//!
//! let viewport = ViewportBounds::new(800.0, 600.0);
//! let params = PlacementParams::default();
//! let mut cache: PlacementCache<u32> = PlacementCache::new();
//!
//! cache.show(7);
//! let cell = Rect::new(10.0, 570.0, 30.0, 590.0);
//! let placed = cache.resolve(&7, &cell, &viewport, &params).unwrap();
//! assert_eq!(placed.side, Side::TopCenter);
//!
//! // Ids that are not shown have nothing to place.
//! assert!(cache.resolve(&8, &cell, &viewport, &params).is_none());
//! ```

use alloc::collections::BTreeMap;
use alloc::collections::btree_map::Entry;

use crate::ResolvedPlacement;
use crate::resolver::{Lifecycle, PlacementParams, PositionResolver, TriggerSource, ViewportSource};

/// Per-id resolvers for tooltips that show and hide independently.
#[derive(Clone, Debug)]
pub struct PlacementCache<K> {
    entries: BTreeMap<K, PositionResolver>,
    last: Lifecycle,
}

impl<K> Default for PlacementCache<K> {
    fn default() -> Self {
        Self {
            entries: BTreeMap::new(),
            last: Lifecycle::default(),
        }
    }
}

impl<K: Ord> PlacementCache<K> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Show the tooltip for `id`, starting a lifecycle if it was hidden.
    ///
    /// Every new lifecycle gets a token greater than any this cache issued
    /// before.
    pub fn show(&mut self, id: K) -> Lifecycle {
        match self.entries.entry(id) {
            Entry::Occupied(entry) => entry.get().lifecycle(),
            Entry::Vacant(entry) => {
                let mut resolver = PositionResolver::after(self.last);
                self.last = resolver.begin();
                entry.insert(resolver);
                self.last
            }
        }
    }

    /// Hide the tooltip for `id`, forgetting its side.
    ///
    /// Returns whether it was shown.
    pub fn hide(&mut self, id: &K) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Whether the tooltip for `id` is shown.
    pub fn is_shown(&self, id: &K) -> bool {
        self.entries.contains_key(id)
    }

    /// Resolve the placement for a shown tooltip.
    ///
    /// Returns `None` for hidden ids and for triggers without bounds.
    pub fn resolve<T, V>(
        &mut self,
        id: &K,
        trigger: &T,
        viewport: &V,
        params: &PlacementParams<'_>,
    ) -> Option<ResolvedPlacement>
    where
        T: TriggerSource + ?Sized,
        V: ViewportSource + ?Sized,
    {
        self.entries.get_mut(id)?.resolve(trigger, viewport, params)
    }

    /// Number of shown tooltips.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no tooltip is shown.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hide every tooltip.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
