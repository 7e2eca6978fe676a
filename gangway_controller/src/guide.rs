// Copyright 2026 the Gangway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A height-only layout guide kept in sync with the keyboard.

use kurbo::Rect;

/// Non-rendering placeholder whose height tracks the keyboard.
///
/// The controller updates the guide on every emission as a side effect, so
/// consumers that prefer declarative constraint-based layout can reserve
/// space for the keyboard without handling the imperative callback at all.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct KeyboardGuide {
    length: f64,
}

impl KeyboardGuide {
    /// Current guide height, in the owning container's coordinate space.
    pub fn length(&self) -> f64 {
        self.length
    }

    pub(crate) fn set(&mut self, length: f64) {
        self.length = length;
    }
}

/// Height left under `frame` within `owner_bounds`, less the bottom safe inset.
///
/// `frame` is the accessory frame already projected into the guide owner's
/// local space. Clamped at zero for frames at or below the bottom edge.
pub fn height_below(owner_bounds: Rect, frame: Rect, bottom_inset: f64) -> f64 {
    (owner_bounds.height() - frame.max_y() - bottom_inset).max(0.0)
}
