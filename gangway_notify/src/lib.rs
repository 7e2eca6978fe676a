// Copyright 2026 the Gangway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gangway Notify: the raw platform-notification model.
//!
//! Keyboard coordination starts from a stream of named platform notifications,
//! each carrying an opaque key/value payload. This crate models that inbound
//! boundary:
//!
//! - [`names`] lists the six notification names of interest.
//! - [`keys`] lists the payload keys the keyboard notifications carry.
//! - [`Payload`] is the opaque key/value bag, with typed accessors that fail
//!   soft: a missing key *or* a mismatched variant yields `None`, never a
//!   panic. Payloads come from the platform and are outside this system's
//!   control, so malformed input is the expected case, not the exceptional one.
//! - [`Notification`] pairs a name with its payload.
//!
//! ## Minimal example
//!
//! ```
//! use gangway_notify::{keys, names, Notification, Payload, Value};
//! use kurbo::Rect;
//!
//! let payload = Payload::new()
//!     .with(keys::FRAME_END, Value::Rect(Rect::new(0.0, 584.0, 390.0, 844.0)))
//!     .with(keys::ANIMATION_DURATION, Value::Number(0.25));
//! let note = Notification { name: names::WILL_SHOW, payload };
//!
//! assert_eq!(note.payload.number(keys::ANIMATION_DURATION), Some(0.25));
//! // Wrong variant: the rect accessor refuses the duration number.
//! assert_eq!(note.payload.rect(keys::ANIMATION_DURATION), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::collections::BTreeMap;

use kurbo::Rect;

/// Names of the keyboard notifications a controller subscribes to.
///
/// The platform does not guarantee any arrival order between these; consumers
/// must tolerate any interleaving.
pub mod names {
    /// The keyboard is about to appear.
    pub const WILL_SHOW: &str = "keyboard_will_show";
    /// The keyboard finished appearing.
    pub const DID_SHOW: &str = "keyboard_did_show";
    /// The keyboard is about to disappear.
    pub const WILL_HIDE: &str = "keyboard_will_hide";
    /// The keyboard finished disappearing.
    pub const DID_HIDE: &str = "keyboard_did_hide";
    /// The keyboard frame is about to change (show, hide, or resize).
    pub const WILL_CHANGE_FRAME: &str = "keyboard_will_change_frame";
    /// The keyboard frame finished changing.
    pub const DID_CHANGE_FRAME: &str = "keyboard_did_change_frame";
}

/// Payload keys carried by keyboard notifications.
pub mod keys {
    /// Keyboard frame before the change, in screen coordinates ([`Value::Rect`]).
    ///
    /// [`Value::Rect`]: crate::Value::Rect
    pub const FRAME_BEGIN: &str = "frame_begin";
    /// Keyboard frame after the change, in screen coordinates ([`Value::Rect`]).
    ///
    /// [`Value::Rect`]: crate::Value::Rect
    pub const FRAME_END: &str = "frame_end";
    /// Raw integer animation-curve code ([`Value::Number`]).
    ///
    /// [`Value::Number`]: crate::Value::Number
    pub const ANIMATION_CURVE: &str = "animation_curve";
    /// Animation duration in seconds ([`Value::Number`]).
    ///
    /// [`Value::Number`]: crate::Value::Number
    pub const ANIMATION_DURATION: &str = "animation_duration";
}

/// A single payload entry.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Value {
    /// Scalar numeric entry (durations, curve codes).
    Number(f64),
    /// Rectangle entry in screen coordinates.
    Rect(Rect),
}

/// Opaque key/value payload attached to a platform notification.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Payload {
    entries: BTreeMap<&'static str, Value>,
}

impl Payload {
    /// Create an empty payload.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: &'static str, value: Value) -> Self {
        self.entries.insert(key, value);
        self
    }

    /// Insert an entry, replacing any previous value for `key`.
    pub fn insert(&mut self, key: &'static str, value: Value) {
        self.entries.insert(key, value);
    }

    /// Numeric entry under `key`, or `None` if absent or not a number.
    pub fn number(&self, key: &str) -> Option<f64> {
        match self.entries.get(key) {
            Some(Value::Number(n)) => Some(*n),
            _ => None,
        }
    }

    /// Rectangle entry under `key`, or `None` if absent or not a rectangle.
    pub fn rect(&self, key: &str) -> Option<Rect> {
        match self.entries.get(key) {
            Some(Value::Rect(r)) => Some(*r),
            _ => None,
        }
    }
}

/// A named platform notification plus its payload.
#[derive(Clone, Debug, PartialEq)]
pub struct Notification<'a> {
    /// Platform notification name; see [`names`].
    pub name: &'a str,
    /// Opaque key/value payload; see [`keys`].
    pub payload: Payload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_accessor_reads_numbers_only() {
        let payload = Payload::new()
            .with(keys::ANIMATION_DURATION, Value::Number(0.25))
            .with(keys::FRAME_END, Value::Rect(Rect::new(0.0, 0.0, 10.0, 10.0)));

        assert_eq!(payload.number(keys::ANIMATION_DURATION), Some(0.25));
        assert_eq!(payload.number(keys::FRAME_END), None);
        assert_eq!(payload.number(keys::ANIMATION_CURVE), None);
    }

    #[test]
    fn rect_accessor_reads_rects_only() {
        let rect = Rect::new(0.0, 584.0, 390.0, 844.0);
        let payload = Payload::new()
            .with(keys::FRAME_END, Value::Rect(rect))
            .with(keys::ANIMATION_CURVE, Value::Number(7.0));

        assert_eq!(payload.rect(keys::FRAME_END), Some(rect));
        assert_eq!(payload.rect(keys::ANIMATION_CURVE), None);
        assert_eq!(payload.rect(keys::FRAME_BEGIN), None);
    }

    #[test]
    fn insert_replaces_previous_entry() {
        let mut payload = Payload::new().with(keys::ANIMATION_DURATION, Value::Number(0.0));
        payload.insert(keys::ANIMATION_DURATION, Value::Number(0.3));
        assert_eq!(payload.number(keys::ANIMATION_DURATION), Some(0.3));
    }

    #[test]
    fn empty_payload_yields_nothing() {
        let payload = Payload::new();
        assert_eq!(payload.number(keys::ANIMATION_DURATION), None);
        assert_eq!(payload.rect(keys::FRAME_BEGIN), None);
    }
}
