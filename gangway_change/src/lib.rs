// Copyright 2026 the Gangway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gangway Change: classify raw keyboard notifications into canonical events.
//!
//! The platform announces keyboard movement through six differently-named
//! notifications with no guaranteed arrival order. This crate maps a
//! notification name onto a canonical [`ChangeKind`] via [`classify`], and
//! assembles a normalized [`KeyboardChange`] — kind, begin/end rectangles, and
//! an optional [`AnimationSpec`] — via [`KeyboardChange::from_notification`].
//!
//! Construction is the only validation point: a change is constructible only
//! from a payload carrying a classifiable name and both rectangles, and a
//! failed construction yields `None` rather than an error. Rectangles are
//! taken verbatim in screen coordinates; any coordinate transform is the
//! caller's job.
//!
//! ```
//! use gangway_change::{classify, ChangeKind, KeyboardChange};
//! use gangway_notify::{keys, names, Notification, Payload, Value};
//! use kurbo::Rect;
//!
//! assert_eq!(classify(names::WILL_HIDE), Some(ChangeKind::WillHide));
//! assert_eq!(classify("unrelated"), None);
//!
//! let note = Notification {
//!     name: names::WILL_SHOW,
//!     payload: Payload::new()
//!         .with(keys::FRAME_BEGIN, Value::Rect(Rect::new(0.0, 844.0, 390.0, 1104.0)))
//!         .with(keys::FRAME_END, Value::Rect(Rect::new(0.0, 584.0, 390.0, 844.0))),
//! };
//! let change = KeyboardChange::from_notification(&note).unwrap();
//! assert_eq!(change.kind, ChangeKind::WillShow);
//! // No animation fields in the payload: the descriptor is simply absent.
//! assert!(change.animation.is_none());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use gangway_animation::AnimationSpec;
use gangway_notify::{Notification, keys, names};
use kurbo::Rect;

/// Canonical keyboard change kinds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Keyboard about to appear.
    WillShow,
    /// Keyboard about to disappear.
    WillHide,
    /// Keyboard finished appearing.
    DidShow,
    /// Keyboard finished disappearing.
    DidHide,
    /// Keyboard frame about to change.
    WillChangeFrame,
    /// Keyboard frame finished changing.
    DidChangeFrame,
}

/// Map a notification name onto its canonical kind.
///
/// Pure lookup over the six names in [`gangway_notify::names`]; any other
/// name yields `None`.
pub fn classify(name: &str) -> Option<ChangeKind> {
    match name {
        names::WILL_SHOW => Some(ChangeKind::WillShow),
        names::WILL_HIDE => Some(ChangeKind::WillHide),
        names::DID_SHOW => Some(ChangeKind::DidShow),
        names::DID_HIDE => Some(ChangeKind::DidHide),
        names::WILL_CHANGE_FRAME => Some(ChangeKind::WillChangeFrame),
        names::DID_CHANGE_FRAME => Some(ChangeKind::DidChangeFrame),
        _ => None,
    }
}

/// A normalized keyboard change event.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardChange {
    /// What kind of change this is.
    pub kind: ChangeKind,
    /// Keyboard frame before the change, in screen coordinates.
    pub begin: Rect,
    /// Keyboard frame after the change, in screen coordinates.
    pub end: Rect,
    /// How the platform intends to animate the change; `None` when the
    /// animation fields of the payload are malformed or missing.
    pub animation: Option<AnimationSpec>,
}

impl KeyboardChange {
    /// Assemble a change from a raw notification.
    ///
    /// Requires a classifiable name and both rectangles; yields `None`
    /// otherwise. Never panics — the payload is best-effort platform data.
    pub fn from_notification(note: &Notification<'_>) -> Option<Self> {
        let kind = classify(note.name)?;
        let begin = note.payload.rect(keys::FRAME_BEGIN)?;
        let end = note.payload.rect(keys::FRAME_END)?;
        Some(Self {
            kind,
            begin,
            end,
            animation: AnimationSpec::from_payload(&note.payload),
        })
    }

    /// Whether this change belongs to the owning element, given whether that
    /// element currently holds input focus.
    ///
    /// Hide completion is the asymmetric case: by the time a `DidHide`
    /// arrives, focus has usually moved on already, so the change belongs to
    /// an owner that is *not* focused. Not exactly exact science, but a
    /// decent guess.
    pub fn belongs_to(&self, owner_focused: bool) -> bool {
        match self.kind {
            ChangeKind::DidHide => !owner_focused,
            ChangeKind::WillShow
            | ChangeKind::WillHide
            | ChangeKind::DidShow
            | ChangeKind::WillChangeFrame
            | ChangeKind::DidChangeFrame => owner_focused,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gangway_notify::{Payload, Value};

    const BEGIN: Rect = Rect::new(0.0, 844.0, 390.0, 1104.0);
    const END: Rect = Rect::new(0.0, 584.0, 390.0, 844.0);

    fn full_payload() -> Payload {
        Payload::new()
            .with(keys::FRAME_BEGIN, Value::Rect(BEGIN))
            .with(keys::FRAME_END, Value::Rect(END))
            .with(keys::ANIMATION_CURVE, Value::Number(7.0))
            .with(keys::ANIMATION_DURATION, Value::Number(0.25))
    }

    #[test]
    fn classify_covers_all_six_names_exactly_once() {
        let table = [
            (names::WILL_SHOW, ChangeKind::WillShow),
            (names::WILL_HIDE, ChangeKind::WillHide),
            (names::DID_SHOW, ChangeKind::DidShow),
            (names::DID_HIDE, ChangeKind::DidHide),
            (names::WILL_CHANGE_FRAME, ChangeKind::WillChangeFrame),
            (names::DID_CHANGE_FRAME, ChangeKind::DidChangeFrame),
        ];
        for (name, kind) in table {
            assert_eq!(classify(name), Some(kind), "name {name:?} should classify");
        }
    }

    #[test]
    fn classify_rejects_anything_else() {
        assert_eq!(classify(""), None);
        assert_eq!(classify("keyboard_will_show_extra"), None);
        assert_eq!(classify("scroll_did_end"), None);
    }

    #[test]
    fn from_notification_extracts_rects_verbatim() {
        let note = Notification {
            name: names::WILL_CHANGE_FRAME,
            payload: full_payload(),
        };
        let change = KeyboardChange::from_notification(&note).unwrap();
        assert_eq!(change.kind, ChangeKind::WillChangeFrame);
        assert_eq!(change.begin, BEGIN);
        assert_eq!(change.end, END);
        let animation = change.animation.unwrap();
        assert_eq!(animation.duration, 0.25);
    }

    #[test]
    fn missing_end_rect_yields_none() {
        let note = Notification {
            name: names::WILL_SHOW,
            payload: Payload::new().with(keys::FRAME_BEGIN, Value::Rect(BEGIN)),
        };
        assert_eq!(KeyboardChange::from_notification(&note), None);
    }

    #[test]
    fn missing_begin_rect_yields_none() {
        let note = Notification {
            name: names::WILL_SHOW,
            payload: Payload::new().with(keys::FRAME_END, Value::Rect(END)),
        };
        assert_eq!(KeyboardChange::from_notification(&note), None);
    }

    #[test]
    fn unclassifiable_name_yields_none_even_with_full_payload() {
        let note = Notification {
            name: "something_else",
            payload: full_payload(),
        };
        assert_eq!(KeyboardChange::from_notification(&note), None);
    }

    #[test]
    fn malformed_animation_does_not_block_the_change() {
        let note = Notification {
            name: names::DID_SHOW,
            payload: Payload::new()
                .with(keys::FRAME_BEGIN, Value::Rect(BEGIN))
                .with(keys::FRAME_END, Value::Rect(END)),
        };
        let change = KeyboardChange::from_notification(&note).unwrap();
        assert!(change.animation.is_none());
    }

    #[test]
    fn ownership_is_asymmetric_for_did_hide() {
        let note = Notification {
            name: names::DID_HIDE,
            payload: full_payload(),
        };
        let change = KeyboardChange::from_notification(&note).unwrap();
        assert!(change.belongs_to(false));
        assert!(!change.belongs_to(true));
    }

    #[test]
    fn ownership_requires_focus_for_everything_else() {
        for name in [
            names::WILL_SHOW,
            names::WILL_HIDE,
            names::DID_SHOW,
            names::WILL_CHANGE_FRAME,
            names::DID_CHANGE_FRAME,
        ] {
            let note = Notification {
                name,
                payload: full_payload(),
            };
            let change = KeyboardChange::from_notification(&note).unwrap();
            assert!(change.belongs_to(true), "{name:?} should belong when focused");
            assert!(
                !change.belongs_to(false),
                "{name:?} should not belong when unfocused"
            );
        }
    }
}
