// Copyright 2026 the Gangway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The keyboard status machine.
//!
//! [`AccessoryController`] consumes raw platform notifications and drag
//! updates, reconciles them into a single consistent notion of where the
//! keyboard is, and emits normalized accessory-frame events to its delegate.

use gangway_animation::{AnimationSpec, Curve};
use gangway_change::{ChangeKind, KeyboardChange};
use gangway_notify::{Notification, names};
use kurbo::{Point, Rect};

use crate::behaviours::Behaviours;
use crate::gesture::{PointerPhase, RecognizerId};
use crate::guide::{self, KeyboardGuide};
use crate::host::{AccessoryDelegate, HostEnv};
use crate::relevance::{self, OwnershipMode};
use crate::status::Status;

/// The notification names a controller expects the host to deliver.
///
/// Subscribe on construction, unsubscribe on teardown; the subscription set's
/// lifetime must match the controller's exactly, or the host ends up with
/// dangling callbacks into a destroyed controller.
pub const BOUND_NOTIFICATIONS: [&str; 6] = [
    names::WILL_SHOW,
    names::DID_SHOW,
    names::WILL_HIDE,
    names::DID_HIDE,
    names::WILL_CHANGE_FRAME,
    names::DID_CHANGE_FRAME,
];

/// Coordinates a scroll surface, an accessory bar, and the on-screen keyboard.
///
/// Attaching an accessory view through the platform's native mechanism is
/// unreliable: its frame arrives late, interactive dismissal is not tracked,
/// and inverted scroll content does not compose. The controller instead
/// listens to the keyboard notifications and the scroll surface's drag gesture
/// to determine where the keyboard is, and tells the delegate when it is time
/// to update the interface to make room for it.
///
/// One controller owns exactly one [`Status`], one [`KeyboardGuide`], and one
/// notification subscription set ([`BOUND_NOTIFICATIONS`]). All entry points
/// are synchronous and must be called from the host's event loop.
#[derive(Clone, Debug)]
pub struct AccessoryController<K, H, D> {
    host: H,
    delegate: D,
    owner: K,
    ownership: OwnershipMode,
    behaviours: Behaviours,
    recognizer: RecognizerId,
    status: Status,
    refreshing_input_views: bool,
    guide: KeyboardGuide,
}

impl<K, H, D> AccessoryController<K, H, D>
where
    K: Copy,
    H: HostEnv<K>,
    D: AccessoryDelegate<K>,
{
    /// Create a controller for `owner`'s accessory bar.
    ///
    /// `recognizer` identifies the pan recognizer the host created for the
    /// drag bridge; it is the one recognizer allowed to run simultaneously
    /// with this controller.
    pub fn new(
        host: H,
        delegate: D,
        owner: K,
        ownership: OwnershipMode,
        behaviours: Behaviours,
        recognizer: RecognizerId,
    ) -> Self {
        Self {
            host,
            delegate,
            owner,
            ownership,
            behaviours,
            recognizer,
            status: Status::Hidden,
            refreshing_input_views: false,
            guide: KeyboardGuide::default(),
        }
    }

    /// Current keyboard status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Keyboard height, when one is on screen.
    pub fn keyboard_height(&self) -> Option<f64> {
        self.status.keyboard_height()
    }

    /// The behaviour flags this controller was constructed with.
    pub fn behaviours(&self) -> Behaviours {
        self.behaviours
    }

    /// The layout guide kept in sync with the keyboard.
    pub fn guide(&self) -> KeyboardGuide {
        self.guide
    }

    /// The host environment.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host environment.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The delegate.
    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    /// Mutable access to the delegate.
    pub fn delegate_mut(&mut self) -> &mut D {
        &mut self.delegate
    }

    /// Feed one raw platform notification through classification, ownership
    /// validation, and the status machine.
    ///
    /// Malformed payloads, irrelevant changes, and missing geometry context
    /// are all dropped silently; the notification stream is best-effort
    /// platform data and has no error channel.
    pub fn handle_notification(&mut self, note: &Notification<'_>) {
        let Some(change) = KeyboardChange::from_notification(note) else {
            return;
        };
        if !self.is_relevant(&change) {
            return;
        }
        let Some(window) = self.host.window_bounds() else {
            return;
        };

        match change.kind {
            ChangeKind::WillShow => {
                // A keyboard appearing mid-scroll glitches the layout; settle
                // the scroll surface before moving anything.
                self.host.stop_scrolling();
                self.reconcile_frame(&change, window);
            }
            // Hide is quiet: the interface settles via the accompanying
            // will-change-frame.
            ChangeKind::WillHide | ChangeKind::DidHide => self.status = Status::Hidden,
            ChangeKind::DidShow => {
                self.status = Status::Visible {
                    keyboard_height: change.end.height(),
                };
            }
            ChangeKind::WillChangeFrame => self.reconcile_frame(&change, window),
            // Never emits; only refreshes the cached height, which is
            // idempotent with the will-change-frame that preceded it.
            ChangeKind::DidChangeFrame => self.cache_height(&change, window),
        }
    }

    /// Gating predicate for the drag bridge: may an interactive dismissal
    /// begin right now?
    pub fn should_begin(&self) -> bool {
        matches!(self.status, Status::Visible { .. }) && self.host.interactive_dismiss_enabled()
    }

    /// Whether `other` may recognize simultaneously with this controller.
    ///
    /// Exactly the controller's own pan recognizer is permitted; everything
    /// else is denied, since the drag bridge intercepts pans that would
    /// otherwise also scroll content.
    pub fn should_recognize_simultaneously(&self, other: RecognizerId) -> bool {
        other == self.recognizer
    }

    /// Feed one update of the continuous drag gesture.
    ///
    /// `position` is the pointer's absolute position in window coordinates.
    /// Movement while a keyboard height is known transitions into
    /// [`Status::Scrubbing`] and emits an interim, unanimated frame; the final
    /// position resolves on the next will-change-frame.
    pub fn on_pointer(&mut self, phase: PointerPhase, position: Point) {
        match phase {
            PointerPhase::Changed => {
                let Some(keyboard_height) = self.status.keyboard_height() else {
                    return;
                };
                let Some(window) = self.host.window_bounds() else {
                    return;
                };
                let accessory = self.host.accessory_size();
                // The bar never rises above the fully-open keyboard position.
                let y = position.y.max(window.height() - keyboard_height);
                let frame =
                    Rect::from_origin_size(Point::new(0.0, y - accessory.height), accessory);
                self.status = Status::Scrubbing {
                    position: position.y,
                    keyboard_height,
                };
                self.invoke(frame, false, None);
            }
            PointerPhase::Began => {}
            PointerPhase::Ended | PointerPhase::Cancelled => {
                if let Status::Scrubbing {
                    keyboard_height, ..
                } = self.status
                {
                    self.status = Status::Visible { keyboard_height };
                }
            }
        }
    }

    /// React to the accessory bar's frame changing.
    ///
    /// The host wires this to whatever layout-change or resize observation it
    /// offers; the controller only depends on being told that the frame
    /// changed, not on the observation mechanism.
    pub fn accessory_bounds_changed(&mut self) {
        self.refresh_input_views();
    }

    /// Rebuild the owner's input views under the reentrancy guard.
    ///
    /// The platform echoes its own show/hide notifications synchronously out
    /// of the rebuild; they are drained here with the guard set, so ownership
    /// validation rejects every one of them.
    fn refresh_input_views(&mut self) {
        if !self.host.is_focused(self.owner) {
            return;
        }
        self.refreshing_input_views = true;
        let echoes = self.host.reload_input_views();
        for echo in &echoes {
            self.handle_notification(echo);
        }
        self.refreshing_input_views = false;
    }

    fn is_relevant(&self, change: &KeyboardChange) -> bool {
        relevance::validate(
            change,
            self.ownership,
            self.refreshing_input_views,
            self.host.is_focused(self.owner),
            || {
                self.host
                    .current_focus()
                    .map(|responder| self.delegate.show_accessory_view_for_responder(responder))
            },
        )
    }

    /// Resolve a will-show or will-change-frame into one reconciled emission.
    fn reconcile_frame(&mut self, change: &KeyboardChange, window: Rect) {
        let accessory = self.host.accessory_size();
        let window_height = window.height();
        // A partially-offscreen keyboard can report more height below the
        // window than the frame actually has; trust the smaller value.
        let keyboard_height = (window_height - change.end.min_y()).min(change.end.height());
        let frame = Rect::from_origin_size(
            Point::new(
                change.end.min_x(),
                window_height - keyboard_height - accessory.height,
            ),
            accessory,
        );

        let animation = change.animation.map(|animation| match self.status {
            Status::Scrubbing { position, .. } if change.end.height() > 0.0 => {
                // The platform still sends a full-duration snap after an
                // interactive drag; scale it by how far the keyboard already
                // travelled under the finger, or the bar visibly restarts.
                let fraction = ((position - change.end.min_y()) / change.end.height()).abs();
                AnimationSpec::new(animation.duration * fraction, Curve::EaseInOut, 0.0)
            }
            _ => animation,
        });

        self.status = match self.status {
            Status::Scrubbing { .. } if keyboard_height > 0.0 => {
                Status::Visible { keyboard_height }
            }
            Status::Scrubbing { .. } => Status::Hidden,
            Status::Visible { .. } => Status::Visible { keyboard_height },
            Status::Hidden => Status::Hidden,
        };

        self.invoke(frame, true, animation.as_ref());
    }

    fn cache_height(&mut self, change: &KeyboardChange, window: Rect) {
        if let Status::Visible { .. } = self.status {
            let keyboard_height = (window.height() - change.end.min_y()).min(change.end.height());
            self.status = Status::Visible { keyboard_height };
        }
    }

    /// Emit one event: the delegate callback, then the layout guide.
    ///
    /// The guide update reprojects the emitted frame into the guide owner's
    /// space so constraint-based consumers stay in sync without the delegate
    /// doing anything.
    fn invoke(
        &mut self,
        frame: Rect,
        adjust_content_offset: bool,
        animation: Option<&AnimationSpec>,
    ) {
        self.delegate
            .update_accessory_view(frame, adjust_content_offset, animation);
        if let Some(owner_bounds) = self.host.owner_bounds() {
            let local = self.host.to_owner_space(frame);
            self.guide.set(guide::height_below(
                owner_bounds,
                local,
                self.host.bottom_safe_inset(),
            ));
        }
    }
}
