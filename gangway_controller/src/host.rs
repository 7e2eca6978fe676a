// Copyright 2026 the Gangway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary traits: what the host injects, and what the controller emits.

use alloc::vec::Vec;

use gangway_animation::AnimationSpec;
use gangway_notify::Notification;
use kurbo::{Rect, Size};

/// Capabilities the host integration layer injects into the controller.
///
/// `K` is the host's element handle (a responder id, a widget key, or
/// whatever small copyable handle the host uses). Every method is a
/// synchronous, non-blocking query or command on the host's event loop; the
/// controller never calls any of them off that loop.
pub trait HostEnv<K> {
    /// Window bounds in screen coordinates, or `None` while the surface is
    /// detached from any window.
    fn window_bounds(&self) -> Option<Rect>;

    /// Current size of the accessory bar.
    fn accessory_size(&self) -> Size;

    /// Whether `element` currently holds input focus.
    fn is_focused(&self, element: K) -> bool;

    /// The element currently holding input focus anywhere in the host, if any.
    ///
    /// This is the explicit replacement for a process-wide "current first
    /// responder" lookup: the host supplies the query, the controller holds
    /// no global state.
    fn current_focus(&self) -> Option<K>;

    /// Whether the scroll surface currently allows interactive dismissal.
    fn interactive_dismiss_enabled(&self) -> bool;

    /// Halt any in-flight scroll immediately.
    fn stop_scrolling(&mut self);

    /// Force the platform to rebuild the owner element's input views.
    ///
    /// Reloading input views synchronously re-triggers the platform's own
    /// keyboard show/hide notifications; the host returns those echoes so the
    /// controller can drain them under its reentrancy guard.
    fn reload_input_views(&mut self) -> Vec<Notification<'static>>;

    /// Bounds of the layout guide's owning container, or `None` when no guide
    /// owner is attached. The default is guide-less.
    fn owner_bounds(&self) -> Option<Rect> {
        None
    }

    /// Project a window-space rect into the guide owner's local space.
    fn to_owner_space(&self, rect: Rect) -> Rect {
        rect
    }

    /// Bottom safe-area inset of the scroll surface.
    fn bottom_safe_inset(&self) -> f64 {
        0.0
    }
}

/// Receiver of reconciled accessory-frame events.
///
/// This is the controller's entire outbound surface: one callback, invoked
/// zero or more times per platform notification, never batched, always on the
/// host's event loop.
pub trait AccessoryDelegate<K> {
    /// Called whenever the keyboard frame changes.
    ///
    /// `frame` is the accessory bar's target frame in window coordinates.
    /// `adjust_content_offset` indicates whether the scroll content offset
    /// should be compensated for this move (the delegate owns that policy).
    /// `animation` describes how to animate the change; `None` means apply
    /// immediately. Animated application is fire-and-forget — the controller
    /// never awaits completion.
    fn update_accessory_view(
        &mut self,
        frame: Rect,
        adjust_content_offset: bool,
        animation: Option<&AnimationSpec>,
    );

    /// Optional capability: decide whether the accessory bar should be shown
    /// for an arbitrary focus holder. Consulted only in
    /// [`OwnershipMode::Delegated`](crate::OwnershipMode::Delegated); the
    /// default declines every responder.
    fn show_accessory_view_for_responder(&self, _responder: K) -> bool {
        false
    }
}
