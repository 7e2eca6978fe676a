// Copyright 2026 the Gangway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gangway Controller: keyboard-state reconciliation for accessory bars.
//!
//! The platform announces keyboard movement as a stream of ambiguous
//! notifications with no guaranteed order, and an interactive drag can move
//! the keyboard without any notification at all. This crate reconstructs a
//! single consistent answer to "where is the keyboard right now" and drives
//! one delegate callback (plus a height-only [`KeyboardGuide`]) from it.
//!
//! ## Pieces
//!
//! - [`Status`] — the three-state machine core: hidden, visible, or
//!   scrubbing (mid interactive dismissal).
//! - [`OwnershipMode`] and [`relevance::validate`] — which keyboard changes
//!   concern *this* controller, given who holds input focus.
//! - [`AccessoryController`] — consumes notifications and drag updates,
//!   validates ownership, reconciles frames, and emits to the delegate.
//! - [`HostEnv`] / [`AccessoryDelegate`] — the injected boundary: every
//!   platform capability the controller needs, and the single outbound
//!   callback it produces.
//! - [`Behaviours`] — construction-time flags.
//!
//! ## Minimal example
//!
//! A host with a 390×844 window and a 56-point bar, showing a 260-point
//! keyboard:
//!
//! ```
//! use gangway_controller::{
//!     AccessoryController, AccessoryDelegate, Behaviours, HostEnv, OwnershipMode, RecognizerId,
//! };
//! use gangway_animation::AnimationSpec;
//! use gangway_notify::{keys, names, Notification, Payload, Value};
//! use kurbo::{Rect, Size};
//!
//! struct Host;
//!
//! impl HostEnv<u32> for Host {
//!     fn window_bounds(&self) -> Option<Rect> {
//!         Some(Rect::new(0.0, 0.0, 390.0, 844.0))
//!     }
//!     fn accessory_size(&self) -> Size {
//!         Size::new(390.0, 56.0)
//!     }
//!     fn is_focused(&self, element: u32) -> bool {
//!         element == 1
//!     }
//!     fn current_focus(&self) -> Option<u32> {
//!         Some(1)
//!     }
//!     fn interactive_dismiss_enabled(&self) -> bool {
//!         true
//!     }
//!     fn stop_scrolling(&mut self) {}
//!     fn reload_input_views(&mut self) -> Vec<Notification<'static>> {
//!         Vec::new()
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Bar {
//!     frame: Option<Rect>,
//! }
//!
//! impl AccessoryDelegate<u32> for Bar {
//!     fn update_accessory_view(
//!         &mut self,
//!         frame: Rect,
//!         _adjust_content_offset: bool,
//!         _animation: Option<&AnimationSpec>,
//!     ) {
//!         self.frame = Some(frame);
//!     }
//! }
//!
//! let mut controller = AccessoryController::new(
//!     Host,
//!     Bar::default(),
//!     1,
//!     OwnershipMode::Strict,
//!     Behaviours::empty(),
//!     RecognizerId(1),
//! );
//!
//! controller.handle_notification(&Notification {
//!     name: names::WILL_SHOW,
//!     payload: Payload::new()
//!         .with(keys::FRAME_BEGIN, Value::Rect(Rect::new(0.0, 844.0, 390.0, 1104.0)))
//!         .with(keys::FRAME_END, Value::Rect(Rect::new(0.0, 584.0, 390.0, 844.0)))
//!         .with(keys::ANIMATION_CURVE, Value::Number(7.0))
//!         .with(keys::ANIMATION_DURATION, Value::Number(0.25)),
//! });
//!
//! // The bar lands directly above the keyboard's top edge.
//! assert_eq!(
//!     controller.delegate().frame,
//!     Some(Rect::new(0.0, 528.0, 390.0, 584.0))
//! );
//! ```
//!
//! ## Concurrency
//!
//! Everything is single-threaded and synchronous: notification delivery,
//! gesture callbacks, and bounds observations are all serialized by the
//! host's event loop, and no entry point blocks or suspends. The one
//! deliberate reentrancy — refreshing input views re-triggers the platform's
//! own notifications — is drained under an explicit guard flag.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod behaviours;
pub mod controller;
pub mod gesture;
pub mod guide;
pub mod host;
pub mod relevance;
pub mod status;

pub use behaviours::Behaviours;
pub use controller::{AccessoryController, BOUND_NOTIFICATIONS};
pub use gesture::{PointerPhase, RecognizerId};
pub use guide::KeyboardGuide;
pub use host::{AccessoryDelegate, HostEnv};
pub use relevance::OwnershipMode;
pub use status::Status;
