// Copyright 2026 the Gangway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard status: the controller's single piece of mutable state.

/// Where the keyboard is right now, as far as the controller can tell.
///
/// Exactly one state holds at any time. The controller is the only writer;
/// transitions happen only in response to classified keyboard changes or
/// drag-gesture updates, all serialized on the host's event loop.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Status {
    /// No keyboard on screen.
    Hidden,
    /// Keyboard docked, height known.
    Visible {
        /// Height of the docked keyboard, in window points.
        keyboard_height: f64,
    },
    /// The user is dragging the keyboard off-screen.
    Scrubbing {
        /// Last absolute touch y, used to derive the interrupted-animation
        /// fraction when the platform's snap animation arrives.
        position: f64,
        /// Height the keyboard had when the drag started.
        keyboard_height: f64,
    },
}

impl Status {
    /// Keyboard height, defined while the keyboard is [`Visible`] or being
    /// [`Scrubbing`]-dragged; undefined while [`Hidden`].
    ///
    /// [`Visible`]: Status::Visible
    /// [`Scrubbing`]: Status::Scrubbing
    /// [`Hidden`]: Status::Hidden
    pub fn keyboard_height(&self) -> Option<f64> {
        match *self {
            Self::Visible { keyboard_height }
            | Self::Scrubbing {
                keyboard_height, ..
            } => Some(keyboard_height),
            Self::Hidden => None,
        }
    }
}
