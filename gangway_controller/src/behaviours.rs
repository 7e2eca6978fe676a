// Copyright 2026 the Gangway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time behaviour flags.

bitflags::bitflags! {
    /// Behaviour flags fixed at controller construction.
    ///
    /// Which flags you enable depends on how the surrounding interface is set
    /// up; the set is immutable for the controller's lifetime.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Behaviours: u8 {
        /// Compensate the scroll content offset while the keyboard is being
        /// interactively dismissed. Usually only needed for inverted scroll
        /// views, where the scroll view is resized to make room for the
        /// keyboard. The controller never mutates content offset itself; the
        /// flag is carried for the delegate, which owns that policy.
        const ADJUST_CONTENT_OFFSET = 0b0000_0001;
    }
}
