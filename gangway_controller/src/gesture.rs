// Copyright 2026 the Gangway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-gesture bridge types.
//!
//! The host forwards its continuous pan gesture to the controller as a stream
//! of ([`PointerPhase`], absolute position) updates; see
//! [`AccessoryController::on_pointer`](crate::AccessoryController::on_pointer).

/// Phase of a continuous pointer drag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// The drag was recognized.
    Began,
    /// The pointer moved.
    Changed,
    /// The pointer lifted.
    Ended,
    /// The host cancelled the gesture.
    Cancelled,
}

/// Identity of a host gesture recognizer.
///
/// The drag bridge intercepts single-finger pans on the scroll surface that
/// would otherwise also scroll content, so the controller recognizes
/// simultaneously with exactly its own pan recognizer and denies everything
/// else; see
/// [`AccessoryController::should_recognize_simultaneously`](crate::AccessoryController::should_recognize_simultaneously).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecognizerId(pub u64);
