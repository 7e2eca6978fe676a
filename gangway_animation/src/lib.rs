// Copyright 2026 the Gangway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gangway Animation: transition descriptors for keyboard movement.
//!
//! An [`AnimationSpec`] is an immutable value describing how a keyboard
//! transition should be animated, parsed from a notification payload via
//! [`AnimationSpec::from_payload`]. Parsing normalizes the platform's quirks:
//!
//! - A reported duration of zero is replaced with [`FALLBACK_DURATION`], so a
//!   parsed duration is always greater than zero (an instantaneous snap is
//!   jarring next to an animated keyboard).
//! - The raw curve code maps onto [`Curve`]; the keyboard is known to report
//!   undocumented codes, which fall back to [`Curve::EaseInOut`].
//!
//! [`AnimationSpec::new`] synthesizes a *derived* descriptor, used when an
//! interactive dismissal interrupts a platform animation and its duration must
//! be rescaled.
//!
//! ```
//! use gangway_animation::{AnimationSpec, Curve};
//! use gangway_notify::{keys, Payload, Value};
//!
//! let payload = Payload::new()
//!     .with(keys::ANIMATION_CURVE, Value::Number(7.0))
//!     .with(keys::ANIMATION_DURATION, Value::Number(0.0));
//! let spec = AnimationSpec::from_payload(&payload).unwrap();
//!
//! assert_eq!(spec.duration, 0.1);
//! assert_eq!(spec.curve, Curve::EaseInOut);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use gangway_notify::{Payload, keys};

/// Duration substituted when the platform reports a zero (or negative) one.
pub const FALLBACK_DURATION: f64 = 0.1;

/// Animation timing curve.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Curve {
    /// Slow start and end. The platform default for keyboard transitions and
    /// the fallback for unrecognized codes.
    #[default]
    EaseInOut,
    /// Slow start.
    EaseIn,
    /// Slow end.
    EaseOut,
    /// Constant speed.
    Linear,
}

impl Curve {
    /// Map the platform's raw integer curve code onto a curve.
    ///
    /// Codes `0..=3` are documented; everything else (the keyboard reports an
    /// undocumented `7`) falls back to [`Curve::EaseInOut`].
    pub fn from_raw(code: i64) -> Self {
        match code {
            0 => Self::EaseInOut,
            1 => Self::EaseIn,
            2 => Self::EaseOut,
            3 => Self::Linear,
            _ => Self::EaseInOut,
        }
    }
}

/// Immutable description of a keyboard transition's timing.
///
/// Constructed fresh per notification; no identity beyond value equality.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnimationSpec {
    /// Seconds. Always greater than zero when parsed from a payload.
    pub duration: f64,
    /// Timing curve.
    pub curve: Curve,
    /// Seconds before the transition starts. Zero unless derived.
    pub delay: f64,
}

impl AnimationSpec {
    /// Synthesize a derived descriptor directly.
    pub fn new(duration: f64, curve: Curve, delay: f64) -> Self {
        Self {
            duration,
            curve,
            delay,
        }
    }

    /// Parse a descriptor from a notification payload.
    ///
    /// Requires both the curve code and the duration; returns `None` if either
    /// is missing or not numeric. Never panics.
    pub fn from_payload(payload: &Payload) -> Option<Self> {
        let duration = payload.number(keys::ANIMATION_DURATION)?;
        #[expect(
            clippy::cast_possible_truncation,
            reason = "curve codes are small integers; fractional codes are already unrecognized"
        )]
        let code = payload.number(keys::ANIMATION_CURVE)? as i64;
        Some(Self {
            duration: if duration <= 0.0 {
                FALLBACK_DURATION
            } else {
                duration
            },
            curve: Curve::from_raw(code),
            delay: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gangway_notify::Value;

    fn payload(curve: f64, duration: f64) -> Payload {
        Payload::new()
            .with(keys::ANIMATION_CURVE, Value::Number(curve))
            .with(keys::ANIMATION_DURATION, Value::Number(duration))
    }

    #[test]
    fn zero_duration_is_clamped_to_fallback() {
        let spec = AnimationSpec::from_payload(&payload(7.0, 0.0)).unwrap();
        assert_eq!(spec.duration, FALLBACK_DURATION);
    }

    #[test]
    fn nonzero_duration_passes_through() {
        let spec = AnimationSpec::from_payload(&payload(7.0, 0.3)).unwrap();
        assert_eq!(spec.duration, 0.3);
    }

    #[test]
    fn parsed_delay_is_zero() {
        let spec = AnimationSpec::from_payload(&payload(0.0, 0.25)).unwrap();
        assert_eq!(spec.delay, 0.0);
    }

    #[test]
    fn documented_curve_codes_map_exactly() {
        assert_eq!(Curve::from_raw(0), Curve::EaseInOut);
        assert_eq!(Curve::from_raw(1), Curve::EaseIn);
        assert_eq!(Curve::from_raw(2), Curve::EaseOut);
        assert_eq!(Curve::from_raw(3), Curve::Linear);
    }

    #[test]
    fn unrecognized_curve_codes_fall_back_to_ease() {
        assert_eq!(Curve::from_raw(7), Curve::EaseInOut);
        assert_eq!(Curve::from_raw(-1), Curve::EaseInOut);
        assert_eq!(Curve::from_raw(i64::MAX), Curve::EaseInOut);
    }

    #[test]
    fn missing_fields_yield_none() {
        let missing_duration = Payload::new().with(keys::ANIMATION_CURVE, Value::Number(7.0));
        assert_eq!(AnimationSpec::from_payload(&missing_duration), None);

        let missing_curve = Payload::new().with(keys::ANIMATION_DURATION, Value::Number(0.25));
        assert_eq!(AnimationSpec::from_payload(&missing_curve), None);

        assert_eq!(AnimationSpec::from_payload(&Payload::new()), None);
    }
}
