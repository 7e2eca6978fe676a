// Copyright 2026 the Gangway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ownership validation: is a keyboard change relevant to this controller?
//!
//! Many controllers can coexist against one keyboard; most changes are
//! irrelevant to any given controller and dropping them silently is the
//! expected, high-frequency path — not an error condition.

use gangway_change::KeyboardChange;

/// How a controller decides which keyboard changes concern it.
///
/// This is an explicit tagged choice made at construction, not a runtime
/// capability probe of the delegate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OwnershipMode {
    /// Only changes belonging to the controller's own element are relevant,
    /// per the kind-specific rule in [`KeyboardChange::belongs_to`].
    Strict,
    /// The delegate decides, asked about whichever element currently holds
    /// input focus anywhere in the host.
    Delegated,
}

/// Decide whether `change` is relevant.
///
/// `guard_active` is the reentrancy guard: a guarded input-view refresh
/// synchronously re-triggers the platform's own show/hide notifications, and
/// treating those echoes as relevant would loop forever.
///
/// `delegated_decision` is consulted lazily and only in
/// [`OwnershipMode::Delegated`]; it yields `None` when no element holds focus,
/// which counts as not relevant.
pub fn validate(
    change: &KeyboardChange,
    mode: OwnershipMode,
    guard_active: bool,
    owner_focused: bool,
    delegated_decision: impl FnOnce() -> Option<bool>,
) -> bool {
    if guard_active {
        return false;
    }
    match mode {
        OwnershipMode::Delegated => delegated_decision().unwrap_or(false),
        OwnershipMode::Strict => change.belongs_to(owner_focused),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gangway_change::ChangeKind;
    use kurbo::Rect;

    fn change(kind: ChangeKind) -> KeyboardChange {
        KeyboardChange {
            kind,
            begin: Rect::new(0.0, 844.0, 390.0, 1104.0),
            end: Rect::new(0.0, 584.0, 390.0, 844.0),
            animation: None,
        }
    }

    #[test]
    fn strict_mode_follows_the_ownership_rule() {
        let will_show = change(ChangeKind::WillShow);
        assert!(validate(&will_show, OwnershipMode::Strict, false, true, || {
            None
        }));
        assert!(!validate(
            &will_show,
            OwnershipMode::Strict,
            false,
            false,
            || None
        ));

        let did_hide = change(ChangeKind::DidHide);
        assert!(validate(&did_hide, OwnershipMode::Strict, false, false, || {
            None
        }));
        assert!(!validate(
            &did_hide,
            OwnershipMode::Strict,
            false,
            true,
            || None
        ));
    }

    #[test]
    fn delegated_mode_asks_the_capability() {
        let will_show = change(ChangeKind::WillShow);
        assert!(validate(
            &will_show,
            OwnershipMode::Delegated,
            false,
            false,
            || Some(true)
        ));
        assert!(!validate(
            &will_show,
            OwnershipMode::Delegated,
            false,
            true,
            || Some(false)
        ));
    }

    #[test]
    fn delegated_mode_without_a_focus_holder_is_not_relevant() {
        let will_show = change(ChangeKind::WillShow);
        assert!(!validate(
            &will_show,
            OwnershipMode::Delegated,
            false,
            true,
            || None
        ));
    }

    #[test]
    fn active_guard_rejects_everything() {
        let will_show = change(ChangeKind::WillShow);
        assert!(!validate(
            &will_show,
            OwnershipMode::Strict,
            true,
            true,
            || Some(true)
        ));
        assert!(!validate(
            &will_show,
            OwnershipMode::Delegated,
            true,
            true,
            || Some(true)
        ));
    }

    #[test]
    fn strict_mode_never_consults_the_capability() {
        let will_show = change(ChangeKind::WillShow);
        let validated = validate(&will_show, OwnershipMode::Strict, false, true, || {
            unreachable!("strict mode must not ask the delegate")
        });
        assert!(validated);
    }
}
