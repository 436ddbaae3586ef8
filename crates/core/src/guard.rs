//! The admin-gate state machine.
//!
//! Every admin route decides between four renders from the same input tuple:
//! is role resolution still loading, is anyone signed in, and does the
//! signed-in identity hold the admin role. The decision is pure so the admin
//! panel, the login mirror-gate, and the tests all share one source of truth.
//!
//! `AccessDenied` deliberately does not redirect: the login page redirects
//! authenticated admins forward, so bouncing a signed-in non-admin back to
//! login would loop forever.

use serde::Serialize;

/// What an admin route should render for the current `(identity, role)` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GateDecision {
    /// Role resolution is outstanding; render a neutral loading state and
    /// make no redirect decision yet.
    Loading,
    /// Nobody is signed in; redirect to the login route, render nothing.
    RedirectToLogin,
    /// Signed in but not an admin; render a static denial, never redirect.
    AccessDenied,
    /// Signed-in admin; render the panel.
    Authorized,
}

/// What the login page should render for the same tuple (the mirror gate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoginDecision {
    /// Still resolving; hold the form.
    Loading,
    /// Show the login form.
    ShowLogin,
    /// Already an authenticated admin; redirect forward to the dashboard.
    RedirectToDashboard,
}

/// Decide the render for an admin route.
///
/// Exactly one decision is produced for every input combination, and
/// protected content is never rendered while `is_loading` holds.
#[must_use]
pub const fn admin_gate(identity_present: bool, is_admin: bool, is_loading: bool) -> GateDecision {
    if is_loading {
        GateDecision::Loading
    } else if !identity_present {
        GateDecision::RedirectToLogin
    } else if is_admin {
        GateDecision::Authorized
    } else {
        GateDecision::AccessDenied
    }
}

/// Decide the render for the login page.
#[must_use]
pub const fn login_gate(identity_present: bool, is_admin: bool, is_loading: bool) -> LoginDecision {
    if is_loading {
        LoginDecision::Loading
    } else if identity_present && is_admin {
        LoginDecision::RedirectToDashboard
    } else {
        LoginDecision::ShowLogin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_tuple_produces_exactly_one_decision() {
        for identity_present in [false, true] {
            for is_admin in [false, true] {
                for is_loading in [false, true] {
                    let decision = admin_gate(identity_present, is_admin, is_loading);
                    let expected = if is_loading {
                        GateDecision::Loading
                    } else if !identity_present {
                        GateDecision::RedirectToLogin
                    } else if is_admin {
                        GateDecision::Authorized
                    } else {
                        GateDecision::AccessDenied
                    };
                    assert_eq!(decision, expected);
                }
            }
        }
    }

    #[test]
    fn test_never_authorized_while_loading() {
        for identity_present in [false, true] {
            for is_admin in [false, true] {
                assert_eq!(
                    admin_gate(identity_present, is_admin, true),
                    GateDecision::Loading
                );
            }
        }
    }

    #[test]
    fn test_access_denied_never_redirects() {
        // Regression for the login/panel redirect loop: a signed-in
        // non-admin re-evaluating the gate any number of times must never
        // see a redirect decision.
        for _ in 0..10 {
            let decision = admin_gate(true, false, false);
            assert_eq!(decision, GateDecision::AccessDenied);
            assert_ne!(decision, GateDecision::RedirectToLogin);
        }
    }

    #[test]
    fn test_login_mirror_gate() {
        assert_eq!(login_gate(true, true, false), LoginDecision::RedirectToDashboard);
        assert_eq!(login_gate(true, false, false), LoginDecision::ShowLogin);
        assert_eq!(login_gate(false, false, false), LoginDecision::ShowLogin);
        assert_eq!(login_gate(true, true, true), LoginDecision::Loading);
    }
}
