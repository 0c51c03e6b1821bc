//! Role-based access decisions for protected layouts.
//!
//! [`decide`] is a pure function of the current identity and the roles a
//! layout admits. The router layer acts on the result; nothing here navigates.

use store::{Identity, Role};

/// Roles admitted by pages any signed-in account may see.
pub const ANY_SIGNED_IN: &[Role] = &[Role::User, Role::Admin];
/// Roles admitted by administration pages.
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Redirect {
    Login,
    Home,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectTo(Redirect),
}

/// An empty `allowed` admits every signed-in role.
pub fn decide(identity: Option<&Identity>, allowed: &[Role]) -> GuardDecision {
    match identity {
        None => GuardDecision::RedirectTo(Redirect::Login),
        Some(who) if !allowed.is_empty() && !allowed.contains(&who.role) => {
            GuardDecision::RedirectTo(Redirect::Home)
        }
        Some(_) => GuardDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_role(role: Role) -> Identity {
        Identity {
            id: 1,
            name: "n".to_string(),
            email: "e@x.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_anonymous_goes_to_login() {
        for allowed in [&[][..], ANY_SIGNED_IN, ADMIN_ONLY] {
            assert_eq!(decide(None, allowed), GuardDecision::RedirectTo(Redirect::Login));
        }
    }

    #[test]
    fn test_renders_iff_role_admitted() {
        let role_sets: [&[Role]; 4] = [&[], &[Role::User], ADMIN_ONLY, ANY_SIGNED_IN];
        for allowed in role_sets {
            for role in Role::ALL {
                let who = as_role(role);
                let expected = if allowed.is_empty() || allowed.contains(&role) {
                    GuardDecision::Render
                } else {
                    GuardDecision::RedirectTo(Redirect::Home)
                };
                assert_eq!(decide(Some(&who), allowed), expected, "{role} in {allowed:?}");
            }
        }
    }

    #[test]
    fn test_user_is_bounced_from_admin_pages() {
        assert_eq!(
            decide(Some(&as_role(Role::User)), ADMIN_ONLY),
            GuardDecision::RedirectTo(Redirect::Home)
        );
        assert_eq!(decide(Some(&as_role(Role::Admin)), ANY_SIGNED_IN), GuardDecision::Render);
    }
}
