//! Top navigation bar. Which links appear depends on the signed-in role.

use dioxus::prelude::*;
use store::{Identity, Role};

use crate::auth::{sign_out, use_auth};
use crate::client::use_api;
use crate::icons::FaHotel;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Destinations the shared views can ask the platform router for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavTarget {
    Home,
    Search,
    Dashboard,
    Bookings,
    Profile,
    Admin,
    AdminUsers,
    AdminHotels,
    AdminRooms,
    Login,
    Register,
    LoggedOut,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: NavTarget,
}

const fn link(label: &'static str, target: NavTarget) -> NavLink {
    NavLink { label, target }
}

/// Links in display order. Everyone gets Home and Explore Hotels.
pub fn nav_links(identity: Option<&Identity>) -> Vec<NavLink> {
    let mut links = vec![
        link("Home", NavTarget::Home),
        link("Explore Hotels", NavTarget::Search),
    ];
    match identity.map(|i| i.role) {
        Some(Role::User) => {
            links.push(link("My Bookings", NavTarget::Bookings));
            links.push(link("Profile", NavTarget::Profile));
        }
        Some(Role::Admin) => {
            links.push(link("Dashboard", NavTarget::Admin));
            links.push(link("Users", NavTarget::AdminUsers));
            links.push(link("Hotels", NavTarget::AdminHotels));
            links.push(link("Rooms", NavTarget::AdminRooms));
        }
        None => {}
    }
    links
}

#[component]
pub fn Navbar(on_navigate: EventHandler<NavTarget>) -> Element {
    let api = use_api();
    let auth = use_auth();
    let identity = auth().identity;
    let links = nav_links(identity.as_ref());

    let handle_logout = move |_| {
        sign_out(&api, auth);
        on_navigate.call(NavTarget::LoggedOut);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        nav {
            class: "navbar bg-white shadow-md sticky top-0",
            style: "z-index: 1000",
            div {
                class: "max-w-7xl mx-auto px-4 flex justify-between items-center h-16",
                button {
                    class: "flex items-center gap-2 text-2xl font-bold text-blue-600",
                    onclick: move |_| on_navigate.call(NavTarget::Home),
                    Icon { icon: FaHotel, width: 22, height: 22 }
                    "Luxury Stay"
                }
                div {
                    class: "flex items-center gap-6",
                    for l in links {
                        button {
                            key: "{l.label}",
                            class: "navbar-link",
                            onclick: move |_| on_navigate.call(l.target),
                            "{l.label}"
                        }
                    }
                }
                div {
                    class: "flex items-center gap-3",
                    if let Some(who) = identity {
                        span { class: "text-gray-700 font-medium", "Hello, {who.name}" }
                        button {
                            class: "px-4 py-2 bg-red-500 text-white rounded-lg hover:bg-red-600",
                            onclick: handle_logout,
                            "Logout"
                        }
                    } else {
                        button {
                            class: "navbar-link",
                            onclick: move |_| on_navigate.call(NavTarget::Login),
                            "Login"
                        }
                        button {
                            class: "px-4 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700",
                            onclick: move |_| on_navigate.call(NavTarget::Register),
                            "Register"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn who(role: Role) -> Identity {
        Identity {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            role,
        }
    }

    fn targets(identity: Option<&Identity>) -> Vec<NavTarget> {
        nav_links(identity).into_iter().map(|l| l.target).collect()
    }

    #[test]
    fn test_signed_out_sees_public_links_only() {
        assert_eq!(targets(None), vec![NavTarget::Home, NavTarget::Search]);
    }

    #[test]
    fn test_user_links() {
        let links = nav_links(Some(&who(Role::User)));
        let labels: Vec<_> = links.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Home", "Explore Hotels", "My Bookings", "Profile"]);
    }

    #[test]
    fn test_admin_links_exclude_guest_pages() {
        let t = targets(Some(&who(Role::Admin)));
        assert!(t.contains(&NavTarget::AdminHotels));
        assert!(t.contains(&NavTarget::AdminRooms));
        assert!(!t.contains(&NavTarget::Bookings));
        assert_eq!(t.len(), 6);
    }
}
