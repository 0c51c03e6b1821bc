use dioxus::prelude::*;
use store::Role;
use ui::guard::{decide, GuardDecision, ADMIN_ONLY, ANY_SIGNED_IN};
use ui::{use_auth, Navbar};

use crate::Route;

/// Navbar above every page.
#[component]
pub fn AppShell() -> Element {
    let nav = use_navigator();
    rsx! {
        div {
            class: "min-h-screen bg-gray-50 flex flex-col",
            Navbar {
                on_navigate: move |target| {
                    nav.push(Route::from(target));
                },
            }
            main {
                class: "flex-1",
                Outlet::<Route> {}
            }
        }
    }
}

/// Render the nested route or replace it with the guard's redirect, so the
/// protected URL does not stay in history.
fn guarded(allowed: &[Role]) -> Element {
    let auth = use_auth();
    let nav = use_navigator();
    match decide(auth().identity.as_ref(), allowed) {
        GuardDecision::Render => rsx! { Outlet::<Route> {} },
        GuardDecision::RedirectTo(to) => {
            dioxus::logger::tracing::info!("route guard redirect to {to:?}");
            nav.replace(Route::from(to));
            rsx! {}
        }
    }
}

#[component]
pub fn RequireUser() -> Element {
    guarded(ANY_SIGNED_IN)
}

#[component]
pub fn RequireAdmin() -> Element {
    guarded(ADMIN_ONLY)
}

/// Unknown paths go home.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    nav.replace(Route::Home {});
    rsx! {}
}
