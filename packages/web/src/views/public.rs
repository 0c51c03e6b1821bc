use dioxus::prelude::*;
use ui::views::{CatalogVariant, CatalogView, HomeView, LoggedOutView, LoginView, RegisterView};

use crate::Route;

#[component]
pub fn Home() -> Element {
    let nav = use_navigator();
    rsx! {
        HomeView {
            on_explore: move |_| {
                nav.push(Route::Search {});
            },
            on_sign_in: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn Search() -> Element {
    let nav = use_navigator();
    rsx! {
        CatalogView {
            variant: CatalogVariant::Search,
            on_login_required: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn Login() -> Element {
    let nav = use_navigator();
    rsx! {
        LoginView {
            on_success: move |_| {
                nav.push(Route::Home {});
            },
            on_register: move |_| {
                nav.push(Route::Register {});
            },
        }
    }
}

#[component]
pub fn Register() -> Element {
    let nav = use_navigator();
    rsx! {
        RegisterView {
            on_success: move |_| {
                nav.push(Route::Login {});
            },
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn LoggedOut() -> Element {
    let nav = use_navigator();
    rsx! {
        LoggedOutView {
            on_login: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}
