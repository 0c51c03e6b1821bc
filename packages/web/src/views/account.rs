use dioxus::prelude::*;
use ui::views::{BookingsView, CatalogVariant, CatalogView, ProfileView};

use crate::Route;

#[component]
pub fn Dashboard() -> Element {
    let nav = use_navigator();
    rsx! {
        CatalogView {
            variant: CatalogVariant::Dashboard,
            on_login_required: move |_| {
                nav.push(Route::Login {});
            },
        }
    }
}

#[component]
pub fn Profile() -> Element {
    rsx! { ProfileView {} }
}

#[component]
pub fn Bookings() -> Element {
    rsx! { BookingsView {} }
}
