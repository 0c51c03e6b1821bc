use dioxus::prelude::*;
use ui::views::{AdminDashboardView, AdminHotelsView, AdminRoomsView, AdminUsersView};

use crate::Route;

#[component]
pub fn Admin() -> Element {
    let nav = use_navigator();
    rsx! {
        AdminDashboardView {
            on_navigate: move |target| {
                nav.push(Route::from(target));
            },
        }
    }
}

#[component]
pub fn AdminUsers() -> Element {
    rsx! { AdminUsersView {} }
}

#[component]
pub fn AdminHotels() -> Element {
    rsx! { AdminHotelsView {} }
}

#[component]
pub fn AdminRooms() -> Element {
    rsx! { AdminRoomsView {} }
}
