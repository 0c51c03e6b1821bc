use dioxus::prelude::*;

use crate::client::use_api;
use crate::config::use_config;
use crate::icons::{FaBed, FaHotel, FaUsers};
use crate::navbar::NavTarget;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Overview {
    users: Option<usize>,
    hotels: Option<usize>,
}

/// Landing page for administrators with entry points into each manager.
#[component]
pub fn AdminDashboardView(on_navigate: EventHandler<NavTarget>) -> Element {
    let api = use_api();
    let list_size = use_config().paging.admin_hotel_list_size;

    let overview = use_resource(move || {
        let api = api.clone();
        async move {
            let users = match api.users().await {
                Ok(users) => Some(users.len()),
                Err(e) => {
                    tracing::warn!("dashboard user count unavailable: {e}");
                    None
                }
            };
            let hotels = match api.all_hotels(list_size).await {
                Ok(hotels) => Some(hotels.len()),
                Err(e) => {
                    tracing::warn!("dashboard hotel count unavailable: {e}");
                    None
                }
            };
            Overview { users, hotels }
        }
    });
    let counts = overview.cloned().unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            h1 { class: "view-title", "Admin Dashboard" }
            p { class: "view-subtitle", "Quick Overview" }
            div {
                class: "grid md:grid-cols-3 gap-6",
                Tile {
                    title: "Users",
                    count: counts.users,
                    hint: "Review registered accounts",
                    on_open: move |_| on_navigate.call(NavTarget::AdminUsers),
                    Icon { icon: FaUsers, width: 28, height: 28 }
                }
                Tile {
                    title: "Hotels",
                    count: counts.hotels,
                    hint: "Add, seed and remove hotels",
                    on_open: move |_| on_navigate.call(NavTarget::AdminHotels),
                    Icon { icon: FaHotel, width: 28, height: 28 }
                }
                Tile {
                    title: "Rooms",
                    count: None,
                    hint: "Manage rooms per hotel",
                    on_open: move |_| on_navigate.call(NavTarget::AdminRooms),
                    Icon { icon: FaBed, width: 28, height: 28 }
                }
            }
        }
    }
}

#[component]
fn Tile(
    title: &'static str,
    count: Option<usize>,
    hint: &'static str,
    on_open: EventHandler<()>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "view-card text-left hover:shadow-2xl transition",
            onclick: move |_| on_open.call(()),
            div { class: "text-blue-600 mb-4", {children} }
            h2 { class: "text-xl font-semibold text-gray-900", "{title}" }
            if let Some(n) = count {
                p { class: "text-3xl font-bold text-gray-900 mt-1", "{n}" }
            }
            p { class: "text-gray-500 mt-2", "{hint}" }
        }
    }
}
