//! Hotel listing with in-page search, sort and pagination.
//!
//! | Variant | Route | Sort | Refresh |
//! |---------|-------|------|---------|
//! | [`CatalogVariant::Search`] | `/search` | yes | no |
//! | [`CatalogVariant::Dashboard`] | `/dashboard` | no | yes |
//!
//! Both hold exactly one server page at a time. Search and sort run over that
//! page through [`crate::catalog::refine`].

use api::Page;
use dioxus::prelude::*;
use store::Hotel;

use crate::catalog::{image_src, rating_label, refine, SortOrder};
use crate::client::use_api;
use crate::components::{use_toast, Button, ButtonVariant, Input, Pagination};
use crate::config::use_config;
use crate::icons::{FaLocationDot, FaMagnifyingGlass};
use crate::views::RoomBookingModal;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CatalogVariant {
    #[default]
    Search,
    Dashboard,
}

impl CatalogVariant {
    fn title(&self) -> &'static str {
        match self {
            CatalogVariant::Search => "Search Hotels",
            CatalogVariant::Dashboard => "Find your next stay",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            CatalogVariant::Search => "Search hotels...",
            CatalogVariant::Dashboard => "Search hotels in this page...",
        }
    }

    fn action_label(&self) -> &'static str {
        match self {
            CatalogVariant::Search => "View Details & Book",
            CatalogVariant::Dashboard => "Select Rooms",
        }
    }
}

#[component]
pub fn CatalogView(
    #[props(default)] variant: CatalogVariant,
    on_login_required: EventHandler<()>,
) -> Element {
    let api = use_api();
    let toasts = use_toast();
    let page_size = use_config().paging.hotel_page_size;
    let mut page = use_signal(|| 0u32);
    let mut term = use_signal(String::new);
    let mut order = use_signal(SortOrder::default);
    let mut booking_for = use_signal(|| Option::<Hotel>::None);

    let mut hotels = use_resource(move || {
        let api = api.clone();
        let current = page();
        async move {
            match api.hotels_page(current, page_size).await {
                Ok(p) => p,
                Err(e) => {
                    tracing::error!("failed to load hotels page {current}: {e}");
                    toasts.error("Failed to load hotels");
                    Page::default()
                }
            }
        }
    });

    let loaded = hotels.cloned();
    let visible = loaded
        .as_ref()
        .map(|p| refine(&p.content, &term(), order()))
        .unwrap_or_default();
    let total_pages = loaded.as_ref().map(|p| p.total_pages).unwrap_or(0);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "flex flex-wrap justify-between items-end gap-4 mb-8",
                div {
                    h1 { class: "view-title", "{variant.title()}" }
                    if variant == CatalogVariant::Search {
                        p { class: "view-subtitle mb-0", "Find and book your next stay quickly." }
                    }
                }
                div {
                    class: "flex flex-wrap gap-3 items-center",
                    div {
                        class: "relative",
                        span {
                            class: "absolute left-3 top-3 text-gray-400",
                            Icon { icon: FaMagnifyingGlass, width: 14, height: 14 }
                        }
                        Input {
                            class: "pl-9 w-72",
                            placeholder: "{variant.placeholder()}",
                            value: term(),
                            oninput: move |evt: FormEvent| term.set(evt.value()),
                        }
                    }
                    if variant == CatalogVariant::Search {
                        select {
                            class: "px-3 py-2 border border-gray-300 rounded-lg",
                            value: order().key(),
                            onchange: move |evt: FormEvent| order.set(SortOrder::from_key(&evt.value())),
                            for o in SortOrder::ALL {
                                option { key: "{o.key()}", value: o.key(), "{o.label()}" }
                            }
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| hotels.restart(),
                            "Refresh"
                        }
                    }
                }
            }

            match loaded {
                None => rsx! { p { class: "view-empty", "Loading hotels..." } },
                Some(_) if visible.is_empty() => rsx! {
                    EmptyCatalog {
                        variant,
                        term: term(),
                        on_clear: move |_| term.set(String::new()),
                    }
                },
                Some(_) => rsx! {
                    div {
                        class: "grid sm:grid-cols-2 lg:grid-cols-3 gap-8",
                        for hotel in visible {
                            HotelCard {
                                key: "{hotel.id}",
                                action_label: variant.action_label(),
                                on_select: move |h| booking_for.set(Some(h)),
                                hotel: hotel.clone(),
                            }
                        }
                    }
                },
            }

            Pagination {
                page: page(),
                total_pages,
                on_change: move |p| page.set(p),
            }
        }

        if let Some(hotel) = booking_for() {
            RoomBookingModal {
                hotel,
                on_close: move |_| booking_for.set(None),
                on_login_required: move |_| {
                    booking_for.set(None);
                    on_login_required.call(());
                },
            }
        }
    }
}

#[component]
fn EmptyCatalog(variant: CatalogVariant, term: String, on_clear: EventHandler<()>) -> Element {
    if variant == CatalogVariant::Search || term.trim().is_empty() {
        return rsx! {
            p { class: "view-empty", "No hotels found matching your search." }
        };
    }
    rsx! {
        div {
            class: "view-empty",
            p { "No hotels found matching \"{term}\" on this page." }
            Button {
                variant: ButtonVariant::Ghost,
                class: "mt-2",
                onclick: move |_| on_clear.call(()),
                "Clear search"
            }
        }
    }
}

#[component]
fn HotelCard(hotel: Hotel, action_label: &'static str, on_select: EventHandler<Hotel>) -> Element {
    let image = image_src(&hotel).to_string();
    let rating = rating_label(hotel.rating);
    let tag = hotel.primary_tag().map(str::to_string);
    let description = hotel.description.clone().unwrap_or_default();
    let selected = hotel.clone();

    rsx! {
        div {
            class: "bg-white rounded-2xl shadow-lg overflow-hidden hover:shadow-2xl transition flex flex-col",
            div {
                class: "relative h-48",
                img { class: "w-full h-full object-cover", src: "{image}", alt: "{hotel.name}" }
                if let Some(rating) = rating {
                    span {
                        class: "absolute top-3 right-3 bg-white/90 px-2 py-1 rounded-full text-sm font-semibold text-yellow-600",
                        "{rating}"
                    }
                }
            }
            div {
                class: "p-5 flex flex-col flex-1",
                h3 { class: "text-xl font-bold text-gray-900", "{hotel.name}" }
                p {
                    class: "text-gray-600 flex items-center gap-1 mt-1",
                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                    "{hotel.location}"
                }
                if let Some(tag) = tag {
                    span { class: "badge bg-blue-50 text-blue-700 mt-2 self-start", "{tag}" }
                }
                p { class: "text-gray-500 text-sm mt-3 flex-1 line-clamp-3", "{description}" }
                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full mt-4",
                    onclick: move |_| on_select.call(selected.clone()),
                    "{action_label}"
                }
            }
        }
    }
}
