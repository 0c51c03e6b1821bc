//! Hotel administration: create with rooms, list, delete, seed demo data.

use api::ApiError;
use dioxus::prelude::*;
use store::{Hotel, RoomType};

use crate::catalog::rating_label;
use crate::client::use_api;
use crate::components::{use_toast, Button, ButtonVariant, ConfirmDialog, Input, Label, Toasts};
use crate::config::use_config;
use crate::hotel_form::HotelForm;
use crate::icons::FaPlus;
use crate::mutations::{self, Decision, Outcome};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

fn delete_warning(name: &str) -> String {
    format!(
        "Are you sure you want to delete \"{name}\"? This will also delete all associated rooms and bookings. This action cannot be undone!"
    )
}

fn list_or_empty(result: Result<Vec<Hotel>, ApiError>, toasts: Toasts) -> Vec<Hotel> {
    match result {
        Ok(hotels) => hotels,
        Err(e) => {
            tracing::error!("failed to load hotels: {e}");
            toasts.error("Failed to load hotels");
            Vec::new()
        }
    }
}

#[component]
pub fn AdminHotelsView() -> Element {
    let api = use_api();
    let toasts = use_toast();
    let list_size = use_config().paging.admin_hotel_list_size;
    let mut form = use_signal(HotelForm::default);
    let mut saving = use_signal(|| false);
    let mut seeding = use_signal(|| false);
    let mut deleting = use_signal(|| Option::<Hotel>::None);
    let mut hotels = use_signal(|| Option::<Vec<Hotel>>::None);

    let list_api = api.clone();
    let _loader = use_resource(move || {
        let api = list_api.clone();
        async move {
            let loaded = api.all_hotels(list_size).await;
            hotels.set(Some(list_or_empty(loaded, toasts)));
        }
    });

    let save_api = api.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        let request = match form.read().validate() {
            Ok(request) => request,
            Err(e) => {
                toasts.error(format!("Failed to add hotel: {e}"));
                return;
            }
        };
        let api = save_api.clone();
        spawn(async move {
            saving.set(true);
            match mutations::create_hotel(&api, &request, list_size).await {
                Outcome::Applied(refetched) => {
                    tracing::info!("created hotel {} with {} rooms", request.name, request.rooms.len());
                    toasts.success("Hotel Added Successfully with Rooms!");
                    form.set(HotelForm::default());
                    hotels.set(Some(list_or_empty(refetched, toasts)));
                }
                Outcome::Rejected(e) => {
                    tracing::error!("create hotel {} failed: {e}", request.name);
                    toasts.error(format!("Failed to add hotel: {}", e.user_message(&e.to_string())));
                }
                Outcome::Declined => {}
            }
            saving.set(false);
        });
    };

    let seed_api = api.clone();
    let handle_seed = move |_| {
        if seeding() {
            return;
        }
        let api = seed_api.clone();
        spawn(async move {
            seeding.set(true);
            let seeded = mutations::seed_demo_data(&api, list_size).await;
            match seeded.created {
                Ok(count) => {
                    tracing::info!("seeded {count} demo hotels");
                    toasts.success("Demo data generated!");
                }
                Err(e) => {
                    tracing::error!("seeding demo data failed: {e}");
                    toasts.error("Seed failed. Ensure you are an Admin.");
                }
            }
            hotels.set(Some(list_or_empty(seeded.hotels, toasts)));
            seeding.set(false);
        });
    };

    let decide_delete = use_callback(move |(hotel_id, decision): (i64, Decision)| {
        deleting.set(None);
        let api = api.clone();
        spawn(async move {
            match mutations::delete_hotel(&api, hotel_id, decision, list_size).await {
                Outcome::Declined => {}
                Outcome::Rejected(e) => {
                    tracing::error!("delete hotel {hotel_id} failed: {e}");
                    toasts.error(format!(
                        "Failed to delete hotel: {}",
                        e.user_message("Hotel may have active bookings")
                    ));
                }
                Outcome::Applied(refetched) => {
                    tracing::info!("deleted hotel {hotel_id}");
                    toasts.success("Hotel deleted successfully!");
                    hotels.set(Some(list_or_empty(refetched, toasts)));
                }
            }
        });
    });

    let draft = form();
    let can_remove = draft.can_remove_rooms();
    let loaded = hotels();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            div {
                class: "flex justify-between items-center mb-8",
                h1 { class: "view-title mb-0", "Manage Hotels" }
                Button {
                    variant: ButtonVariant::Secondary,
                    disabled: seeding(),
                    onclick: handle_seed,
                    if seeding() { "Generating..." } else { "Seed Demo Data" }
                }
            }

            form {
                class: "view-card mb-10",
                onsubmit: handle_save,
                h2 { class: "view-section-title", "Add New Hotel" }
                div {
                    class: "grid md:grid-cols-2 gap-4",
                    div {
                        Label { html_for: "hotel-name", "Hotel Name *" }
                        Input {
                            id: "hotel-name",
                            class: "w-full",
                            required: true,
                            value: draft.name.clone(),
                            oninput: move |evt: FormEvent| { form.write().name = evt.value(); },
                        }
                    }
                    div {
                        Label { html_for: "hotel-location", "Location" }
                        Input {
                            id: "hotel-location",
                            class: "w-full",
                            value: draft.location.clone(),
                            oninput: move |evt: FormEvent| { form.write().location = evt.value(); },
                        }
                    }
                    div {
                        class: "md:col-span-2",
                        Label { html_for: "hotel-description", "Description" }
                        textarea {
                            id: "hotel-description",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                            rows: 3,
                            value: draft.description.clone(),
                            oninput: move |evt: FormEvent| { form.write().description = evt.value(); },
                        }
                    }
                    div {
                        Label { html_for: "hotel-rating", "Rating" }
                        Input {
                            id: "hotel-rating",
                            class: "w-full",
                            r#type: "number",
                            min: "0",
                            max: "5",
                            step: "0.1",
                            value: draft.rating.clone(),
                            oninput: move |evt: FormEvent| { form.write().rating = evt.value(); },
                        }
                    }
                    div {
                        Label { html_for: "hotel-tags", "Tags (comma-separated)" }
                        Input {
                            id: "hotel-tags",
                            class: "w-full",
                            placeholder: "Beach, Luxury, Spa",
                            value: draft.tags.clone(),
                            oninput: move |evt: FormEvent| { form.write().tags = evt.value(); },
                        }
                    }
                    div {
                        class: "md:col-span-2",
                        Label { html_for: "hotel-image", "Image URL" }
                        Input {
                            id: "hotel-image",
                            class: "w-full",
                            r#type: "url",
                            value: draft.image_url.clone(),
                            oninput: move |evt: FormEvent| { form.write().image_url = evt.value(); },
                        }
                    }
                }

                div {
                    class: "mt-8",
                    div {
                        class: "flex justify-between items-center mb-4",
                        h3 { class: "text-lg font-semibold", "Rooms" }
                        Button {
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| form.write().add_room(),
                            span {
                                class: "flex items-center gap-1",
                                Icon { icon: FaPlus, width: 12, height: 12 }
                                "Add Room"
                            }
                        }
                    }
                    for (index, room) in draft.rooms.iter().cloned().enumerate() {
                        div {
                            key: "{index}",
                            class: "border border-gray-200 rounded-lg p-4 mb-3",
                            div {
                                class: "flex justify-between items-center mb-3",
                                span { class: "font-medium", "Room {index + 1}" }
                                if can_remove {
                                    Button {
                                        variant: ButtonVariant::Ghost,
                                        class: "text-red-600",
                                        onclick: move |_| form.write().remove_room(index),
                                        "Remove"
                                    }
                                }
                            }
                            div {
                                class: "grid md:grid-cols-3 gap-3",
                                div {
                                    Label { html_for: "room-number-{index}", "Room Number" }
                                    Input {
                                        id: "room-number-{index}",
                                        class: "w-full",
                                        value: room.room_number.clone(),
                                        oninput: move |evt: FormEvent| { form.write().rooms[index].room_number = evt.value(); },
                                    }
                                }
                                div {
                                    Label { html_for: "room-type-{index}", "Room Type" }
                                    select {
                                        id: "room-type-{index}",
                                        class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                                        value: room.room_type.as_str(),
                                        onchange: move |evt: FormEvent| {
                                            if let Ok(kind) = evt.value().parse::<RoomType>() {
                                                form.write().rooms[index].room_type = kind;
                                            }
                                        },
                                        for kind in RoomType::ALL {
                                            option { key: "{kind.as_str()}", value: kind.as_str(), "{kind.label()}" }
                                        }
                                    }
                                }
                                div {
                                    Label { html_for: "room-price-{index}", "Price per Night ($)" }
                                    Input {
                                        id: "room-price-{index}",
                                        class: "w-full",
                                        r#type: "number",
                                        min: "0",
                                        step: "0.01",
                                        value: room.price.clone(),
                                        oninput: move |evt: FormEvent| { form.write().rooms[index].price = evt.value(); },
                                    }
                                }
                            }
                        }
                    }
                }

                Button {
                    variant: ButtonVariant::Primary,
                    class: "w-full mt-4",
                    r#type: "submit",
                    disabled: saving(),
                    if saving() { "Saving..." } else { "Save Hotel with Rooms" }
                }
            }

            div {
                class: "view-card overflow-x-auto",
                h2 { class: "view-section-title", "Existing Hotels" }
                match loaded {
                    None => rsx! { p { class: "view-empty", "Loading hotels..." } },
                    Some(list) if list.is_empty() => rsx! {
                        p { class: "view-empty", "No hotels added yet. Add your first hotel above!" }
                    },
                    Some(list) => rsx! {
                        table {
                            class: "view-table",
                            thead {
                                tr {
                                    th { "Hotel Name" }
                                    th { "Location" }
                                    th { "Rating" }
                                    th { "Description" }
                                    th { "Actions" }
                                }
                            }
                            tbody {
                                for hotel in list {
                                    HotelRow {
                                        key: "{hotel.id}",
                                        on_delete: move |h| deleting.set(Some(h)),
                                        hotel: hotel.clone(),
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }

        if let Some(hotel) = deleting() {
            ConfirmDialog {
                key: "{hotel.id}",
                title: "Delete Hotel?",
                message: delete_warning(&hotel.name),
                confirm_label: "Delete",
                on_decide: move |decision| decide_delete.call((hotel.id, decision)),
            }
        }
    }
}

#[component]
fn HotelRow(hotel: Hotel, on_delete: EventHandler<Hotel>) -> Element {
    let rating = rating_label(hotel.rating).unwrap_or_else(|| "N/A".to_string());
    let description = hotel.description.clone().unwrap_or_default();
    let target = hotel.clone();

    rsx! {
        tr {
            td { class: "font-medium", "{hotel.name}" }
            td { "{hotel.location}" }
            td { class: "text-yellow-600", "{rating}" }
            td { class: "text-gray-500 max-w-xs truncate", "{description}" }
            td {
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_delete.call(target.clone()),
                    "Delete"
                }
            }
        }
    }
}
