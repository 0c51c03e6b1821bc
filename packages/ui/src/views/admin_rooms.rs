//! Room administration for one selected hotel at a time.
//!
//! Switching hotels drops the rooms on screen before the next fetch starts,
//! and a response for a hotel that is no longer selected is discarded.

use api::ApiError;
use dioxus::prelude::*;
use store::{Room, RoomType};

use crate::badges;
use crate::client::{use_api, AppClient};
use crate::components::{use_toast, Button, ButtonVariant, ConfirmDialog, Input, Label, Toasts};
use crate::config::use_config;
use crate::hotel_form::RoomDraft;
use crate::mutations::{self, Decision, Outcome};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

async fn fetch_rooms(
    api: AppClient,
    hotel_id: i64,
    selected: Signal<Option<i64>>,
    rooms: Signal<Option<Vec<Room>>>,
    toasts: Toasts,
) {
    let result = api.hotel_rooms(hotel_id).await;
    show_rooms(hotel_id, result, selected, rooms, toasts);
}

/// Put a room list on screen unless another hotel was selected meanwhile.
fn show_rooms(
    hotel_id: i64,
    result: Result<Vec<Room>, ApiError>,
    selected: Signal<Option<i64>>,
    mut rooms: Signal<Option<Vec<Room>>>,
    toasts: Toasts,
) {
    if selected() != Some(hotel_id) {
        return;
    }
    match result {
        Ok(list) => rooms.set(Some(list)),
        Err(e) => {
            tracing::error!("failed to load rooms for hotel {hotel_id}: {e}");
            toasts.error("Failed to load rooms");
            rooms.set(Some(Vec::new()));
        }
    }
}

#[component]
pub fn AdminRoomsView() -> Element {
    let api = use_api();
    let toasts = use_toast();
    let list_size = use_config().paging.admin_hotel_list_size;
    let mut selected = use_signal(|| Option::<i64>::None);
    let mut rooms = use_signal(|| Option::<Vec<Room>>::None);
    let mut draft = use_signal(RoomDraft::default);
    let mut adding = use_signal(|| false);
    let mut deleting = use_signal(|| Option::<i64>::None);

    let hotels_api = api.clone();
    let hotels = use_resource(move || {
        let api = hotels_api.clone();
        async move {
            match api.all_hotels(list_size).await {
                Ok(hotels) => hotels,
                Err(e) => {
                    tracing::error!("failed to load hotels: {e}");
                    toasts.error("Failed to load hotels");
                    Vec::new()
                }
            }
        }
    });

    let select_api = api.clone();
    let handle_select = move |evt: FormEvent| {
        let choice = evt.value().parse::<i64>().ok();
        selected.set(choice);
        rooms.set(None);
        if let Some(hotel_id) = choice {
            spawn(fetch_rooms(select_api.clone(), hotel_id, selected, rooms, toasts));
        }
    };

    let add_api = api.clone();
    let handle_add = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(hotel_id) = selected() else {
            return;
        };
        if adding() {
            return;
        }
        let request = match draft.read().to_request() {
            Ok(request) => request,
            Err(e) => {
                toasts.error(format!("Failed to add room: {e}"));
                return;
            }
        };
        let api = add_api.clone();
        spawn(async move {
            adding.set(true);
            match mutations::add_room(&api, hotel_id, &request).await {
                Outcome::Applied(refetched) => {
                    tracing::info!("added room {} to hotel {hotel_id}", request.room_number);
                    toasts.success("Room added successfully!");
                    draft.set(RoomDraft::default());
                    show_rooms(hotel_id, refetched, selected, rooms, toasts);
                }
                Outcome::Rejected(e) => {
                    tracing::error!("add room to hotel {hotel_id} failed: {e}");
                    toasts.error(format!("Failed to add room: {}", e.user_message(&e.to_string())));
                }
                Outcome::Declined => {}
            }
            adding.set(false);
        });
    };

    let decide_delete = use_callback(move |(hotel_id, room_id, decision): (i64, i64, Decision)| {
        deleting.set(None);
        let api = api.clone();
        spawn(async move {
            match mutations::delete_room(&api, hotel_id, room_id, decision).await {
                Outcome::Declined => {}
                Outcome::Rejected(e) => {
                    tracing::error!("delete room {room_id} failed: {e}");
                    toasts.error("Failed to delete room");
                }
                Outcome::Applied(refetched) => {
                    tracing::info!("deleted room {room_id}");
                    toasts.success("Room deleted successfully!");
                    show_rooms(hotel_id, refetched, selected, rooms, toasts);
                }
            }
        });
    });

    let hotel_list = hotels.cloned().unwrap_or_default();
    let form = draft();
    let selected_value = selected().map(|id| id.to_string()).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            h1 { class: "view-title mb-8", "Manage Rooms" }

            div {
                class: "view-card mb-8",
                Label { html_for: "room-hotel", "Select Hotel" }
                select {
                    id: "room-hotel",
                    class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                    value: "{selected_value}",
                    onchange: handle_select,
                    option { value: "", "-- Select a hotel --" }
                    for hotel in hotel_list {
                        option {
                            key: "{hotel.id}",
                            value: "{hotel.id}",
                            "{hotel.name} - {hotel.location}"
                        }
                    }
                }
            }

            if selected().is_some() {
                form {
                    class: "view-card mb-8",
                    onsubmit: handle_add,
                    h2 { class: "view-section-title", "Add New Room" }
                    div {
                        class: "grid md:grid-cols-3 gap-4",
                        div {
                            Label { html_for: "new-room-number", "Room Number" }
                            Input {
                                id: "new-room-number",
                                class: "w-full",
                                required: true,
                                value: form.room_number.clone(),
                                oninput: move |evt: FormEvent| { draft.write().room_number = evt.value(); },
                            }
                        }
                        div {
                            Label { html_for: "new-room-type", "Room Type" }
                            select {
                                id: "new-room-type",
                                class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                                value: form.room_type.as_str(),
                                onchange: move |evt: FormEvent| {
                                    if let Ok(kind) = evt.value().parse::<RoomType>() {
                                        draft.write().room_type = kind;
                                    }
                                },
                                for kind in RoomType::ALL {
                                    option { key: "{kind.as_str()}", value: kind.as_str(), "{kind.label()}" }
                                }
                            }
                        }
                        div {
                            Label { html_for: "new-room-price", "Price per Night ($)" }
                            Input {
                                id: "new-room-price",
                                class: "w-full",
                                r#type: "number",
                                min: "0",
                                step: "0.01",
                                required: true,
                                value: form.price.clone(),
                                oninput: move |evt: FormEvent| { draft.write().price = evt.value(); },
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "mt-4",
                        r#type: "submit",
                        disabled: adding(),
                        if adding() { "Adding..." } else { "Add Room" }
                    }
                }

                div {
                    class: "view-card overflow-x-auto",
                    h2 { class: "view-section-title", "Existing Rooms" }
                    match rooms() {
                        None => rsx! { p { class: "view-empty", "Loading rooms..." } },
                        Some(list) if list.is_empty() => rsx! {
                            p { class: "view-empty", "No rooms added yet for this hotel." }
                        },
                        Some(list) => rsx! {
                            table {
                                class: "view-table",
                                thead {
                                    tr {
                                        th { "Room Number" }
                                        th { "Type" }
                                        th { "Price/Night" }
                                        th { "Status" }
                                        th { "Actions" }
                                    }
                                }
                                tbody {
                                    for room in list {
                                        RoomRow {
                                            key: "{room.id}",
                                            on_delete: move |id| deleting.set(Some(id)),
                                            room: room.clone(),
                                        }
                                    }
                                }
                            }
                        },
                    }
                }
            }
        }

        if let (Some(hotel_id), Some(room_id)) = (selected(), deleting()) {
            ConfirmDialog {
                key: "{room_id}",
                title: "Delete Room?",
                message: "Are you sure you want to delete this room?",
                confirm_label: "Delete",
                on_decide: move |decision| decide_delete.call((hotel_id, room_id, decision)),
            }
        }
    }
}

#[component]
fn RoomRow(room: Room, on_delete: EventHandler<i64>) -> Element {
    let kind = badges::room_type(room.room_type);
    let status = badges::availability(room.available);
    let id = room.id;

    rsx! {
        tr {
            td { class: "font-medium", "{room.room_number}" }
            td { span { class: "badge {kind.class}", "{kind.label}" } }
            td { "{badges::price(room.price_per_night)}" }
            td { span { class: "badge {status.class}", "{status.label}" } }
            td {
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_delete.call(id),
                    "Delete"
                }
            }
        }
    }
}
