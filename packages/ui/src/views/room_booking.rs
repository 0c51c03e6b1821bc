//! Room selection and booking modal, driven by [`BookingFlow`].

use dioxus::prelude::*;
use store::Hotel;

use crate::auth::use_auth;
use crate::badges;
use crate::booking_flow::{BookingFlow, FlowPhase};
use crate::client::use_api;
use crate::components::{use_toast, Button, ButtonVariant, Input, Label, ModalOverlay};
use crate::config::use_config;
use crate::icons::{FaBed, FaLocationDot, FaXmark};
use crate::timer::sleep_ms;
use crate::Icon;

#[component]
pub fn RoomBookingModal(
    hotel: Hotel,
    on_close: EventHandler<()>,
    on_login_required: EventHandler<()>,
) -> Element {
    let api = use_api();
    let auth = use_auth();
    let toasts = use_toast();
    let close_delay = use_config().ui.close_delay_ms;
    let mut flow = use_signal(BookingFlow::default);

    let hotel_id = hotel.id;
    let rooms_api = api.clone();
    use_future(move || {
        let api = rooms_api.clone();
        async move {
            let rooms = match api.hotel_rooms(hotel_id).await {
                Ok(rooms) => rooms,
                Err(e) => {
                    tracing::error!("failed to load rooms for hotel {hotel_id}: {e}");
                    toasts.warning("Rooms could not be loaded for this hotel");
                    Vec::new()
                }
            };
            flow.write().rooms_loaded(rooms);
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if !auth().is_signed_in() {
            toasts.error("You must be logged in to book a room.");
            spawn(async move {
                sleep_ms(close_delay).await;
                on_login_required.call(());
            });
            return;
        }
        let Some(draft) = flow.write().begin_submit() else {
            return;
        };
        let api = api.clone();
        spawn(async move {
            match api
                .create_booking(draft.room_id, draft.check_in, draft.check_out)
                .await
            {
                Ok(booking) => {
                    tracing::info!("booked room {} as booking {}", draft.room_id, booking.id);
                    flow.write().submit_succeeded();
                    toasts.success("Booking Successful!");
                    sleep_ms(close_delay).await;
                    on_close.call(());
                }
                Err(e) => {
                    tracing::error!("booking room {} failed: {e}", draft.room_id);
                    let message = format!("Booking Failed. {}", e.user_message("Please try again."));
                    toasts.error(message.clone());
                    flow.write().submit_failed(message);
                }
            }
        });
    };

    let state = flow();
    let submitting = state.phase == FlowPhase::Submitting;

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            wide: true,
            div {
                class: "sticky top-0 bg-white border-b px-6 py-4 flex justify-between items-start",
                div {
                    h2 { class: "text-2xl font-bold text-gray-900", "{hotel.name}" }
                    p {
                        class: "text-gray-600 flex items-center gap-1",
                        Icon { icon: FaLocationDot, width: 12, height: 12 }
                        "{hotel.location}"
                    }
                }
                button {
                    class: "text-gray-400 hover:text-gray-600",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: FaXmark, width: 20, height: 20 }
                }
            }

            div {
                class: "p-6",
                if state.phase == FlowPhase::LoadingRooms {
                    p { class: "view-empty", "Loading rooms..." }
                } else if state.rooms.is_empty() {
                    p { class: "view-empty", "No rooms available yet" }
                } else {
                    h3 { class: "text-lg font-semibold mb-1", "Available Rooms" }
                    p { class: "text-sm text-gray-500 mb-1", "Select a room to proceed with booking" }
                    p { class: "text-sm text-gray-600 mb-4", "{state.availability_summary()}" }
                    div {
                        class: "grid sm:grid-cols-2 gap-4 mb-6",
                        for room in state.rooms.iter().cloned() {
                            RoomCard {
                                key: "{room.id}",
                                selected: state.selected == Some(room.id),
                                on_select: move |id| {
                                    flow.write().select(id);
                                },
                                room: room.clone(),
                            }
                        }
                    }
                }

                if let Some(room) = state.selected_room() {
                    form {
                        class: "border-t pt-6",
                        onsubmit: handle_submit,
                        h3 { class: "text-lg font-semibold mb-4", "Complete Booking" }
                        p { class: "text-sm text-gray-600 mb-4", "Room {room.room_number} · {badges::price(room.price_per_night)} per night" }
                        div {
                            class: "grid sm:grid-cols-2 gap-4 mb-4",
                            div {
                                Label { html_for: "check-in", "Check-in Date" }
                                Input {
                                    id: "check-in",
                                    class: "w-full",
                                    r#type: "date",
                                    required: true,
                                    disabled: submitting,
                                    value: state.check_in.clone(),
                                    oninput: move |evt: FormEvent| { flow.write().check_in = evt.value(); },
                                }
                            }
                            div {
                                Label { html_for: "check-out", "Check-out Date" }
                                Input {
                                    id: "check-out",
                                    class: "w-full",
                                    r#type: "date",
                                    required: true,
                                    disabled: submitting,
                                    min: state.check_in.clone(),
                                    value: state.check_out.clone(),
                                    oninput: move |evt: FormEvent| { flow.write().check_out = evt.value(); },
                                }
                            }
                        }
                        if let (Some(nights), Some(total)) = (state.nights(), state.estimated_total()) {
                            p {
                                class: "text-gray-700 mb-4",
                                "{nights} night(s) · Estimated total "
                                span { class: "font-bold", "{badges::price(total)}" }
                            }
                        }
                        if let FlowPhase::Error(message) = &state.phase {
                            p { class: "text-red-600 text-sm mb-4", role: "alert", "{message}" }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            class: "w-full",
                            r#type: "submit",
                            disabled: !state.can_submit(),
                            if submitting { "Booking..." } else { "Confirm Booking" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RoomCard(room: store::Room, selected: bool, on_select: EventHandler<i64>) -> Element {
    let kind = badges::room_type(room.room_type);
    let border = if selected {
        "border-blue-600 ring-2 ring-blue-200"
    } else if room.available {
        "border-gray-200 hover:border-blue-400 cursor-pointer"
    } else {
        "border-gray-200 opacity-60 cursor-not-allowed"
    };
    let id = room.id;
    let available = room.available;

    rsx! {
        div {
            class: "border-2 rounded-xl p-4 transition {border}",
            aria_disabled: !available,
            onclick: move |_| {
                if available {
                    on_select.call(id);
                }
            },
            div {
                class: "flex justify-between items-center mb-2",
                span {
                    class: "font-semibold text-gray-900 flex items-center gap-2",
                    Icon { icon: FaBed, width: 14, height: 14 }
                    "Room {room.room_number}"
                }
                span { class: "badge {kind.class}", "{kind.label}" }
            }
            p {
                class: "text-xl font-bold text-blue-600",
                "{badges::price(room.price_per_night)}"
                span { class: "text-sm font-normal text-gray-500", " per night" }
            }
            if !available {
                p { class: "text-sm text-red-600 mt-2", "Currently Unavailable" }
            } else if selected {
                p { class: "text-sm text-blue-600 font-semibold mt-2", "✓ Selected" }
            }
        }
    }
}
