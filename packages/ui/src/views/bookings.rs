//! The signed-in user's bookings, with cancel and extend.
//!
//! Every successful mutation refetches the current page; nothing is patched
//! in place.

use api::{ApiError, Page};
use dioxus::prelude::*;
use store::Booking;

use crate::badges;
use crate::client::use_api;
use crate::components::{
    use_toast, Button, ButtonVariant, ConfirmDialog, Input, Label, ModalOverlay, Pagination, Toasts,
};
use crate::config::use_config;
use crate::extend::{can_modify, date_range, ExtendForm};
use crate::mutations::{self, Decision, Outcome};
use crate::timer::sleep_ms;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

fn page_or_empty(result: Result<Page<Booking>, ApiError>, toasts: Toasts) -> Page<Booking> {
    match result {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("failed to load bookings: {e}");
            toasts.error("Failed to load bookings");
            Page::default()
        }
    }
}

#[component]
pub fn BookingsView() -> Element {
    let api = use_api();
    let toasts = use_toast();
    let page_size = use_config().paging.booking_page_size;
    let mut page = use_signal(|| 0u32);
    let mut bookings = use_signal(|| Option::<Page<Booking>>::None);
    let mut cancelling = use_signal(|| Option::<i64>::None);
    let mut extending = use_signal(|| Option::<Booking>::None);

    let list_api = api.clone();
    let _loader = use_resource(move || {
        let api = list_api.clone();
        let current = page();
        async move {
            let loaded = api.my_bookings(current, page_size).await;
            bookings.set(Some(page_or_empty(loaded, toasts)));
        }
    });

    let decide_cancel = use_callback(move |(booking_id, decision): (i64, Decision)| {
        cancelling.set(None);
        let api = api.clone();
        spawn(async move {
            match mutations::cancel_booking(&api, booking_id, decision, page(), page_size).await {
                Outcome::Declined => {}
                Outcome::Rejected(e) => {
                    tracing::error!("cancel booking {booking_id} failed: {e}");
                    toasts.error("Failed to cancel booking");
                }
                Outcome::Applied(refetched) => {
                    tracing::info!("cancelled booking {booking_id}");
                    toasts.success("Booking cancelled successfully");
                    bookings.set(Some(page_or_empty(refetched, toasts)));
                }
            }
        });
    });

    let loaded = bookings();
    let total_pages = loaded.as_ref().map(|p| p.total_pages).unwrap_or(0);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page max-w-5xl",
            h1 { class: "view-title mb-8", "My Bookings" }

            match loaded {
                None => rsx! { p { class: "view-empty", "Loading bookings..." } },
                Some(p) if p.content.is_empty() => rsx! {
                    p { class: "view-empty", "No bookings found. Book a hotel to see it here!" }
                },
                Some(p) => rsx! {
                    div {
                        class: "flex flex-col gap-4",
                        for booking in p.content {
                            BookingRow {
                                key: "{booking.id}",
                                on_cancel: move |id| cancelling.set(Some(id)),
                                on_extend: move |b| extending.set(Some(b)),
                                booking: booking.clone(),
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

        if let Some(booking_id) = cancelling() {
            ConfirmDialog {
                key: "{booking_id}",
                title: "Cancel Booking?",
                message: "Are you sure you want to cancel this booking? This action cannot be undone.",
                confirm_label: "Yes, Cancel Booking",
                cancel_label: "No, Keep It",
                on_decide: move |decision| decide_cancel.call((booking_id, decision)),
            }
        }

        if let Some(booking) = extending() {
            ExtendModal {
                booking,
                page: page(),
                on_extended: move |refreshed| bookings.set(Some(refreshed)),
                on_close: move |_| extending.set(None),
            }
        }
    }
}

#[component]
fn BookingRow(booking: Booking, on_cancel: EventHandler<i64>, on_extend: EventHandler<Booking>) -> Element {
    let status = badges::booking_status(booking.status);
    let room = booking.room.clone();
    let room_number = room.as_ref().map(|r| r.room_number.clone()).unwrap_or_default();
    let room_kind = room.as_ref().map(|r| badges::room_type(r.room_type));
    let total = booking.total_price.map(badges::price);
    let modifiable = can_modify(&booking);
    let id = booking.id;
    let for_extend = booking.clone();

    rsx! {
        div {
            class: "view-card flex flex-wrap justify-between items-center gap-4",
            div {
                h2 { class: "text-xl font-bold text-gray-900", "{booking.hotel_name()}" }
                p {
                    class: "text-gray-600 flex items-center gap-2 mt-1",
                    "Room {room_number}"
                    if let Some(kind) = room_kind {
                        span { class: "badge {kind.class}", "{kind.label}" }
                    }
                }
                p { class: "text-gray-500 text-sm mt-1", "{date_range(&booking)}" }
            }
            div {
                class: "flex flex-col items-end gap-2",
                span { class: "badge {status.class}", "{status.label}" }
                if let Some(total) = total {
                    span { class: "text-lg font-bold text-gray-900", "{total}" }
                }
                if modifiable {
                    div {
                        class: "flex gap-2",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| on_extend.call(for_extend.clone()),
                            "Extend"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: move |_| on_cancel.call(id),
                            "Cancel"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ExtendModal(
    booking: Booking,
    page: u32,
    on_extended: EventHandler<Page<Booking>>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_api();
    let toasts = use_toast();
    let config = use_config();
    let close_delay = config.ui.close_delay_ms;
    let page_size = config.paging.booking_page_size;
    let mut form = use_signal(|| ExtendForm::new(&booking));
    let booking_id = booking.id;

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let current = form();
        if !current.can_submit() {
            return;
        }
        let Some(new_check_out) = current.new_check_out() else {
            return;
        };
        form.write().submitting = true;
        let api = api.clone();
        spawn(async move {
            match mutations::extend_booking(&api, booking_id, new_check_out, page, page_size).await {
                Outcome::Applied(refetched) => {
                    tracing::info!("extended booking {booking_id} to {new_check_out}");
                    toasts.success("Booking Extended Successfully!");
                    on_extended.call(page_or_empty(refetched, toasts));
                    sleep_ms(close_delay).await;
                    on_close.call(());
                }
                Outcome::Declined => form.write().submitting = false,
                Outcome::Rejected(e) => {
                    tracing::error!("extend booking {booking_id} failed: {e}");
                    toasts.error(e.user_message("Failed to extend booking. Please check dates."));
                    form.write().submitting = false;
                }
            }
        });
    };

    let state = form();

    rsx! {
        ModalOverlay {
            on_close: move |_| on_close.call(()),
            form {
                class: "p-6",
                onsubmit: handle_submit,
                h2 { class: "text-2xl font-bold text-gray-900 mb-4", "Extend Stay" }
                p {
                    class: "text-gray-600 mb-4",
                    "Current Check-out: "
                    span { class: "font-semibold", "{state.current_check_out}" }
                }
                div {
                    class: "mb-6",
                    Label { html_for: "new-check-out", "New Check-out Date" }
                    Input {
                        id: "new-check-out",
                        class: "w-full",
                        r#type: "date",
                        required: true,
                        min: state.min_value(),
                        value: state.value.clone(),
                        disabled: state.submitting,
                        oninput: move |evt: FormEvent| { form.write().value = evt.value(); },
                    }
                }
                div {
                    class: "flex justify-end gap-3",
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_close.call(()),
                        "Cancel"
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        r#type: "submit",
                        disabled: !state.can_submit(),
                        if state.submitting { "Extending..." } else { "Confirm Extension" }
                    }
                }
            }
        }
    }
}
