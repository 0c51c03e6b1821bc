use dioxus::prelude::*;
use dioxus_primitives::alert_dialog::{
    AlertDialogAction, AlertDialogActions, AlertDialogCancel, AlertDialogContent,
    AlertDialogDescription, AlertDialogRoot, AlertDialogTitle,
};

use super::ButtonVariant;
use crate::mutations::Decision;

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(
    on_close: EventHandler<()>,
    /// Room for a list next to a form.
    #[props(default)]
    wide: bool,
    children: Element,
) -> Element {
    let width = if wide { "max-w-4xl" } else { "max-w-md" };
    rsx! {
        div {
            class: "fixed inset-0 flex items-center justify-center bg-black/50 p-4",
            style: "z-index: 2000",
            onclick: move |_| on_close.call(()),
            div {
                class: "bg-white rounded-2xl shadow-2xl {width} w-full max-h-[90vh] overflow-y-auto",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Yes/no confirmation in place of a browser `confirm()`. Shown open on
/// mount; reports exactly one [`Decision`]. Closing it any other way counts
/// as declining.
#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Confirm".to_string())] confirm_label: String,
    #[props(default = "Cancel".to_string())] cancel_label: String,
    on_decide: EventHandler<Decision>,
) -> Element {
    let mut answered = use_signal(|| false);
    let decide = use_callback(move |decision: Decision| {
        if !answered() {
            answered.set(true);
            on_decide.call(decision);
        }
    });

    rsx! {
        AlertDialogRoot {
            default_open: true,
            on_open_change: move |open: bool| {
                if !open {
                    decide.call(Decision::Declined);
                }
            },
            AlertDialogContent {
                class: "bg-white rounded-2xl shadow-2xl max-w-md w-full p-6",
                AlertDialogTitle { class: "text-xl font-bold text-gray-900 mb-2", "{title}" }
                AlertDialogDescription { class: "text-gray-600 mb-6", "{message}" }
                AlertDialogActions {
                    class: "flex justify-end gap-3",
                    AlertDialogCancel {
                        class: "px-4 py-2 rounded-lg font-medium {ButtonVariant::Outline.class()}",
                        "{cancel_label}"
                    }
                    AlertDialogAction {
                        class: "px-4 py-2 rounded-lg font-medium {ButtonVariant::Destructive.class()}",
                        on_click: move |_| decide.call(Decision::Confirmed),
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
