use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};

#[component]
pub fn LoggedOutView(on_login: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "min-h-[60vh] flex items-center justify-center px-4",
            div {
                class: "view-card max-w-md w-full text-center",
                h1 { class: "text-3xl font-bold text-gray-900 mb-4", "Logged Out" }
                p { class: "text-gray-600 mb-8", "You have been successfully logged out." }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_login.call(()),
                    "Return to Login"
                }
            }
        }
    }
}
