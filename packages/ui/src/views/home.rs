use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::components::{Button, ButtonVariant};
use crate::icons::{FaBolt, FaGem, FaShieldHalved};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Landing page.
#[component]
pub fn HomeView(on_explore: EventHandler<()>, on_sign_in: EventHandler<()>) -> Element {
    let auth = use_auth();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        section {
            class: "bg-gradient-to-r from-blue-600 to-indigo-700 text-white",
            div {
                class: "max-w-7xl mx-auto px-4 py-24 text-center",
                h1 { class: "text-5xl font-extrabold mb-6", "Book your dream stay today" }
                p {
                    class: "text-xl text-blue-100 mb-10",
                    "Discover handpicked hotels and reserve your room in a few clicks."
                }
                div {
                    class: "flex justify-center gap-4",
                    Button {
                        variant: ButtonVariant::Secondary,
                        class: "text-lg px-8 py-3",
                        onclick: move |_| on_explore.call(()),
                        "Explore Hotels Now"
                    }
                    if !auth().is_signed_in() {
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "text-lg px-8 py-3 text-white border-white hover:bg-white/10",
                            onclick: move |_| on_sign_in.call(()),
                            "Sign In"
                        }
                    }
                }
            }
        }

        section {
            class: "view-page",
            h2 { class: "text-3xl font-bold text-center mb-12", "Why choose us?" }
            div {
                class: "grid md:grid-cols-3 gap-8",
                Feature {
                    title: "Premium Experience",
                    body: "Only the finest hotels, checked for comfort and service.",
                    Icon { icon: FaGem, width: 32, height: 32 }
                }
                Feature {
                    title: "Secure Booking",
                    body: "Your account and reservations stay private.",
                    Icon { icon: FaShieldHalved, width: 32, height: 32 }
                }
                Feature {
                    title: "Fast & Easy",
                    body: "Search, pick a room and confirm in under a minute.",
                    Icon { icon: FaBolt, width: 32, height: 32 }
                }
            }
        }
    }
}

#[component]
fn Feature(title: &'static str, body: &'static str, children: Element) -> Element {
    rsx! {
        div {
            class: "view-card text-center",
            div { class: "flex justify-center text-blue-600 mb-4", {children} }
            h3 { class: "text-xl font-semibold mb-2", "{title}" }
            p { class: "text-gray-600", "{body}" }
        }
    }
}
