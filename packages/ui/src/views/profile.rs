use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::badges;
use crate::icons::FaUser;
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// The signed-in account. Renders nothing without an identity; the router
/// guard keeps anonymous visitors away.
#[component]
pub fn ProfileView() -> Element {
    let auth = use_auth();
    let Some(who) = auth().identity else {
        return rsx! {};
    };
    let role = badges::role(who.role);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page max-w-2xl",
            div {
                class: "view-card",
                div {
                    class: "flex items-center gap-4 mb-8",
                    div {
                        class: "w-16 h-16 rounded-full bg-blue-100 text-blue-600 flex items-center justify-center",
                        Icon { icon: FaUser, width: 28, height: 28 }
                    }
                    div {
                        h1 { class: "text-2xl font-bold text-gray-900", "{who.name}" }
                        span { class: "badge {role.class}", "{role.label}" }
                    }
                }
                dl {
                    class: "grid grid-cols-1 gap-4",
                    div {
                        dt { class: "text-sm text-gray-500", "Email" }
                        dd { class: "text-lg text-gray-900", "{who.email}" }
                    }
                    div {
                        dt { class: "text-sm text-gray-500", "Account ID" }
                        dd { class: "text-lg text-gray-900", "#{who.id}" }
                    }
                }
            }
        }
    }
}
