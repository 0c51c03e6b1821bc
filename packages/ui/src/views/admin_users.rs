use dioxus::prelude::*;

use crate::badges;
use crate::client::use_api;
use crate::components::use_toast;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Read-only account listing.
#[component]
pub fn AdminUsersView() -> Element {
    let api = use_api();
    let toasts = use_toast();

    let users = use_resource(move || {
        let api = api.clone();
        async move {
            match api.users().await {
                Ok(users) => users,
                Err(e) => {
                    tracing::error!("failed to load users: {e}");
                    toasts.error("Failed to load users");
                    Vec::new()
                }
            }
        }
    });
    let loaded = users.cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "view-page",
            h1 { class: "view-title mb-8", "Manage Users" }
            div {
                class: "view-card overflow-x-auto p-0",
                match loaded {
                    None => rsx! { p { class: "view-empty", "Loading users..." } },
                    Some(list) if list.is_empty() => rsx! { p { class: "view-empty", "No users found." } },
                    Some(list) => rsx! {
                        table {
                            class: "view-table",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Email" }
                                    th { "Role" }
                                }
                            }
                            tbody {
                                for user in list {
                                    tr {
                                        key: "{user.id}",
                                        td { class: "font-medium", "{user.name}" }
                                        td { "{user.email}" }
                                        td {
                                            span {
                                                class: "badge {badges::role(user.role).class}",
                                                "{badges::role(user.role).label}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
