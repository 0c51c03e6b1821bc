//! Registration form. Creating an account does not sign the user in.

use dioxus::prelude::*;
use store::Role;

use crate::client::use_api;
use crate::components::{use_toast, Button, ButtonVariant, Input, Label};

#[component]
pub fn RegisterView(on_success: EventHandler<()>, on_login: EventHandler<()>) -> Element {
    let api = use_api();
    let toasts = use_toast();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::User);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            let result = api
                .register(name().trim(), email().trim(), &password(), role())
                .await;
            loading.set(false);
            match result {
                Ok(()) => {
                    toasts.success("Registration Successful!");
                    on_success.call(());
                }
                Err(e) => {
                    tracing::error!("registration failed: {e}");
                    toasts.error(format!("Registration failed! {}", e.user_message(&e.to_string())));
                }
            }
        });
    };

    rsx! {
        div {
            class: "min-h-[70vh] flex items-center justify-center px-4",
            div {
                class: "view-card max-w-md w-full",
                h2 { class: "text-3xl font-extrabold text-center text-gray-900 mb-8", "Create your account" }
                form {
                    onsubmit: handle_register,
                    class: "flex flex-col gap-4",
                    div {
                        Label { html_for: "register-name", "Full Name" }
                        Input {
                            id: "register-name",
                            class: "w-full",
                            required: true,
                            value: name(),
                            oninput: move |evt: FormEvent| name.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "register-email", "Email address" }
                        Input {
                            id: "register-email",
                            class: "w-full",
                            r#type: "email",
                            required: true,
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "register-password", "Password" }
                        Input {
                            id: "register-password",
                            class: "w-full",
                            r#type: "password",
                            required: true,
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "register-role", "I want to be a" }
                        select {
                            id: "register-role",
                            class: "w-full px-3 py-2 border border-gray-300 rounded-lg",
                            value: role().as_str(),
                            onchange: move |evt: FormEvent| {
                                if let Ok(r) = evt.value().parse::<Role>() {
                                    role.set(r);
                                }
                            },
                            for r in Role::ALL {
                                option { key: "{r.as_str()}", value: r.as_str(), "{r.signup_label()}" }
                            }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Registering..." } else { "Register" }
                    }
                }
                p {
                    class: "mt-6 text-center text-sm text-gray-600",
                    "Already have an account? "
                    button {
                        class: "font-medium text-blue-600 hover:text-blue-500",
                        onclick: move |_| on_login.call(()),
                        "Sign in"
                    }
                }
            }
        }
    }
}
