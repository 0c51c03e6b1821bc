//! Email/password sign-in form.

use dioxus::prelude::*;

use crate::auth::{sign_in, use_auth};
use crate::client::use_api;
use crate::components::{use_toast, Button, ButtonVariant, Input, Label};

#[component]
pub fn LoginView(on_success: EventHandler<()>, on_register: EventHandler<()>) -> Element {
    let api = use_api();
    let auth = use_auth();
    let toasts = use_toast();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let api = api.clone();
        spawn(async move {
            loading.set(true);
            let result = sign_in(&api, auth, email().trim(), &password()).await;
            loading.set(false);
            match result {
                Ok(_) => on_success.call(()),
                Err(_) => toasts.error("Login failed! Please check credentials."),
            }
        });
    };

    rsx! {
        div {
            class: "min-h-[70vh] flex items-center justify-center px-4",
            div {
                class: "view-card max-w-md w-full",
                h2 { class: "text-3xl font-extrabold text-center text-gray-900", "Sign in to your account" }
                p {
                    class: "mt-2 mb-8 text-center text-sm text-gray-600",
                    "Or "
                    button {
                        class: "font-medium text-blue-600 hover:text-blue-500",
                        onclick: move |_| on_register.call(()),
                        "create a new account"
                    }
                }
                form {
                    onsubmit: handle_login,
                    class: "flex flex-col gap-4",
                    div {
                        Label { html_for: "login-email", "Email address" }
                        Input {
                            id: "login-email",
                            class: "w-full",
                            r#type: "email",
                            placeholder: "you@example.com",
                            required: true,
                            value: email(),
                            oninput: move |evt: FormEvent| email.set(evt.value()),
                        }
                    }
                    div {
                        Label { html_for: "login-password", "Password" }
                        Input {
                            id: "login-password",
                            class: "w-full",
                            r#type: "password",
                            required: true,
                            value: password(),
                            oninput: move |evt: FormEvent| password.set(evt.value()),
                        }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        class: "w-full",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Sign in" }
                    }
                }
            }
        }
    }
}
