//! Authentication context and hooks for the UI.

use api::ApiError;
use dioxus::prelude::*;
use store::Identity;

use crate::client::{use_api, AppClient};

/// Authentication state for the application.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub identity: Option<Identity>,
}

impl AuthState {
    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Provider component that owns the session identity.
/// Must sit below the [`AppClient`] context; rehydrates from storage on mount.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let api = use_api();
    let auth_state = use_signal(move || AuthState {
        identity: api.restore(),
    });

    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Log in and publish the identity. On failure the signal is left alone.
pub async fn sign_in(
    api: &AppClient,
    mut auth: Signal<AuthState>,
    email: &str,
    password: &str,
) -> Result<Identity, ApiError> {
    match api.login(email, password).await {
        Ok(identity) => {
            auth.set(AuthState {
                identity: Some(identity.clone()),
            });
            Ok(identity)
        }
        Err(e) => {
            tracing::error!("Login failed: {e}");
            Err(e)
        }
    }
}

/// Clear the persisted session and the in-memory identity.
pub fn sign_out(api: &AppClient, mut auth: Signal<AuthState>) {
    api.logout();
    auth.set(AuthState::default());
}
