//! Session lifecycle: login, registration, logout and rehydration.

use store::{Identity, KeyValueStore, Role};

use crate::client::ApiClient;
use crate::dto::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::ApiError;
use crate::transport::{HttpMethod, Transport};

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// `POST /auth/login`. On success the token and identity are persisted
    /// together and the identity is returned. Any failure leaves the stored
    /// session exactly as it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<Identity, ApiError> {
        let resp: AuthResponse = self
            .send_json(HttpMethod::Post, "/auth/login", &LoginRequest { email, password })
            .await?;

        // The login reply carries no email; keep the one that was typed in.
        let identity = Identity {
            id: resp.id,
            name: resp.name,
            email: email.to_string(),
            role: resp.role,
        };
        self.session().save(&resp.token, &identity)?;
        tracing::info!("signed in as {} ({})", identity.name, identity.role);
        Ok(identity)
    }

    /// `POST /auth/register`. Does not sign in.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<(), ApiError> {
        self.submit(
            HttpMethod::Post,
            "/auth/register",
            &RegisterRequest {
                name,
                email,
                password,
                role,
            },
        )
        .await?;
        tracing::info!("registered {email} as {role}");
        Ok(())
    }

    /// Forget the session locally. There is no server-side logout endpoint.
    pub fn logout(&self) {
        self.session().clear();
        tracing::info!("signed out");
    }

    /// The persisted identity, if a complete session record exists. A partial
    /// record is wiped so the two fields never disagree.
    pub fn restore(&self) -> Option<Identity> {
        match self.session().load() {
            Some(session) => Some(session.identity),
            None => {
                self.session().clear();
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use store::{KeyValueStore, SessionStore};

    use super::*;
    use crate::mock;

    const LOGIN_OK: &str = r#"{"token":"tok-abc","id":42,"name":"Alice","role":"USER"}"#;

    #[tokio::test]
    async fn test_login_persists_session_and_later_calls_carry_token() {
        let (api, transport, store) = mock::client();
        transport.respond(200, LOGIN_OK).respond(200, "[]");

        let identity = api.login("a@b.com", "x").await.unwrap();
        assert_eq!(identity.id, 42);
        assert_eq!(identity.email, "a@b.com");
        assert_eq!(identity.role, Role::User);

        let login = transport.last();
        assert_eq!(login.url, format!("{}/auth/login", mock::BASE));
        let body: serde_json::Value = serde_json::from_str(login.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"email": "a@b.com", "password": "x"}));

        let session = SessionStore::new(store).load().unwrap();
        assert_eq!(session.token, "tok-abc");
        assert_eq!(session.identity, identity);

        api.hotel_rooms(1).await.unwrap();
        assert_eq!(transport.last().header("Authorization"), Some("Bearer tok-abc"));
    }

    #[tokio::test]
    async fn test_failed_login_keeps_previous_session() {
        let (api, transport) = mock::signed_in(Role::Admin);
        transport.respond(401, r#"{"message":"Bad credentials"}"#).fail("offline");

        let before = api.session().load().unwrap();

        assert!(api.login("a@b.com", "wrong").await.is_err());
        assert_eq!(api.session().load(), Some(before.clone()));

        assert!(api.login("a@b.com", "x").await.is_err());
        assert_eq!(api.session().load(), Some(before));
    }

    #[tokio::test]
    async fn test_failed_login_on_empty_store_writes_nothing() {
        let (api, transport, store) = mock::client();
        transport.respond(200, r#"{"unexpected":true}"#);

        assert!(matches!(
            api.login("a@b.com", "x").await,
            Err(ApiError::Decode(_))
        ));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_login_with_unwritable_store_keeps_previous_session() {
        let transport = mock::MockTransport::new();
        let store = mock::RefusingStore::default();
        let api = ApiClient::new(transport.clone(), mock::BASE, store.clone());
        let earlier = Identity {
            id: 3,
            name: "Earlier".to_string(),
            email: "e@b.com".to_string(),
            role: Role::User,
        };
        api.session().save("tok-earlier", &earlier).unwrap();
        let before = api.session().load();

        store.refuse("user");
        transport.respond(200, LOGIN_OK);

        assert!(matches!(
            api.login("a@b.com", "x").await,
            Err(ApiError::Storage(_))
        ));
        assert_eq!(api.session().load(), before);
        assert_eq!(api.session().token().as_deref(), Some("tok-earlier"));
    }

    #[tokio::test]
    async fn test_register_does_not_sign_in() {
        let (api, transport, store) = mock::client();
        transport.respond(200, LOGIN_OK);

        api.register("Bob", "bob@b.com", "pw", Role::Admin).await.unwrap();
        assert!(store.is_empty());

        let body: serde_json::Value =
            serde_json::from_str(transport.last().body.as_deref().unwrap()).unwrap();
        assert_eq!(body["role"], "ADMIN");
        assert_eq!(body["name"], "Bob");
    }

    #[tokio::test]
    async fn test_register_failure_exposes_server_message() {
        let (api, transport, _) = mock::client();
        transport.respond(400, r#"{"message":"Email already in use"}"#);

        let err = api.register("Bob", "bob@b.com", "pw", Role::User).await.unwrap_err();
        assert_eq!(err.user_message(""), "Email already in use");
    }

    #[test]
    fn test_logout_clears_everything() {
        let (api, _) = mock::signed_in(Role::User);
        api.logout();
        assert!(api.session().token().is_none());
        assert!(api.restore().is_none());

        // Idempotent
        api.logout();
    }

    #[test]
    fn test_restore_wipes_half_record() {
        let (api, _, store) = mock::client();
        store.set("token", "dangling").unwrap();

        assert!(api.restore().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_restore_returns_saved_identity() {
        let (api, _) = mock::signed_in(Role::Admin);
        let identity = api.restore().unwrap();
        assert!(identity.is_admin());
        assert_eq!(identity.name, "Tester");
    }
}
