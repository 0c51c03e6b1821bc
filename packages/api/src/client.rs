//! # Resource client
//!
//! [`ApiClient`] resolves paths against one fixed base address and attaches
//! the persisted credential as `Authorization: Bearer <token>` whenever the
//! session store holds one. The token is read per request, so a login or a
//! logout takes effect on the very next call without rebuilding the client.
//!
//! Response handling:
//!
//! | Outcome | Result |
//! |---------|--------|
//! | 2xx with a decodable body | `Ok(value)` |
//! | body fails to serialize | `ApiError::Encode`, nothing is sent |
//! | 2xx with an undecodable body | `ApiError::Decode` |
//! | any other status | `ApiError::Status { status, body }` |
//! | no response | `ApiError::Transport` |

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{KeyValueStore, SessionStore};

use crate::error::ApiError;
use crate::transport::{HttpMethod, HttpRequest, HttpResponse, Transport};

#[derive(Clone)]
pub struct ApiClient<T, S> {
    transport: T,
    base_url: String,
    session: SessionStore<S>,
}

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub fn new(transport: T, base_url: impl Into<String>, store: S) -> Self {
        Self {
            transport,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session: SessionStore::new(store),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &SessionStore<S> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// A request for `path` carrying the current token, if any.
    pub fn request(&self, method: HttpMethod, path: &str) -> HttpRequest {
        let req = HttpRequest::new(self.url(path), method).with_header("Accept", "application/json");
        match self.session.token() {
            Some(token) => req.with_header("Authorization", &format!("Bearer {token}")),
            None => req,
        }
    }

    fn with_json<B: Serialize>(req: HttpRequest, body: &B) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(body).map_err(|e| {
            tracing::error!("could not encode request body: {e}");
            ApiError::Encode(e.to_string())
        })?;
        Ok(req
            .with_header("Content-Type", "application/json")
            .with_body(body))
    }

    async fn execute(&self, req: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = req.method;
        let url = req.url.clone();
        tracing::debug!("{} {}", method.as_str(), url);

        let resp = self.transport.send(req).await.map_err(|e| {
            tracing::error!("{} {} failed: {e}", method.as_str(), url);
            e
        })?;

        if !resp.is_success() {
            tracing::warn!("{} {} -> {}", method.as_str(), url, resp.status);
            return Err(ApiError::Status {
                status: resp.status,
                body: resp.body,
            });
        }
        Ok(resp)
    }

    fn decode<R: DeserializeOwned>(resp: &HttpResponse) -> Result<R, ApiError> {
        serde_json::from_str(&resp.body).map_err(|e| {
            tracing::error!("could not decode response: {e}");
            ApiError::Decode(e.to_string())
        })
    }

    pub async fn get_json<R: DeserializeOwned>(&self, path: &str) -> Result<R, ApiError> {
        let resp = self.execute(self.request(HttpMethod::Get, path)).await?;
        Self::decode(&resp)
    }

    /// Send a JSON body and decode the JSON reply.
    pub async fn send_json<B: Serialize, R: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<R, ApiError> {
        let req = Self::with_json(self.request(method, path), body)?;
        let resp = self.execute(req).await?;
        Self::decode(&resp)
    }

    /// Send a JSON body, ignoring whatever the server replies with on success.
    pub async fn submit<B: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        let req = Self::with_json(self.request(method, path), body)?;
        self.execute(req).await.map(|_| ())
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.execute(self.request(HttpMethod::Delete, path))
            .await
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use store::Role;

    use super::*;
    use crate::mock::{self, BASE};

    #[tokio::test]
    async fn test_anonymous_request_has_no_authorization() {
        let (api, transport, _) = mock::client();
        transport.respond(200, "[]");

        let rooms: Vec<serde_json::Value> = api.get_json("/hotels/1/rooms").await.unwrap();
        assert!(rooms.is_empty());

        let req = transport.last();
        assert_eq!(req.url, format!("{BASE}/hotels/1/rooms"));
        assert_eq!(req.method, HttpMethod::Get);
        assert!(req.header("Authorization").is_none());
    }

    #[tokio::test]
    async fn test_token_is_attached_as_bearer() {
        let (api, transport) = mock::signed_in(Role::User);
        transport.respond(200, "{}");

        api.submit(HttpMethod::Put, "bookings/3/extend", &serde_json::json!({}))
            .await
            .unwrap();

        let req = transport.last();
        assert_eq!(req.header("Authorization"), Some("Bearer tok-test"));
        assert_eq!(req.header("Content-Type"), Some("application/json"));
        assert_eq!(req.body.as_deref(), Some("{}"));
    }

    #[tokio::test]
    async fn test_non_success_status_is_surfaced_with_body() {
        let (api, transport, _) = mock::client();
        transport.respond(409, r#"{"message":"Room is not available"}"#);

        let err = api.delete("/bookings/9").await.unwrap_err();
        match &err {
            ApiError::Status { status, body } => {
                assert_eq!(*status, 409);
                assert!(body.contains("not available"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.user_message("x"), "Room is not available");
        // No retry
        assert_eq!(transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_transport_failure_and_bad_body() {
        let (api, transport, _) = mock::client();
        transport.fail("connection refused").respond(200, "not json");

        let err = api.get_json::<Vec<i64>>("/hotels").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));

        let err = api.get_json::<Vec<i64>>("/hotels").await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("refused"))
        }
    }

    #[tokio::test]
    async fn test_unencodable_body_is_an_encode_error() {
        let (api, transport, _) = mock::client();

        let err = api
            .submit(HttpMethod::Post, "/bookings", &Unencodable)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Encode(_)));
        assert!(transport.sent().is_empty());
    }

    #[test]
    fn test_base_url_trailing_slash_is_normalized() {
        let api = ApiClient::new(mock::MockTransport::new(), "http://h/api/", store::MemoryStore::new());
        assert_eq!(api.base_url(), "http://h/api");
        assert_eq!(api.request(HttpMethod::Get, "/hotels").url, "http://h/api/hotels");
    }
}
