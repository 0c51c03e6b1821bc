//! Shared API client constructor for all platforms.
//!
//! The session is persisted by a platform-appropriate [`store::KeyValueStore`]:
//! - **Web** (WASM + `web` feature): browser `localStorage` via `store::LocalStore`
//! - **Native**: one file per key under `<data_dir>/luxury-stay/`
//! - **WASM without `web`**: in-memory only

use api::{ApiClient, ReqwestTransport};
use dioxus::prelude::*;
use store::ClientConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStore = store::LocalStore;
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub type AppStore = store::MemoryStore;
#[cfg(not(target_arch = "wasm32"))]
pub type AppStore = store::FileStore;

pub type AppClient = ApiClient<ReqwestTransport, AppStore>;

pub fn make_client(config: &ClientConfig) -> AppClient {
    ApiClient::new(ReqwestTransport::new(), config.api.base_url.clone(), make_store())
}

fn make_store() -> AppStore {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::LocalStore::new()
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        store::MemoryStore::new()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("luxury-stay");
        store::FileStore::new(base)
    }
}

/// The client provided at the root of the app.
pub fn use_api() -> AppClient {
    use_context::<AppClient>()
}
