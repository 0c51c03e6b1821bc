//! # API crate — typed client for the Luxury Stay booking service
//!
//! Every view in the workspace reaches the booking service through
//! [`ApiClient`]. The client owns the base address, reads the credential token
//! from the persisted [`store::SessionStore`] on every call, and hands requests
//! to a [`Transport`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`transport`] | `Transport` trait plus the reqwest implementation (fetch on wasm32) |
//! | [`client`] | `ApiClient`: bearer attachment, JSON encoding, status mapping |
//! | [`dto`] | Request bodies and the paginated response envelope |
//! | [`error`] | `ApiError` and server message extraction |
//! | `auth` | login / register / logout / restore |
//! | `hotels` | public catalog and room listings |
//! | `bookings` | create, list, extend, cancel |
//! | `admin` | hotel, room and user administration plus demo seeding |
//!
//! Nothing here retries, caches or deduplicates. A failed call is returned to
//! the caller as-is and logged.

pub mod client;
pub mod dto;
pub mod error;
pub mod transport;

mod admin;
mod auth;
mod bookings;
mod hotels;

#[cfg(any(test, feature = "mock"))]
pub mod mock;

pub use admin::DEMO_HOTELS;
pub use client::ApiClient;
pub use dto::{HotelWithRoomsRequest, NewHotel, Page, RoomRequest};
pub use error::ApiError;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, ReqwestTransport, Transport};
