//! Request bodies and response envelopes exchanged with the booking service.
//!
//! List endpoints answer with a paginated envelope `{content, totalPages}`.
//! Some deployments return a bare JSON array instead; that form is accepted
//! and becomes a [`Page`] with `total_pages == 0`, meaning "not paginated".

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use store::{Role, RoomType};

#[derive(Debug, Serialize)]
pub(crate) struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Body of a successful login: the token plus identity fields (no email).
#[derive(Debug, Deserialize)]
pub(crate) struct AuthResponse {
    pub token: String,
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegisterRequest<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
    pub role: Role,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BookingRequest {
    pub room_id: i64,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExtendBookingRequest {
    pub new_check_out_date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomRequest {
    pub room_number: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub price_per_night: f64,
}

/// Body of `POST /admin/hotels`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHotel {
    pub name: String,
    pub location: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Body of `POST /admin/hotels/with-rooms`. Absent optionals go out as `null`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelWithRoomsRequest {
    pub name: String,
    pub location: String,
    pub description: String,
    pub rating: Option<f64>,
    pub tags: Option<String>,
    pub image_url: Option<String>,
    pub rooms: Vec<RoomRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PageResponse<T> {
    Envelope {
        content: Vec<T>,
        #[serde(rename = "totalPages", default)]
        total_pages: u32,
    },
    Bare(Vec<T>),
}

impl<T> From<PageResponse<T>> for Page<T> {
    fn from(resp: PageResponse<T>) -> Self {
        match resp {
            PageResponse::Envelope {
                content,
                total_pages,
            } => Page {
                content,
                total_pages,
            },
            PageResponse::Bare(content) => Page {
                content,
                total_pages: 0,
            },
        }
    }
}

/// One page of a server-paginated list.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// Zero when the server did not paginate.
    pub total_pages: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            content: Vec::new(),
            total_pages: 0,
        }
    }
}
