//! Mutate-then-refetch steps behind the bookings and admin views.
//!
//! A successful mutation is always followed by a fresh read of the list it
//! touched; the views replace what they show with that read and never patch
//! rows in place. A declined confirmation sends nothing.

use std::future::Future;

use api::{ApiClient, ApiError, HotelWithRoomsRequest, Page, RoomRequest, Transport};
use chrono::NaiveDate;
use store::{Booking, Hotel, KeyValueStore, Room};

/// Answer to a yes/no confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Declined,
}

#[derive(Debug)]
pub enum Outcome<T> {
    /// Nothing was sent.
    Declined,
    /// The mutation failed; the list on screen still stands.
    Rejected(ApiError),
    /// The mutation went through, followed by this refetch.
    Applied(Result<T, ApiError>),
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }
}

async fn apply<T>(
    mutation: impl Future<Output = Result<(), ApiError>>,
    refetch: impl Future<Output = Result<T, ApiError>>,
) -> Outcome<T> {
    match mutation.await {
        Ok(()) => Outcome::Applied(refetch.await),
        Err(e) => Outcome::Rejected(e),
    }
}

/// Cancel a booking and reload the page the user is looking at.
pub async fn cancel_booking<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    booking_id: i64,
    decision: Decision,
    page: u32,
    size: u32,
) -> Outcome<Page<Booking>> {
    if decision == Decision::Declined {
        return Outcome::Declined;
    }
    apply(api.cancel_booking(booking_id), api.my_bookings(page, size)).await
}

pub async fn extend_booking<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    booking_id: i64,
    new_check_out: NaiveDate,
    page: u32,
    size: u32,
) -> Outcome<Page<Booking>> {
    apply(
        api.extend_booking(booking_id, new_check_out),
        api.my_bookings(page, size),
    )
    .await
}

pub async fn create_hotel<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    request: &HotelWithRoomsRequest,
    list_size: u32,
) -> Outcome<Vec<Hotel>> {
    apply(api.create_hotel_with_rooms(request), api.all_hotels(list_size)).await
}

pub async fn delete_hotel<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    hotel_id: i64,
    decision: Decision,
    list_size: u32,
) -> Outcome<Vec<Hotel>> {
    if decision == Decision::Declined {
        return Outcome::Declined;
    }
    apply(api.delete_hotel(hotel_id), api.all_hotels(list_size)).await
}

/// Result of a seeding run. The list is refetched even when seeding stopped
/// part way, since the hotels created before the failure remain.
#[derive(Debug)]
pub struct Seeded {
    pub created: Result<usize, ApiError>,
    pub hotels: Result<Vec<Hotel>, ApiError>,
}

pub async fn seed_demo_data<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    list_size: u32,
) -> Seeded {
    let created = api.seed_demo_data().await;
    let hotels = api.all_hotels(list_size).await;
    Seeded { created, hotels }
}

pub async fn add_room<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    hotel_id: i64,
    request: &RoomRequest,
) -> Outcome<Vec<Room>> {
    apply(api.add_room(hotel_id, request), api.hotel_rooms(hotel_id)).await
}

pub async fn delete_room<T: Transport, S: KeyValueStore>(
    api: &ApiClient<T, S>,
    hotel_id: i64,
    room_id: i64,
    decision: Decision,
) -> Outcome<Vec<Room>> {
    if decision == Decision::Declined {
        return Outcome::Declined;
    }
    apply(api.delete_room(room_id), api.hotel_rooms(hotel_id)).await
}

#[cfg(test)]
mod tests {
    use api::mock::{self, BASE};
    use api::HttpMethod;
    use store::{Role, RoomType};

    use super::*;

    const TWO_HOTELS: &str = r#"{"content":[{"id":1,"name":"Ocean Paradise","location":"Miami, FL"},{"id":3,"name":"Urban City Hotel","location":"New York, NY"}],"totalPages":1}"#;

    #[tokio::test]
    async fn test_declined_cancel_sends_nothing() {
        let (api, transport) = mock::signed_in(Role::User);

        let outcome = cancel_booking(&api, 5, Decision::Declined, 0, 5).await;
        assert!(matches!(outcome, Outcome::Declined));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_confirmed_cancel_reloads_current_page() {
        let (api, transport) = mock::signed_in(Role::User);
        transport.respond(200, "").respond(
            200,
            r#"{"content":[{"id":5,"checkInDate":"2025-01-10","checkOutDate":"2025-01-12","status":"CANCELLED"}],"totalPages":2}"#,
        );

        let Outcome::Applied(Ok(page)) = cancel_booking(&api, 5, Decision::Confirmed, 1, 5).await else {
            panic!("cancel was not applied");
        };
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.content[0].status, store::BookingStatus::Cancelled);

        let sent = transport.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0].method, HttpMethod::Delete);
        assert_eq!(sent[0].url, format!("{BASE}/bookings/5"));
        assert_eq!(sent[1].url, format!("{BASE}/bookings/my?page=1&size=5"));
    }

    #[tokio::test]
    async fn test_failed_cancel_does_not_refetch() {
        let (api, transport) = mock::signed_in(Role::User);
        transport.respond(400, r#"{"message":"Already cancelled"}"#);

        let outcome = cancel_booking(&api, 5, Decision::Confirmed, 0, 5).await;
        let Outcome::Rejected(e) = outcome else {
            panic!("expected a rejection");
        };
        assert_eq!(e.user_message("x"), "Already cancelled");
        assert_eq!(transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_extend_refetches_bookings() {
        let (api, transport) = mock::signed_in(Role::User);
        transport.respond(200, "").respond(200, "[]");

        let date = store::models::parse_date("2025-01-15").unwrap();
        let outcome = extend_booking(&api, 5, date, 0, 5).await;
        assert!(outcome.is_applied());

        let sent = transport.sent();
        assert_eq!(sent[0].method, HttpMethod::Put);
        assert_eq!(sent[1].method, HttpMethod::Get);
        assert_eq!(sent[1].url, format!("{BASE}/bookings/my?page=0&size=5"));
    }

    #[tokio::test]
    async fn test_deleted_hotel_is_gone_after_refetch() {
        let (api, transport) = mock::signed_in(Role::Admin);
        transport.respond(200, "").respond(200, TWO_HOTELS);

        let Outcome::Applied(Ok(hotels)) = delete_hotel(&api, 2, Decision::Confirmed, 100).await else {
            panic!("delete was not applied");
        };
        assert!(hotels.iter().all(|h| h.id != 2));
        assert_eq!(hotels.len(), 2);

        let sent = transport.sent();
        assert_eq!(sent[0].method, HttpMethod::Delete);
        assert_eq!(sent[0].url, format!("{BASE}/admin/hotels/2"));
        assert_eq!(sent[1].method, HttpMethod::Get);
        assert_eq!(sent[1].url, format!("{BASE}/hotels?size=100"));
    }

    #[tokio::test]
    async fn test_declined_hotel_delete_sends_nothing() {
        let (api, transport) = mock::signed_in(Role::Admin);
        assert!(matches!(
            delete_hotel(&api, 2, Decision::Declined, 100).await,
            Outcome::Declined
        ));
        assert!(transport.sent().is_empty());
    }

    #[tokio::test]
    async fn test_refused_hotel_delete_keeps_list() {
        let (api, transport) = mock::signed_in(Role::Admin);
        transport.respond(500, r#"{"message":"Hotel has active bookings"}"#);

        let outcome = delete_hotel(&api, 2, Decision::Confirmed, 100).await;
        assert!(matches!(outcome, Outcome::Rejected(_)));
        assert_eq!(transport.sent().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_refetch_is_reported_after_success() {
        let (api, transport) = mock::signed_in(Role::Admin);
        transport.respond(200, "").fail("offline");

        let request = HotelWithRoomsRequest {
            name: "Alpine Lodge".to_string(),
            location: "Aspen, CO".to_string(),
            description: String::new(),
            rating: None,
            tags: None,
            image_url: None,
            rooms: Vec::new(),
        };
        let outcome = create_hotel(&api, &request, 100).await;
        assert!(matches!(outcome, Outcome::Applied(Err(ApiError::Transport(_)))));
        assert_eq!(transport.sent()[0].url, format!("{BASE}/admin/hotels/with-rooms"));
    }

    #[tokio::test]
    async fn test_partial_seed_still_refetches() {
        let (api, transport) = mock::signed_in(Role::Admin);
        // First hotel and both its rooms, then the second hotel is refused
        transport
            .respond(200, r#"{"id":1,"name":"Ocean Paradise"}"#)
            .respond(200, "")
            .respond(200, "")
            .respond(403, "")
            .respond(200, TWO_HOTELS);

        let seeded = seed_demo_data(&api, 100).await;
        assert!(seeded.created.is_err());
        assert_eq!(seeded.hotels.unwrap().len(), 2);
        assert_eq!(transport.last().url, format!("{BASE}/hotels?size=100"));
    }

    #[tokio::test]
    async fn test_room_mutations_refetch_that_hotel() {
        let (api, transport) = mock::signed_in(Role::Admin);
        transport
            .respond(200, "")
            .respond(
                200,
                r#"[{"id":9,"roomNumber":"201","type":"DELUXE","pricePerNight":320.5,"available":true}]"#,
            )
            .respond(200, "")
            .respond(200, "[]");

        let request = RoomRequest {
            room_number: "201".to_string(),
            room_type: RoomType::Deluxe,
            price_per_night: 320.5,
        };
        let Outcome::Applied(Ok(rooms)) = add_room(&api, 4, &request).await else {
            panic!("add was not applied");
        };
        assert_eq!(rooms[0].room_number, "201");

        let Outcome::Applied(Ok(rooms)) = delete_room(&api, 4, 9, Decision::Confirmed).await else {
            panic!("delete was not applied");
        };
        assert!(rooms.is_empty());

        let urls: Vec<_> = transport.sent().into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                format!("{BASE}/admin/rooms?hotelId=4"),
                format!("{BASE}/hotels/4/rooms"),
                format!("{BASE}/admin/rooms/9"),
                format!("{BASE}/hotels/4/rooms"),
            ]
        );
    }

    #[tokio::test]
    async fn test_declined_room_delete_sends_nothing() {
        let (api, transport) = mock::signed_in(Role::Admin);
        let outcome = delete_room(&api, 4, 9, Decision::Declined).await;
        assert!(matches!(outcome, Outcome::Declined));
        assert!(transport.sent().is_empty());
    }
}
