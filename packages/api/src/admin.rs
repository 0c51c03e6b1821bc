//! Administration endpoints (`/admin/...`). The server rejects these unless
//! the bearer belongs to an ADMIN.

use store::{Hotel, Identity, KeyValueStore, RoomType};

use crate::client::ApiClient;
use crate::dto::{HotelWithRoomsRequest, NewHotel, RoomRequest};
use crate::error::ApiError;
use crate::transport::{HttpMethod, Transport};

/// Hotels created by [`ApiClient::seed_demo_data`]: name, location, description.
pub const DEMO_HOTELS: [(&str, &str, &str); 3] = [
    ("Ocean Paradise", "Miami, FL", "Beautiful oceanfront resort."),
    ("Alpine Lodge", "Aspen, CO", "Cozy mountain lodge."),
    ("Urban City Hotel", "New York, NY", "Luxury city hotel."),
];

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    pub async fn users(&self) -> Result<Vec<Identity>, ApiError> {
        self.get_json("/admin/users").await
    }

    pub async fn create_hotel(&self, hotel: &NewHotel) -> Result<Hotel, ApiError> {
        self.send_json(HttpMethod::Post, "/admin/hotels", hotel).await
    }

    pub async fn create_hotel_with_rooms(&self, req: &HotelWithRoomsRequest) -> Result<(), ApiError> {
        self.submit(HttpMethod::Post, "/admin/hotels/with-rooms", req)
            .await
    }

    /// The server cascades to the hotel's rooms and bookings.
    pub async fn delete_hotel(&self, hotel_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/hotels/{hotel_id}")).await
    }

    pub async fn add_room(&self, hotel_id: i64, room: &RoomRequest) -> Result<(), ApiError> {
        self.submit(
            HttpMethod::Post,
            &format!("/admin/rooms?hotelId={hotel_id}"),
            room,
        )
        .await
    }

    pub async fn delete_room(&self, room_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/admin/rooms/{room_id}")).await
    }

    /// Create [`DEMO_HOTELS`], each with a single and a double room. Stops at
    /// the first failure; whatever was created before it stays.
    pub async fn seed_demo_data(&self) -> Result<usize, ApiError> {
        let mut created = 0;
        for (name, location, description) in DEMO_HOTELS {
            let hotel = self
                .create_hotel(&NewHotel {
                    name: name.to_string(),
                    location: location.to_string(),
                    description: description.to_string(),
                    rating: None,
                    tags: None,
                    image_url: None,
                })
                .await?;

            for (number, room_type, price) in [("101", RoomType::Single, 100.0), ("102", RoomType::Double, 150.0)] {
                self.add_room(
                    hotel.id,
                    &RoomRequest {
                        room_number: number.to_string(),
                        room_type,
                        price_per_night: price,
                    },
                )
                .await?;
            }
            created += 1;
        }
        tracing::info!("seeded {created} demo hotels");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use store::Role;

    use super::*;
    use crate::mock;

    #[tokio::test]
    async fn test_users_listing_ignores_extra_fields() {
        let (api, transport) = mock::signed_in(Role::Admin);
        transport.respond(
            200,
            r#"[{"id":1,"name":"Root","email":"root@x.com","password":"$2a$hash","role":"ADMIN"},
                {"id":2,"name":"Ann","email":"ann@x.com","role":"USER"}]"#,
        );

        let users = api.users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert!(users[0].is_admin());
        assert_eq!(users[1].email, "ann@x.com");
    }

    #[tokio::test]
    async fn test_add_room_puts_hotel_in_query() {
        let (api, transport) = mock::signed_in(Role::Admin);
        transport.respond(200, "{}");

        api.add_room(
            4,
            &RoomRequest {
                room_number: "201".to_string(),
                room_type: RoomType::Deluxe,
                price_per_night: 320.5,
            },
        )
        .await
        .unwrap();

        let req = transport.last();
        assert_eq!(req.url, format!("{}/admin/rooms?hotelId=4", mock::BASE));
        assert_eq!(
            req.body.as_deref(),
            Some(r#"{"roomNumber":"201","type":"DELUXE","pricePerNight":320.5}"#)
        );
    }

    #[tokio::test]
    async fn test_delete_routes() {
        let (api, transport) = mock::signed_in(Role::Admin);
        transport.respond(200, "").respond(500, r#"{"message":"Hotel has active bookings"}"#);

        api.delete_room(8).await.unwrap();
        assert_eq!(transport.last().url, format!("{}/admin/rooms/8", mock::BASE));

        let err = api.delete_hotel(2).await.unwrap_err();
        assert_eq!(transport.last().url, format!("{}/admin/hotels/2", mock::BASE));
        assert_eq!(err.user_message("Hotel may have active bookings"), "Hotel has active bookings");
    }

    #[tokio::test]
    async fn test_seed_creates_three_hotels_with_two_rooms_each() {
        let (api, transport) = mock::signed_in(Role::Admin);
        for id in 1..=3 {
            transport
                .respond(200, &format!(r#"{{"id":{id},"name":"h"}}"#))
                .respond(200, "{}")
                .respond(200, "{}");
        }

        assert_eq!(api.seed_demo_data().await.unwrap(), 3);

        let sent = transport.sent();
        assert_eq!(sent.len(), 9);
        assert_eq!(sent[0].url, format!("{}/admin/hotels", mock::BASE));
        assert!(sent[0].body.as_deref().unwrap().contains("Ocean Paradise"));
        assert_eq!(sent[1].url, format!("{}/admin/rooms?hotelId=1", mock::BASE));
        assert!(sent[2].body.as_deref().unwrap().contains("DOUBLE"));
        assert_eq!(sent[8].url, format!("{}/admin/rooms?hotelId=3", mock::BASE));
    }

    #[tokio::test]
    async fn test_seed_stops_on_first_failure() {
        let (api, transport) = mock::signed_in(Role::User);
        transport.respond(403, "");

        assert_eq!(api.seed_demo_data().await.unwrap_err().status(), Some(403));
        assert_eq!(transport.sent().len(), 1);
    }
}
