use chrono::NaiveDate;
use store::{Booking, KeyValueStore};

use crate::client::ApiClient;
use crate::dto::{BookingRequest, ExtendBookingRequest, Page, PageResponse};
use crate::error::ApiError;
use crate::transport::{HttpMethod, Transport};

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// `POST /bookings`. Date ordering is the caller's job; the server has
    /// the final word on availability.
    pub async fn create_booking(
        &self,
        room_id: i64,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Booking, ApiError> {
        let body = BookingRequest {
            room_id,
            check_in_date: check_in,
            check_out_date: check_out,
        };
        self.send_json(HttpMethod::Post, "/bookings", &body).await
    }

    /// `GET /bookings/my?page&size`: the signed-in user's bookings.
    pub async fn my_bookings(&self, page: u32, size: u32) -> Result<Page<Booking>, ApiError> {
        let resp: PageResponse<Booking> = self
            .get_json(&format!("/bookings/my?page={page}&size={size}"))
            .await?;
        Ok(resp.into())
    }

    pub async fn extend_booking(
        &self,
        booking_id: i64,
        new_check_out: NaiveDate,
    ) -> Result<(), ApiError> {
        let body = ExtendBookingRequest {
            new_check_out_date: new_check_out,
        };
        self.submit(HttpMethod::Put, &format!("/bookings/{booking_id}/extend"), &body)
            .await
    }

    pub async fn cancel_booking(&self, booking_id: i64) -> Result<(), ApiError> {
        self.delete(&format!("/bookings/{booking_id}")).await
    }
}
