use store::{Hotel, KeyValueStore, Room};

use crate::client::ApiClient;
use crate::dto::{Page, PageResponse};
use crate::error::ApiError;
use crate::transport::Transport;

impl<T: Transport, S: KeyValueStore> ApiClient<T, S> {
    /// `GET /hotels?page&size`, zero-based `page`.
    pub async fn hotels_page(&self, page: u32, size: u32) -> Result<Page<Hotel>, ApiError> {
        let resp: PageResponse<Hotel> = self
            .get_json(&format!("/hotels?page={page}&size={size}"))
            .await?;
        Ok(resp.into())
    }

    /// `GET /hotels?size`: one large page for unpaginated admin screens.
    pub async fn all_hotels(&self, size: u32) -> Result<Vec<Hotel>, ApiError> {
        let resp: PageResponse<Hotel> = self.get_json(&format!("/hotels?size={size}")).await?;
        Ok(Page::from(resp).content)
    }

    pub async fn hotel_rooms(&self, hotel_id: i64) -> Result<Vec<Room>, ApiError> {
        self.get_json(&format!("/hotels/{hotel_id}/rooms")).await
    }
}

#[cfg(test)]
mod tests {
    use crate::mock;

    #[tokio::test]
    async fn test_first_catalog_page() {
        let (api, transport, _) = mock::client();
        transport.respond(
            200,
            r#"{"content":[{"id":1,"name":"Ocean Paradise","location":"Miami, FL","rating":4.5}],"totalPages":1}"#,
        );

        let page = api.hotels_page(0, 6).await.unwrap();
        assert_eq!(transport.last().url, format!("{}/hotels?page=0&size=6", mock::BASE));
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.content[0].name, "Ocean Paradise");
        assert_eq!(page.content[0].rating, Some(4.5));
    }

    #[tokio::test]
    async fn test_bare_array_means_unpaginated() {
        let (api, transport, _) = mock::client();
        transport.respond(200, r#"[{"id":1,"name":"A"},{"id":2,"name":"B"}]"#);

        let page = api.hotels_page(0, 6).await.unwrap();
        assert_eq!(page.content.len(), 2);
        assert_eq!(page.total_pages, 0);
    }

    #[tokio::test]
    async fn test_all_hotels_accepts_either_shape() {
        let (api, transport, _) = mock::client();
        transport
            .respond(200, r#"{"content":[{"id":1,"name":"A"}],"totalPages":1}"#)
            .respond(200, r#"[{"id":2,"name":"B"}]"#);

        assert_eq!(api.all_hotels(100).await.unwrap()[0].id, 1);
        assert_eq!(transport.last().url, format!("{}/hotels?size=100", mock::BASE));
        assert_eq!(api.all_hotels(100).await.unwrap()[0].id, 2);
    }

    #[tokio::test]
    async fn test_rooms_of_hotel() {
        let (api, transport, _) = mock::client();
        transport.respond(
            200,
            r#"[{"id":7,"roomNumber":"101","type":"SINGLE","pricePerNight":100.0,"available":true},
                {"id":8,"roomNumber":"102","type":"DOUBLE","pricePerNight":150.0,"available":false}]"#,
        );

        let rooms = api.hotel_rooms(3).await.unwrap();
        assert_eq!(transport.last().url, format!("{}/hotels/3/rooms", mock::BASE));
        assert_eq!(rooms.iter().filter(|r| r.available).count(), 1);
    }
}
