//! Drafts behind the admin "add hotel" and "add room" forms.
//!
//! Inputs are kept as the raw strings the user typed and only parsed by
//! [`HotelForm::validate`] / [`RoomDraft::to_request`].

use std::fmt;

use api::{HotelWithRoomsRequest, RoomRequest};
use store::RoomType;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormError {
    NameRequired,
    InvalidRating,
    RatingOutOfRange,
    RoomNumberRequired,
    /// `row` is zero-based; `None` for the stand-alone room form.
    InvalidPrice { row: Option<usize> },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::NameRequired => f.write_str("Hotel name is required"),
            FormError::InvalidRating => f.write_str("Rating must be a number"),
            FormError::RatingOutOfRange => f.write_str("Rating must be between 0 and 5"),
            FormError::RoomNumberRequired => f.write_str("Room number is required"),
            FormError::InvalidPrice { row: Some(row) } => {
                write!(f, "Room {}: price must be a non-negative amount", row + 1)
            }
            FormError::InvalidPrice { row: None } => {
                f.write_str("Price must be a non-negative amount")
            }
        }
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p >= 0.0)
}

fn optional(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RoomDraft {
    pub room_number: String,
    pub room_type: RoomType,
    pub price: String,
}

impl RoomDraft {
    /// Rows missing a number or a price are skipped by the hotel form.
    pub fn is_blank(&self) -> bool {
        self.room_number.trim().is_empty() || self.price.trim().is_empty()
    }

    pub fn to_request(&self) -> Result<RoomRequest, FormError> {
        if self.room_number.trim().is_empty() {
            return Err(FormError::RoomNumberRequired);
        }
        let price_per_night = parse_price(&self.price).ok_or(FormError::InvalidPrice { row: None })?;
        Ok(RoomRequest {
            room_number: self.room_number.trim().to_string(),
            room_type: self.room_type,
            price_per_night,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HotelForm {
    pub name: String,
    pub location: String,
    pub description: String,
    pub rating: String,
    pub tags: String,
    pub image_url: String,
    pub rooms: Vec<RoomDraft>,
}

impl Default for HotelForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            description: String::new(),
            rating: String::new(),
            tags: String::new(),
            image_url: String::new(),
            rooms: vec![RoomDraft::default()],
        }
    }
}

impl HotelForm {
    pub fn add_room(&mut self) {
        self.rooms.push(RoomDraft::default());
    }

    /// The last remaining row stays.
    pub fn remove_room(&mut self, index: usize) {
        if self.rooms.len() > 1 && index < self.rooms.len() {
            self.rooms.remove(index);
        }
    }

    pub fn can_remove_rooms(&self) -> bool {
        self.rooms.len() > 1
    }

    pub fn validate(&self) -> Result<HotelWithRoomsRequest, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::NameRequired);
        }

        let rating = match optional(&self.rating) {
            None => None,
            Some(raw) => {
                let value: f64 = raw.parse().map_err(|_| FormError::InvalidRating)?;
                if !(0.0..=5.0).contains(&value) {
                    return Err(FormError::RatingOutOfRange);
                }
                Some(value)
            }
        };

        let mut rooms = Vec::new();
        for (row, draft) in self.rooms.iter().enumerate() {
            if draft.is_blank() {
                continue;
            }
            let price_per_night = parse_price(&draft.price).ok_or(FormError::InvalidPrice { row: Some(row) })?;
            rooms.push(RoomRequest {
                room_number: draft.room_number.trim().to_string(),
                room_type: draft.room_type,
                price_per_night,
            });
        }

        Ok(HotelWithRoomsRequest {
            name: name.to_string(),
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            rating,
            tags: optional(&self.tags),
            image_url: optional(&self.image_url),
            rooms,
        })
    }
}
