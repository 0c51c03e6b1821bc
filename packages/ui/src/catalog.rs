//! Client-side refinement of the loaded hotel page.
//!
//! Filtering and sorting only ever see the page already in memory; neither
//! issues a request nor changes the server's page count.

use store::Hotel;

/// Shown when a hotel has no image of its own.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1566073771259-6a8506099945?auto=format&fit=crop&w=800&q=80";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    None,
    RatingDesc,
    RatingAsc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 3] = [SortOrder::None, SortOrder::RatingDesc, SortOrder::RatingAsc];

    /// Value of the `<option>`.
    pub fn key(&self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::RatingDesc => "rating-desc",
            SortOrder::RatingAsc => "rating-asc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::None => "Sort by Rating",
            SortOrder::RatingDesc => "Rating: High to Low",
            SortOrder::RatingAsc => "Rating: Low to High",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|o| o.key() == key)
            .unwrap_or_default()
    }
}

/// Case-insensitive substring match on name, location or tags.
pub fn matches(hotel: &Hotel, term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    hotel.name.to_lowercase().contains(&needle)
        || hotel.location.to_lowercase().contains(&needle)
        || hotel
            .tags
            .as_deref()
            .is_some_and(|t| t.to_lowercase().contains(&needle))
}

/// Filter, then sort. `sort_by` is stable so equal ratings keep page order.
pub fn refine(hotels: &[Hotel], term: &str, order: SortOrder) -> Vec<Hotel> {
    let mut out: Vec<Hotel> = hotels.iter().filter(|h| matches(h, term)).cloned().collect();
    let rating = |h: &Hotel| h.rating.unwrap_or(0.0);
    match order {
        SortOrder::None => {}
        SortOrder::RatingDesc => out.sort_by(|a, b| rating(b).total_cmp(&rating(a))),
        SortOrder::RatingAsc => out.sort_by(|a, b| rating(a).total_cmp(&rating(b))),
    }
    out
}

/// `★ 4.5`, or `None` for unrated hotels.
pub fn rating_label(rating: Option<f64>) -> Option<String> {
    rating.map(|r| format!("★ {r}"))
}

pub fn image_src(hotel: &Hotel) -> &str {
    hotel
        .image_url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .unwrap_or(FALLBACK_IMAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hotel(id: i64, name: &str, location: &str, rating: Option<f64>, tags: Option<&str>) -> Hotel {
        Hotel {
            id,
            name: name.to_string(),
            location: location.to_string(),
            description: None,
            rating,
            tags: tags.map(str::to_string),
            image_url: None,
        }
    }

    fn page() -> Vec<Hotel> {
        vec![
            hotel(1, "Ocean Paradise", "Miami, FL", Some(4.5), Some("Beach,Luxury")),
            hotel(2, "Alpine Lodge", "Aspen, CO", Some(4.0), Some("Ski")),
            hotel(3, "Urban City Hotel", "New York, NY", None, None),
            hotel(4, "Harbor Inn", "Boston, MA", Some(4.0), Some("beach")),
        ]
    }

    fn ids(hotels: &[Hotel]) -> Vec<i64> {
        hotels.iter().map(|h| h.id).collect()
    }

    #[test]
    fn test_filter_matches_name_location_and_tags() {
        let hotels = page();
        assert_eq!(ids(&refine(&hotels, "ALPINE", SortOrder::None)), vec![2]);
        assert_eq!(ids(&refine(&hotels, "new york", SortOrder::None)), vec![3]);
        assert_eq!(ids(&refine(&hotels, "Beach", SortOrder::None)), vec![1, 4]);
        assert_eq!(ids(&refine(&hotels, "   ", SortOrder::None)), vec![1, 2, 3, 4]);
        assert!(refine(&hotels, "zzz", SortOrder::None).is_empty());
    }

    #[test]
    fn test_sort_is_stable_and_unrated_counts_as_zero() {
        let hotels = page();
        assert_eq!(ids(&refine(&hotels, "", SortOrder::RatingDesc)), vec![1, 2, 4, 3]);
        assert_eq!(ids(&refine(&hotels, "", SortOrder::RatingAsc)), vec![3, 2, 4, 1]);
    }

    #[test]
    fn test_sort_applies_after_filter() {
        let hotels = page();
        assert_eq!(ids(&refine(&hotels, "beach", SortOrder::RatingAsc)), vec![4, 1]);
    }

    #[test]
    fn test_refine_leaves_input_untouched() {
        let hotels = page();
        let before = hotels.clone();
        let _ = refine(&hotels, "o", SortOrder::RatingDesc);
        assert_eq!(hotels, before);
    }

    #[test]
    fn test_card_fields() {
        let mut h = hotel(1, "Ocean Paradise", "Miami, FL", Some(4.5), None);
        assert_eq!(rating_label(h.rating).as_deref(), Some("★ 4.5"));
        assert_eq!(rating_label(Some(4.0)).as_deref(), Some("★ 4"));
        assert!(rating_label(None).is_none());
        assert_eq!(image_src(&h), FALLBACK_IMAGE);
        h.image_url = Some("https://img/x.jpg".to_string());
        assert_eq!(image_src(&h), "https://img/x.jpg");
    }

    #[test]
    fn test_sort_keys_round_trip() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_key(order.key()), order);
        }
        assert_eq!(SortOrder::from_key("bogus"), SortOrder::None);
    }
}
