//! Rules for modifying an existing booking.

use chrono::NaiveDate;
use store::models::parse_date;
use store::Booking;

/// Cancel and extend are offered for active bookings only.
pub fn can_modify(booking: &Booking) -> bool {
    booking.status.is_active()
}

/// `2025-01-10 - 2025-01-12`
pub fn date_range(booking: &Booking) -> String {
    format!("{} - {}", booking.check_in_date, booking.check_out_date)
}

/// The extension sub-form. The new check-out may not precede the current one.
#[derive(Clone, Debug, PartialEq)]
pub struct ExtendForm {
    pub current_check_out: NaiveDate,
    /// Raw `<input type="date">` value.
    pub value: String,
    pub submitting: bool,
}

impl ExtendForm {
    pub fn new(booking: &Booking) -> Self {
        Self {
            current_check_out: booking.check_out_date,
            value: String::new(),
            submitting: false,
        }
    }

    /// The `min` attribute of the date input.
    pub fn min_value(&self) -> String {
        self.current_check_out.format("%Y-%m-%d").to_string()
    }

    pub fn new_check_out(&self) -> Option<NaiveDate> {
        parse_date(&self.value).filter(|d| *d >= self.current_check_out)
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && self.new_check_out().is_some()
    }
}

#[cfg(test)]
mod tests {
    use store::BookingStatus;

    use super::*;

    fn booking(status: BookingStatus) -> Booking {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "checkInDate": "2025-01-10",
            "checkOutDate": "2025-01-12",
            "status": status,
        }))
        .unwrap()
    }

    #[test]
    fn test_only_booked_can_be_modified() {
        assert!(can_modify(&booking(BookingStatus::Booked)));
        assert!(!can_modify(&booking(BookingStatus::Cancelled)));
        assert!(!can_modify(&booking(BookingStatus::Completed)));
    }

    #[test]
    fn test_extension_not_before_current_checkout() {
        let b = booking(BookingStatus::Booked);
        let mut form = ExtendForm::new(&b);
        assert_eq!(form.min_value(), "2025-01-12");
        assert!(!form.can_submit(), "empty");

        form.value = "2025-01-11".to_string();
        assert!(!form.can_submit(), "earlier than current checkout");

        form.value = "2025-01-12".to_string();
        assert!(form.can_submit());

        form.value = "2025-01-20".to_string();
        assert_eq!(form.new_check_out(), parse_date("2025-01-20"));

        form.submitting = true;
        assert!(!form.can_submit());
    }

    #[test]
    fn test_date_range_text() {
        assert_eq!(date_range(&booking(BookingStatus::Booked)), "2025-01-10 - 2025-01-12");
    }
}
