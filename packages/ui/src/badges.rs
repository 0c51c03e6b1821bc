//! Display tables for enum-valued fields. One exhaustive `match` per type.

use store::{BookingStatus, Role, RoomType};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Badge {
    pub label: &'static str,
    pub class: &'static str,
}

pub fn booking_status(status: BookingStatus) -> Badge {
    match status {
        BookingStatus::Booked => Badge {
            label: "BOOKED",
            class: "bg-green-100 text-green-800",
        },
        BookingStatus::Cancelled => Badge {
            label: "CANCELLED",
            class: "bg-red-100 text-red-800",
        },
        BookingStatus::Completed => Badge {
            label: "COMPLETED",
            class: "bg-gray-100 text-gray-700",
        },
        BookingStatus::Unknown => Badge {
            label: "UNKNOWN",
            class: "bg-yellow-100 text-yellow-800",
        },
    }
}

pub fn room_type(room_type: RoomType) -> Badge {
    match room_type {
        RoomType::Single => Badge {
            label: "SINGLE",
            class: "bg-blue-100 text-blue-700",
        },
        RoomType::Double => Badge {
            label: "DOUBLE",
            class: "bg-indigo-100 text-indigo-700",
        },
        RoomType::Deluxe => Badge {
            label: "DELUXE",
            class: "bg-amber-100 text-amber-800",
        },
    }
}

pub fn role(role: Role) -> Badge {
    match role {
        Role::Admin => Badge {
            label: "ADMIN",
            class: "bg-purple-100 text-purple-700",
        },
        Role::User => Badge {
            label: "USER",
            class: "bg-gray-100 text-gray-700",
        },
    }
}

pub fn availability(available: bool) -> Badge {
    if available {
        Badge {
            label: "Available",
            class: "bg-green-100 text-green-700",
        }
    } else {
        Badge {
            label: "Unavailable",
            class: "bg-red-100 text-red-700",
        }
    }
}

/// `$150.00`
pub fn price(amount: f64) -> String {
    format!("${amount:.2}")
}
