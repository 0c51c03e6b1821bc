//! State of the room booking modal.
//!
//! ```text
//! LoadingRooms -> RoomsLoaded -> RoomSelected -> Submitting -> Success
//!                                     ^              |
//!                                     +-- Error <----+
//! ```
//!
//! Closing the modal is possible from every phase and has no side effect.
//! Unavailable rooms can never become the selection.

use chrono::NaiveDate;
use store::models::{parse_date, stay_nights};
use store::Room;

#[derive(Clone, Debug, PartialEq)]
pub enum FlowPhase {
    LoadingRooms,
    RoomsLoaded,
    RoomSelected,
    Submitting,
    Success,
    /// Submission failed; the form stays populated for a retry.
    Error(String),
}

/// What to send once the form passes [`BookingFlow::begin_submit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BookingDraft {
    pub room_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookingFlow {
    pub phase: FlowPhase,
    pub rooms: Vec<Room>,
    pub selected: Option<i64>,
    /// Raw `<input type="date">` values.
    pub check_in: String,
    pub check_out: String,
}

impl Default for BookingFlow {
    fn default() -> Self {
        Self {
            phase: FlowPhase::LoadingRooms,
            rooms: Vec::new(),
            selected: None,
            check_in: String::new(),
            check_out: String::new(),
        }
    }
}

impl BookingFlow {
    pub fn rooms_loaded(&mut self, rooms: Vec<Room>) {
        self.rooms = rooms;
        self.selected = None;
        self.phase = FlowPhase::RoomsLoaded;
    }

    fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            FlowPhase::LoadingRooms | FlowPhase::Submitting | FlowPhase::Success
        )
    }

    /// Select `room_id` if it exists and is available. Returns whether the
    /// selection changed.
    pub fn select(&mut self, room_id: i64) -> bool {
        if self.is_busy() {
            return false;
        }
        let available = self.rooms.iter().any(|r| r.id == room_id && r.available);
        if !available {
            return false;
        }
        self.selected = Some(room_id);
        self.phase = FlowPhase::RoomSelected;
        true
    }

    pub fn selected_room(&self) -> Option<&Room> {
        let id = self.selected?;
        self.rooms.iter().find(|r| r.id == id)
    }

    pub fn available_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.available).count()
    }

    /// Both dates parsed, check-out after check-in.
    pub fn stay(&self) -> Option<(NaiveDate, NaiveDate)> {
        let check_in = parse_date(&self.check_in)?;
        let check_out = parse_date(&self.check_out)?;
        stay_nights(check_in, check_out).map(|_| (check_in, check_out))
    }

    pub fn nights(&self) -> Option<i64> {
        self.stay().and_then(|(i, o)| stay_nights(i, o))
    }

    pub fn estimated_total(&self) -> Option<f64> {
        let room = self.selected_room()?;
        Some(self.nights()? as f64 * room.price_per_night)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_busy() && self.selected_room().is_some() && self.stay().is_some()
    }

    /// Move to `Submitting` and return what to send, or `None` when the form
    /// is incomplete.
    pub fn begin_submit(&mut self) -> Option<BookingDraft> {
        if !self.can_submit() {
            return None;
        }
        let room_id = self.selected?;
        let (check_in, check_out) = self.stay()?;
        self.phase = FlowPhase::Submitting;
        Some(BookingDraft {
            room_id,
            check_in,
            check_out,
        })
    }

    pub fn submit_succeeded(&mut self) {
        self.phase = FlowPhase::Success;
    }

    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.phase = FlowPhase::Error(message.into());
    }

    pub fn availability_summary(&self) -> String {
        let total = self.rooms.len();
        let free = self.available_count();
        let listed = format!("{total} room{} available.", if total == 1 { "" } else { "s" });
        if free == 0 {
            format!("{listed} All rooms are currently booked.")
        } else if free == 1 {
            format!("{listed} 1 room is currently available for booking.")
        } else {
            format!("{listed} {free} rooms are currently available for booking.")
        }
    }
}
