//! Router-facing wrappers. Each page renders the shared view from `ui` and
//! turns its callbacks into navigation.

mod layout;
pub use layout::{AppShell, NotFound, RequireAdmin, RequireUser};

mod public;
pub use public::{Home, LoggedOut, Login, Register, Search};

mod account;
pub use account::{Bookings, Dashboard, Profile};

mod admin;
pub use admin::{Admin, AdminHotels, AdminRooms, AdminUsers};
