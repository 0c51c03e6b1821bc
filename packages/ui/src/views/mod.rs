mod home;
pub use home::HomeView;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod logged_out;
pub use logged_out::LoggedOutView;

mod profile;
pub use profile::ProfileView;

mod catalog;
pub use catalog::{CatalogVariant, CatalogView};

mod room_booking;
pub use room_booking::RoomBookingModal;

mod bookings;
pub use bookings::BookingsView;

mod admin_dashboard;
pub use admin_dashboard::AdminDashboardView;

mod admin_users;
pub use admin_users::AdminUsersView;

mod admin_hotels;
pub use admin_hotels::AdminHotelsView;

mod admin_rooms;
pub use admin_rooms::AdminRoomsView;
