use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::guard::Redirect;
use ui::{load_config, make_client, AuthProvider, NavTarget, ToastProvider};
use views::{
    Admin, AdminHotels, AdminRooms, AdminUsers, AppShell, Bookings, Dashboard, Home, LoggedOut,
    Login, NotFound, Profile, Register, RequireAdmin, RequireUser, Search,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/search")]
        Search {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[route("/logout")]
        LoggedOut {},

        #[layout(RequireUser)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/profile")]
            Profile {},
            #[route("/bookings")]
            Bookings {},
        #[end_layout]

        #[layout(RequireAdmin)]
            #[route("/admin")]
            Admin {},
            #[route("/admin/users")]
            AdminUsers {},
            #[route("/admin/hotels")]
            AdminHotels {},
            #[route("/admin/rooms")]
            AdminRooms {},
        #[end_layout]

        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Route::Home {},
            NavTarget::Search => Route::Search {},
            NavTarget::Dashboard => Route::Dashboard {},
            NavTarget::Bookings => Route::Bookings {},
            NavTarget::Profile => Route::Profile {},
            NavTarget::Admin => Route::Admin {},
            NavTarget::AdminUsers => Route::AdminUsers {},
            NavTarget::AdminHotels => Route::AdminHotels {},
            NavTarget::AdminRooms => Route::AdminRooms {},
            NavTarget::Login => Route::Login {},
            NavTarget::Register => Route::Register {},
            NavTarget::LoggedOut => Route::LoggedOut {},
        }
    }
}

impl From<Redirect> for Route {
    fn from(redirect: Redirect) -> Self {
        match redirect {
            Redirect::Login => Route::Login {},
            Redirect::Home => Route::Home {},
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        eprintln!("Failed to initialise logger: {e}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(|| make_client(&config));

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            ToastProvider {
                Router::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_targets_resolve_to_paths() {
        assert_eq!(Route::from(NavTarget::Home).to_string(), "/");
        assert_eq!(Route::from(NavTarget::Bookings).to_string(), "/bookings");
        assert_eq!(Route::from(NavTarget::AdminRooms).to_string(), "/admin/rooms");
        assert_eq!(Route::from(NavTarget::LoggedOut).to_string(), "/logout");
    }

    #[test]
    fn test_guard_redirects() {
        assert_eq!(Route::from(Redirect::Login), Route::Login {});
        assert_eq!(Route::from(Redirect::Home), Route::Home {});
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        let route: Route = "/nowhere/at/all".parse().unwrap();
        assert!(matches!(route, Route::NotFound { .. }));
    }
}
