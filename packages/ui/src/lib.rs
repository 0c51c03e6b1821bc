//! # UI crate — shared Dioxus components and views for Luxury Stay
//!
//! Platform packages mount the views and supply navigation through
//! `EventHandler` props; nothing in here depends on a router.
//!
//! ## Contexts
//!
//! Provided at the root, in this order:
//!
//! | Context | Provider | Hook |
//! |---------|----------|------|
//! | `ClientConfig` | `use_context_provider(load_config)` | [`use_config`] |
//! | [`AppClient`] | `use_context_provider(|| make_client(..))` | [`use_api`] |
//! | `Signal<AuthState>` | [`AuthProvider`] | [`use_auth`] |
//! | [`Toasts`] | [`ToastProvider`] | [`use_toast`] |
//!
//! ## Pure state
//!
//! The modules below hold the rules the views render and are tested without
//! a renderer:
//!
//! - [`guard`]: which identities may see a protected layout
//! - [`catalog`]: in-page hotel search and sort
//! - [`booking_flow`]: the room booking modal state machine
//! - [`extend`]: cancel / extend eligibility and date bounds
//! - [`hotel_form`]: admin hotel and room form validation
//! - [`mutations`]: mutate-then-refetch steps, generic over the transport
//! - [`badges`]: display labels and classes for enum fields

pub mod components;
pub mod views;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod config;
pub use config::{load_config, use_config};

mod client;
pub use client::{make_client, use_api, AppClient, AppStore};

mod timer;
pub use timer::sleep_ms;

mod auth;
pub use auth::{sign_in, sign_out, use_auth, AuthProvider, AuthState};

pub use components::{use_toast, ToastKind, ToastProvider, Toasts};

mod navbar;
pub use navbar::{nav_links, NavLink, NavTarget, Navbar};

pub mod badges;
pub mod booking_flow;
pub mod catalog;
pub mod extend;
pub mod guard;
pub mod hotel_form;
pub mod mutations;
