//! Transient notifications on top of `dioxus_primitives::toast`.
//!
//! The primitive provider owns the stack, the timers and dismissal. The
//! [`Toasts`] handle adds the kind table and the configured display time.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_primitives::toast::{self, ToastOptions, ToastType};

use crate::config::use_config;

const TOAST_CSS: Asset = asset!("/src/components/toast.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
}

#[derive(Clone)]
pub struct ToastStyle {
    pub toast_type: ToastType,
    pub icon: &'static str,
}

impl ToastKind {
    pub const ALL: [ToastKind; 4] = [
        ToastKind::Success,
        ToastKind::Error,
        ToastKind::Info,
        ToastKind::Warning,
    ];

    pub fn style(&self) -> ToastStyle {
        match self {
            ToastKind::Success => ToastStyle {
                toast_type: ToastType::Success,
                icon: "✓",
            },
            ToastKind::Error => ToastStyle {
                toast_type: ToastType::Error,
                icon: "✕",
            },
            ToastKind::Info => ToastStyle {
                toast_type: ToastType::Info,
                icon: "ℹ",
            },
            ToastKind::Warning => ToastStyle {
                toast_type: ToastType::Warning,
                icon: "⚠",
            },
        }
    }

    fn title(&self, message: &str) -> String {
        format!("{} {message}", self.style().icon)
    }
}

/// Copyable handle onto the notification stack.
#[derive(Clone, Copy)]
pub struct Toasts {
    inner: toast::Toasts,
    duration: Duration,
}

impl Toasts {
    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        self.inner.show(
            kind.title(&message),
            kind.style().toast_type,
            ToastOptions::new().duration(self.duration),
        );
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(ToastKind::Warning, message);
    }
}

/// Each toast stays up for `ui.toast_duration_ms` unless closed first.
pub fn use_toast() -> Toasts {
    let inner = toast::use_toast();
    let duration = Duration::from_millis(use_config().ui.toast_duration_ms);
    Toasts { inner, duration }
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: TOAST_CSS }
        toast::ToastProvider {
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_kind_has_distinct_style() {
        let icons: HashSet<_> = ToastKind::ALL.iter().map(|k| k.style().icon).collect();
        assert_eq!(icons.len(), ToastKind::ALL.len());
        assert_eq!(ToastKind::Success.style().icon, "✓");
        assert_eq!(ToastKind::Warning.style().icon, "⚠");
    }

    #[test]
    fn test_kind_maps_to_primitive_type() {
        assert!(matches!(ToastKind::Error.style().toast_type, ToastType::Error));
        assert!(matches!(ToastKind::Info.style().toast_type, ToastType::Info));
        assert!(matches!(ToastKind::Warning.style().toast_type, ToastType::Warning));
        assert_eq!(ToastKind::Error.title("Failed to load rooms"), "✕ Failed to load rooms");
    }
}
