use dioxus::prelude::*;

use super::{Button, ButtonVariant};

/// Zero-based page position within a server-paginated list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pager {
    pub page: u32,
    pub total_pages: u32,
}

impl Pager {
    pub fn new(page: u32, total_pages: u32) -> Self {
        Self { page, total_pages }
    }

    /// Hidden for single-page and unpaginated lists.
    pub fn is_visible(&self) -> bool {
        self.total_pages > 1
    }

    pub fn has_prev(&self) -> bool {
        self.page > 0
    }

    pub fn has_next(&self) -> bool {
        self.page + 1 < self.total_pages
    }

    pub fn prev(&self) -> Option<u32> {
        self.has_prev().then(|| self.page - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.page + 1)
    }

    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page + 1, self.total_pages)
    }
}

#[component]
pub fn Pagination(page: u32, total_pages: u32, on_change: EventHandler<u32>) -> Element {
    let pager = Pager::new(page, total_pages);
    if !pager.is_visible() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "flex justify-center items-center gap-4 mt-8",
            Button {
                variant: ButtonVariant::Outline,
                disabled: !pager.has_prev(),
                onclick: move |_| {
                    if let Some(p) = pager.prev() {
                        on_change.call(p);
                    }
                },
                "Previous"
            }
            span { class: "text-gray-700 font-medium", "{pager.label()}" }
            Button {
                variant: ButtonVariant::Outline,
                disabled: !pager.has_next(),
                onclick: move |_| {
                    if let Some(p) = pager.next() {
                        on_change.call(p);
                    }
                },
                "Next"
            }
        }
    }
}
