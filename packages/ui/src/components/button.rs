use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Destructive,
    Ghost,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-blue-600 text-white hover:bg-blue-700",
            ButtonVariant::Secondary => "bg-gray-100 text-gray-800 hover:bg-gray-200",
            ButtonVariant::Outline => "border border-gray-300 text-gray-700 hover:bg-gray-50",
            ButtonVariant::Destructive => "bg-red-600 text-white hover:bg-red-700",
            ButtonVariant::Ghost => "text-blue-600 hover:underline",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: "px-4 py-2 rounded-lg font-medium transition disabled:opacity-50 disabled:cursor-not-allowed {variant.class()} {class}",
            r#type: r#type,
            disabled,
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destructive_is_red() {
        assert!(ButtonVariant::Destructive.class().contains("red"));
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
    }
}
