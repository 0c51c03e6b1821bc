use dioxus::prelude::*;

/// Text-like `<input>`. Empty `min` / `max` / `step` are left off the element.
#[component]
pub fn Input(
    #[props(default)] id: String,
    #[props(default)] class: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default)] placeholder: String,
    #[props(default)] value: String,
    #[props(default)] min: String,
    #[props(default)] max: String,
    #[props(default)] step: String,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let set = |v: String| (!v.is_empty()).then_some(v);
    let (min, max, step) = (set(min), set(max), set(step));
    rsx! {
        input {
            id,
            class: "px-3 py-2 border border-gray-300 rounded-lg focus:outline-none focus:ring-2 focus:ring-blue-500 {class}",
            r#type: r#type,
            placeholder,
            value,
            min,
            max,
            step,
            required,
            disabled,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            r#for: html_for,
            class: "block text-sm font-medium text-gray-700 mb-1",
            {children}
        }
    }
}
