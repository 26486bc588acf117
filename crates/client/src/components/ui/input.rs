use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    #[props(optional)]
    pub class: Option<String>,
    pub name: String,
    pub value: String,
    pub oninput: EventHandler<FormEvent>,
    #[props(optional)]
    pub placeholder: Option<String>,
    /// Draws the error outline.
    #[props(optional)]
    pub invalid: Option<bool>,
}

#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let base = "mt-1 block w-full rounded-lg border p-3 shadow-sm focus:outline-none focus:ring-2";
    let state = if props.invalid.unwrap_or(false) {
        "border-red-400 focus:ring-red-300"
    } else {
        "border-gray-200 focus:ring-yellow-300"
    };
    let class = match props.class {
        Some(extra) if !extra.is_empty() => format!("{} {} {}", base, state, extra),
        _ => format!("{} {}", base, state),
    };

    rsx! {
        input {
            class,
            r#type: "text",
            name: "{props.name}",
            value: "{props.value}",
            placeholder: props.placeholder.unwrap_or_default(),
            oninput: move |e| props.oninput.call(e),
        }
    }
}

/// Inline validation message under a field.
#[component]
pub fn FieldError(message: String) -> Element {
    rsx! {
        p { class: "text-xs text-red-500 mt-1", "{message}" }
    }
}
