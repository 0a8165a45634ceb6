use dioxus::prelude::*;

/// Labelled text input, or a textarea when `multiline` is set
#[component]
pub fn FormField(
    label: String,
    value: String,
    #[props(default)] multiline: bool,
    #[props(default)] required: bool,
    #[props(default)] placeholder: String,
    on_input: EventHandler<String>,
) -> Element {
    let marker = if required { " *" } else { "" };

    rsx! {
        label {
            class: "form-field",
            span { "{label}{marker}" }
            if multiline {
                textarea {
                    value: "{value}",
                    placeholder: "{placeholder}",
                    rows: 4,
                    oninput: move |event: Event<FormData>| on_input.call(event.value())
                }
            } else {
                input {
                    r#type: "text",
                    value: "{value}",
                    placeholder: "{placeholder}",
                    oninput: move |event: Event<FormData>| on_input.call(event.value())
                }
            }
        }
    }
}
