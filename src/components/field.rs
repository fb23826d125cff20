//! Labeled input with an inline validation message

use leptos::prelude::*;

const INPUT_CLASS: &str = "h-auto w-full border-x-0 border-t-0 rounded-none border-b-2 border-gray-300 \
                           bg-transparent p-0 pb-1 text-base text-card-foreground shadow-none \
                           focus:outline-none focus:border-primary";

#[component]
pub fn TextField(
    /// Element id, also used by the label
    id: &'static str,
    label: &'static str,
    /// HTML input type
    #[prop(default = "text")]
    input_type: &'static str,
    #[prop(default = "off")]
    autocomplete: &'static str,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Message shown under the input
    #[prop(into)]
    error: Signal<Option<&'static str>>,
    /// Called with the new value on every keystroke
    on_input: impl Fn(String) + 'static,
    /// Called when the input loses focus
    on_blur: impl Fn() + 'static,
) -> impl IntoView {
    let message_id = format!("{}-message", id);
    let has_error = move || error.get().is_some();

    view! {
        <div class="space-y-1">
            <label for=id class="text-sm font-medium text-gray-600">{label}</label>
            <input
                id=id
                name=id
                type=input_type
                autocomplete=autocomplete
                prop:value=move || value.get()
                on:input=move |ev| on_input(event_target_value(&ev))
                on:blur=move |_| on_blur()
                aria-invalid=move || if has_error() { "true" } else { "false" }
                aria-describedby=message_id.clone()
                class=INPUT_CLASS
            />
            <p id=message_id class="text-sm font-medium text-destructive min-h-[1.25rem]">
                {move || error.get().unwrap_or_default()}
            </p>
        </div>
    }
}
