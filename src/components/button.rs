//! Buttons

use leptos::prelude::*;

/// Text-only button styled as a link. Never submits the surrounding form.
#[component]
pub fn LinkButton(
    children: Children,
    #[prop(optional, into)]
    class: String,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            type="button"
            on:click=move |_| on_click()
            class=format!("h-auto p-0 text-primary underline-offset-4 hover:underline {}", class)
        >
            {children()}
        </button>
    }
}
