//! Login form

use leptos::prelude::*;

use crate::components::{FormCard, LinkButton, LoadingSpinner, TextField};
use crate::config::FormConfig;
use crate::form::LoginController;
use crate::timer::BrowserScheduler;
use crate::types::FieldName;

/// Email/password card with inline validation and a simulated submit
#[component]
pub fn LoginForm() -> impl IntoView {
    let controller = LoginController::new(BrowserScheduler, FormConfig::default());

    // Reactive copy of the controller state for the view
    let form = RwSignal::new(controller.snapshot());
    controller.subscribe(move |state| form.set(state.clone()));

    let controller = StoredValue::new_local(controller);

    // Drop the pending timer if the form goes away mid-submit
    on_cleanup(move || {
        if let Some(controller) = controller.try_get_value() {
            controller.teardown();
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Err(rejected) = controller.get_value().submit() {
            tracing::debug!(%rejected, "Submit rejected");
        }
    };

    let field_value = move |field: FieldName| {
        Signal::derive(move || form.with(|s| s.value(field).to_string()))
    };
    let field_error = move |field: FieldName| Signal::derive(move || form.with(|s| s.error(field)));

    let is_submitting = move || form.with(|s| s.is_submitting());

    view! {
        <FormCard>
            <div class="flex flex-col items-center pt-8 pb-4">
                <h1 class="text-3xl font-bold text-card-foreground">"Welcome"</h1>
            </div>

            <div class="p-8 pt-2">
                <form on:submit=on_submit novalidate=true class="space-y-6">
                    <div class="space-y-4">
                        <TextField
                            id="email"
                            label="Email Address"
                            input_type="email"
                            autocomplete="email"
                            value=field_value(FieldName::Email)
                            error=field_error(FieldName::Email)
                            on_input=move |value| controller.get_value().update_field(FieldName::Email, value)
                            on_blur=move || controller.get_value().touch(FieldName::Email)
                        />
                        <TextField
                            id="password"
                            label="Password"
                            input_type="password"
                            autocomplete="current-password"
                            value=field_value(FieldName::Password)
                            error=field_error(FieldName::Password)
                            on_input=move |value| controller.get_value().update_field(FieldName::Password, value)
                            on_blur=move || controller.get_value().touch(FieldName::Password)
                        />
                    </div>

                    <div class="flex justify-start">
                        <LinkButton
                            class="text-sm font-normal"
                            on_click=|| tracing::debug!("Forgot password clicked")
                        >
                            "Forgot Password"
                        </LinkButton>
                    </div>

                    // Submit button
                    <button
                        type="submit"
                        disabled=move || form.with(|s| s.is_submit_disabled())
                        class="w-full h-12 flex items-center justify-center gap-2 rounded-lg text-base font-semibold
                               bg-primary text-primary-foreground hover:bg-primary/90
                               disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        <Show when=is_submitting>
                            <LoadingSpinner />
                        </Show>
                        {move || form.with(|s| s.submit_label())}
                    </button>
                </form>

                <div class="mt-8 text-center text-sm">
                    <span class="text-card-foreground/80">"Don't have an account? "</span>
                    <LinkButton
                        class="font-semibold"
                        on_click=|| tracing::debug!("Sign up clicked")
                    >
                        "SignUp"
                    </LinkButton>
                </div>
            </div>
        </FormCard>
    }
}
