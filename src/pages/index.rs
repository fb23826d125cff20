//! Landing page

use leptos::prelude::*;

use super::login::LoginForm;

/// Full-viewport page with the login form centered on it
#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <main class="flex items-center justify-center min-h-screen bg-background">
            <LoginForm />
        </main>
    }
}
