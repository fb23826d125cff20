//! Welcome login page - Leptos frontend
//!
//! A single centered login card with client-side validation and a
//! simulated submission.

pub mod components;
pub mod config;
pub mod form;
pub mod pages;
pub mod timer;
pub mod types;
pub mod validation;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

use pages::IndexPage;

/// Main application component
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Welcome" />
        <Meta name="description" content="Sign in with your email address and password" />
        <IndexPage />
    }
}
