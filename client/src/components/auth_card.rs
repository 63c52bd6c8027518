//! Centered card used by the login, register, and callback pages.

use leptos::prelude::*;

/// Titled card wrapper with optional inline error and success messages.
#[component]
pub fn AuthCard(
    #[prop(into)] title: String,
    error: Signal<Option<String>>,
    success: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2 class="auth-card__title">{title}</h2>
                {move || error.get().map(|msg| view! { <p class="auth-message auth-message--error">{msg}</p> })}
                {move || success.get().map(|msg| view! { <p class="auth-message auth-message--success">{msg}</p> })}
                {children()}
            </div>
        </div>
    }
}
