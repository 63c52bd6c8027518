//! OAuth callback page: ingests `?token=` and moves on to the profile, or
//! explains the failure and returns to login after a grace period.

#[cfg(test)]
#[path = "auth_callback_test.rs"]
mod auth_callback_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::auth::SessionContext;
use crate::components::auth_card::AuthCard;
use crate::error::AuthError;
use crate::util::redirect::cleanup_slot;

pub const FINALIZING_MESSAGE: &str = "Finalizing authentication, please wait...";

/// Inline message for a failed callback.
pub fn callback_failure_message(error: &AuthError) -> &'static str {
    match error {
        AuthError::MissingToken => "Authentication failed. No token provided. Redirecting to login...",
        _ => "Authentication failed. Please try signing in again.",
    }
}

#[component]
pub fn AuthCallbackPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let query = use_query_map();

    let error = RwSignal::new(None::<String>);
    let pending = cleanup_slot();

    #[cfg(feature = "hydrate")]
    {
        let token = query.get_untracked().get("token");
        leptos::task::spawn_local(async move {
            let result = crate::auth::ops::login_with_oauth_token(
                &session.mechanism,
                &session.state,
                token.as_deref(),
                &navigate,
            )
            .await;
            if let Err(e) = result {
                log::warn!("oauth callback failed: {e}");
                error.set(Some(callback_failure_message(&e).to_owned()));
                if let Some(redirect) = e.fallback_redirect() {
                    let handle = crate::util::redirect::schedule(redirect, navigate);
                    crate::util::redirect::park(pending, handle);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (&session, &navigate, query, pending);
    }

    view! {
        <AuthCard title="Signing in" error=error.into() success=Signal::derive(|| None)>
            <Show when=move || error.get().is_none()>
                <p class="auth-message">{FINALIZING_MESSAGE}</p>
            </Show>
            <Show when=move || error.get().is_some()>
                <p class="auth-footnote">
                    <A href="/login">"Back to login"</A>
                </p>
            </Show>
        </AuthCard>
    }
}
