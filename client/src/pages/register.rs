//! Registration page. Creating an account does not sign the user in; a
//! short success message is shown before returning to login.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::SessionContext;
use crate::components::auth_card::AuthCard;
use crate::state::form::{FormStatus, error_text, success_text};
use crate::util::redirect::cleanup_slot;

pub const REGISTER_FAILED_MESSAGE: &str = "Could not register. The username might be taken.";
pub const REGISTERED_MESSAGE: &str = "Registration successful! You can now log in.";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());
    let pending = cleanup_slot();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (user, pass) = (username.get_untracked(), password.get_untracked());
        let Some(credentials) = status.try_update(|s| s.start(&user, &pass)).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::auth::ops::register_user(&session.mechanism, &credentials).await {
                    Ok(redirect) => {
                        status.update(|s| s.succeed(REGISTERED_MESSAGE));
                        let handle = crate::util::redirect::schedule(redirect, navigate);
                        crate::util::redirect::park(pending, handle);
                    }
                    Err(e) => {
                        log::warn!("registration failed: {e}");
                        status.update(|s| s.fail(REGISTER_FAILED_MESSAGE));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &navigate, credentials, pending);
        }
    };

    view! {
        <AuthCard title="Register" error=error_text(status) success=success_text(status)>
            <form class="auth-form" on:submit=on_submit>
                <label class="auth-label" for="username">"Username"</label>
                <input
                    id="username"
                    class="auth-input"
                    type="text"
                    required
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <label class="auth-label" for="password">"Password"</label>
                <input
                    id="password"
                    class="auth-input"
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=move || status.get().is_submitting()>
                    "Sign Up"
                </button>
            </form>
            <p class="auth-footnote">
                "Already have an account? "
                <A href="/login">"Login"</A>
            </p>
        </AuthCard>
    }
}
