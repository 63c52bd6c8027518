//! Login page supporting username + password and Google OAuth.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::auth::SessionContext;
use crate::components::auth_card::AuthCard;
use crate::state::form::{FormStatus, error_text};

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials.";
pub const OAUTH_FAILED_MESSAGE: &str = "Could not start the Google sign-in process. Please try again later.";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let status = RwSignal::new(FormStatus::default());

    let on_submit = {
        let session = session.clone();
        move |ev: leptos::ev::SubmitEvent| {
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
                    let result =
                        crate::auth::ops::login_with_password(&session.mechanism, &session.state, &credentials, &navigate)
                            .await;
                    if let Err(e) = result {
                        log::warn!("login failed: {e}");
                        status.update(|s| s.fail(LOGIN_FAILED_MESSAGE));
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&session, &navigate, credentials);
            }
        }
    };

    let on_google = move |_| {
        if !status.try_update(FormStatus::begin).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            leptos::task::spawn_local(async move {
                let result = crate::auth::ops::begin_oauth_login(&session.mechanism, crate::util::browser::redirect_to).await;
                if let Err(e) = result {
                    log::warn!("google login error: {e}");
                    status.update(|s| s.fail(OAUTH_FAILED_MESSAGE));
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &session;
        }
    };

    view! {
        <AuthCard title="Lyceum AI" error=error_text(status) success=Signal::derive(|| None)>
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
                    "Log In"
                </button>
            </form>
            <button
                class="auth-button auth-button--google"
                type="button"
                disabled=move || status.get().is_submitting()
                on:click=on_google
            >
                "Sign in with Google"
            </button>
            <p class="auth-footnote">
                "New user? "
                <A href="/register">"Register here"</A>
            </p>
        </AuthCard>
    }
}
