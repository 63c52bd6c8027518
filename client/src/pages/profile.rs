//! Protected profile page showing the signed-in account.
//!
//! SYSTEM CONTEXT
//! ==============
//! Only rendered by the route guard when the session is authenticated. A
//! rejected profile fetch (expired bearer token) clears the session, which
//! sends the guard back to `/login`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::auth::SessionContext;
use crate::net::types::User;

pub const PROFILE_FAILED_MESSAGE: &str = "Could not load your profile.";

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();

    let profile = RwSignal::new(None::<User>);
    let error = RwSignal::new(None::<&'static str>);
    let signing_out = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::auth::SessionMechanism;

        let session = session.clone();
        if let Some(identity) = session.state.get_untracked().identity().cloned() {
            leptos::task::spawn_local(async move {
                match session.mechanism.load_profile(&identity).await {
                    Ok(user) => profile.set(Some(user)),
                    Err(crate::error::AuthError::ProfileFetch) => {
                        log::warn!("profile rejected; clearing session");
                        crate::auth::ops::clear(&session.mechanism, &session.state);
                    }
                    Err(e) => {
                        log::warn!("profile load failed: {e}");
                        error.set(Some(PROFILE_FAILED_MESSAGE));
                    }
                }
            });
        }
    }

    let on_logout = move |_| {
        if signing_out.get_untracked() {
            return;
        }
        signing_out.set(true);

        #[cfg(feature = "hydrate")]
        {
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::auth::ops::logout(&session.mechanism, &session.state, &navigate).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&session, &navigate);
        }
    };

    view! {
        <div class="profile-page">
            <div class="profile-card">
                <h2 class="profile-card__title">"Your Profile"</h2>
                {move || error.get().map(|msg| view! { <p class="auth-message auth-message--error">{msg}</p> })}
                {move || match profile.get() {
                    Some(user) => view! {
                        <dl class="profile-fields">
                            <dt>"Email"</dt>
                            <dd>{user.email}</dd>
                            <dt>"User ID"</dt>
                            <dd>{user.id}</dd>
                        </dl>
                    }
                    .into_any(),
                    None => view! { <p class="profile-loading">"Loading profile..."</p> }.into_any(),
                }}
                <button class="auth-button" type="button" disabled=move || signing_out.get() on:click=on_logout>
                    "Log Out"
                </button>
            </div>
        </div>
    }
}
