//! Root application component with routing and the session context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::auth::{SessionContext, active_session};
use crate::components::guarded::Guarded;
use crate::config::ApiConfig;
use crate::pages::{auth_callback::AuthCallbackPage, login::LoginPage, profile::ProfilePage, register::RegisterPage};
use crate::route::AppRoute;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the single session store, provides it to every page, and kicks off
/// the startup session check once the app is running in the browser.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionContext::new(active_session(ApiConfig::from_build_env()));
    provide_context(session.clone());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        crate::auth::ops::initialize(&session.mechanism, &session.state).await;
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = session;

    view! {
        <Stylesheet id="leptos" href="/pkg/lyceum.css"/>
        <Title text="Lyceum AI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Guarded route=AppRoute::Root/> }/>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <Guarded route=AppRoute::Login><LoginPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| view! { <Guarded route=AppRoute::Register><RegisterPage/></Guarded> }
                />
                <Route
                    path=(StaticSegment("auth"), StaticSegment("callback"))
                    view=|| view! { <Guarded route=AppRoute::AuthCallback><AuthCallbackPage/></Guarded> }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| view! { <Guarded route=AppRoute::Profile><ProfilePage/></Guarded> }
                />
            </Routes>
        </Router>
    }
}
