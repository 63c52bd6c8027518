//! Route-guard wrapper for page views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `<Route>` view is wrapped in `Guarded` so placeholder and redirect
//! behavior comes from one place (`util::auth::decide_route`).

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::auth::{ActiveSession, SessionContext, SessionMechanism};
use crate::route::AppRoute;
use crate::util::auth::{RouteDecision, decide_route};

/// Neutral view shown while the startup session check is in flight.
#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! { <div class="loading">"Loading..."</div> }
}

/// Render `children` only when the guard allows `route`; otherwise show the
/// placeholder or redirect (replacing the history entry).
#[component]
pub fn Guarded(route: AppRoute, #[prop(optional)] children: Option<ChildrenFn>) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let state = session.state;
    let decision = Memo::new(move |_| decide_route(route, &state.get(), ActiveSession::PUBLIC_ACCESS));

    move || match decision.get() {
        RouteDecision::Placeholder => view! { <LoadingPlaceholder/> }.into_any(),
        RouteDecision::Render => children.as_ref().map(|c| c()).into_any(),
        RouteDecision::Redirect(target) => {
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=target.path() options=options/> }.into_any()
        }
    }
}
