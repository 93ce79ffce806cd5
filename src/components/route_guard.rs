//! Conditional wrappers that gate routes on the current session state.
//!
//! Both guards hold rendering behind a neutral placeholder until hydration
//! completes, so a reload never flashes a redirect before the persisted
//! session has been read.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::Session;

/// Wrapper for routes that only make sense while anonymous (the login
/// screen). An authenticated user is sent to the dashboard instead.
#[component]
pub fn PublicRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();

    move || {
        if session.loading() {
            pending().into_any()
        } else if session.is_authenticated() {
            view! { <Redirect path="/dashboard"/> }.into_any()
        } else {
            children()
        }
    }
}

/// Wrapper for routes that require an authenticated session. Anonymous
/// visitors are sent to the login screen.
#[component]
pub fn PrivateRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();

    move || {
        if session.loading() {
            pending().into_any()
        } else if session.is_authenticated() {
            children()
        } else {
            view! { <Redirect path="/login"/> }.into_any()
        }
    }
}

fn pending() -> impl IntoView {
    view! { <div class="route-guard__pending"></div> }
}
