//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::route_guard::{PrivateRoute, PublicRoute};
use crate::net::ApiClient;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::auth::Session;

/// Root application component.
///
/// Creates the shared API client and session, hydrates the session from
/// persisted storage before the router renders, and wires up the routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = ApiClient::from_env();
    let session = Session::new();
    provide_context(api);
    provide_context(session);

    // Hydration is synchronous, so the guards never evaluate against a
    // half-initialized session on first render.
    session.hydrate();

    view! {
        <Title text="Windchill PLM"/>

        <Router>
            <SessionExpiryRedirect/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("login")
                    view=|| view! { <PublicRoute><LoginPage/></PublicRoute> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| view! { <PrivateRoute><DashboardPage/></PrivateRoute> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/dashboard"/> }/>
            </Routes>
        </Router>
    }
}

/// Routing-layer subscriber for the HTTP client's session-expired signal.
///
/// By the time the signal fires, the request pipeline has already cleared
/// the persisted store; this resets the in-memory session and performs the
/// client-side navigation to the login screen, once per failing response.
#[component]
fn SessionExpiryRedirect() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    Effect::new(move || {
        if api.session_expired().get() > 0 {
            session.expire();
            navigate("/login", NavigateOptions::default());
        }
    });
}
