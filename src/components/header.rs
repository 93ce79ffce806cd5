//! Top header with the product title, page subtitle, and logout.

use leptos::prelude::*;

use crate::components::button::Button;
use crate::state::auth::Session;

/// Application header. Logout clears the session; the private route guard
/// then redirects to the login screen, so no navigation happens here.
#[component]
pub fn Header(#[prop(optional, into)] title: String) -> impl IntoView {
    let session = expect_context::<Session>();

    let on_logout = Callback::new(move |()| session.logout());

    view! {
        <header class="header">
            <div class="header__left">
                <h1 class="header__title">"Windchill PLM"</h1>
                {(!title.is_empty()).then(|| view! { <span class="header__subtitle">{title.clone()}</span> })}
            </div>
            <div class="header__right">
                {move || {
                    session
                        .user()
                        .map(|user| {
                            view! {
                                <span class="header__user">
                                    {format!("Welcome, {}", user.greeting_name())}
                                </span>
                                <Button variant="secondary" on_click=on_logout>
                                    "Logout"
                                </Button>
                            }
                        })
                }}
            </div>
        </header>
    }
}
