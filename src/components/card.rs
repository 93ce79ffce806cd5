//! Content card with optional title and subtitle.

use leptos::prelude::*;

#[component]
pub fn Card(
    #[prop(optional, into)] title: String,
    #[prop(optional, into)] subtitle: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let class = if class.is_empty() {
        "card".to_owned()
    } else {
        format!("card {class}")
    };

    view! {
        <div class=class>
            {(!title.is_empty()).then(|| view! { <h3 class="card__title">{title.clone()}</h3> })}
            {(!subtitle.is_empty()).then(|| view! { <p class="card__subtitle">{subtitle.clone()}</p> })}
            <div class="card__body">{children()}</div>
        </div>
    }
}
